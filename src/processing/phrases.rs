//! Multi-word phrase extraction
//!
//! Phrases are pulled out of normalized text before single-token scanning and
//! their spans are blanked, so a phrase is never counted a second time by the
//! token classifier. Entries are tried in dictionary order against the
//! progressively blanked text: when two phrases overlap, the one listed first
//! wins, regardless of length.

use crate::error::{Result, ScanError};
use crate::processing::normalizer::Normalizer;
use log::warn;
use regex::Regex;

/// A dictionary phrase compiled against its normalized spelling
#[derive(Debug, Clone)]
struct PhrasePattern {
    /// Lower-cased dictionary spelling, used as display text and key
    phrase: String,
    regex: Regex,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseExtraction {
    /// One entry per occurrence
    pub phrases: Vec<String>,
    pub remaining_text: String,
}

#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    patterns: Vec<PhrasePattern>,
}

impl PhraseExtractor {
    pub fn new(phrases: &[String], normalizer: &Normalizer) -> Result<Self> {
        let mut patterns = Vec::with_capacity(phrases.len());

        for entry in phrases {
            let phrase = entry.trim().to_lowercase();
            let normalized = normalizer.normalize(&phrase);
            if normalized.is_empty() {
                warn!("Skipping phrase '{}': nothing left after normalization", entry);
                continue;
            }

            let regex = Regex::new(&boundary_pattern(&normalized)).map_err(|e| {
                ScanError::Vocabulary(format!("Failed to compile phrase '{}': {}", entry, e))
            })?;

            patterns.push(PhrasePattern { phrase, regex });
        }

        Ok(Self { patterns })
    }

    pub fn extract(&self, normalized_text: &str) -> PhraseExtraction {
        let mut remaining_text = normalized_text.to_string();
        let mut phrases = Vec::new();

        for pattern in &self.patterns {
            let hits = pattern.regex.find_iter(&remaining_text).count();
            if hits == 0 {
                continue;
            }

            phrases.extend(std::iter::repeat(pattern.phrase.clone()).take(hits));
            remaining_text = pattern
                .regex
                .replace_all(&remaining_text, " ")
                .into_owned();
        }

        PhraseExtraction {
            phrases,
            remaining_text,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Escaped regex for `term`, anchored on word boundaries where the term starts
/// or ends with a word character.
pub(crate) fn boundary_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 8);
    if term.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(phrases: &[&str]) -> PhraseExtractor {
        let phrases: Vec<String> = phrases.iter().map(|s| s.to_string()).collect();
        PhraseExtractor::new(&phrases, &Normalizer::new()).unwrap()
    }

    #[test]
    fn test_extracts_every_occurrence() {
        let extractor = extractor(&["distributed systems"]);
        let result = extractor.extract("distributed systems and more distributed systems");

        assert_eq!(result.phrases, vec!["distributed systems", "distributed systems"]);
        assert!(!result.remaining_text.contains("distributed"));
        assert!(result.remaining_text.contains("and more"));
    }

    #[test]
    fn test_dictionary_spelling_matches_normalized_text() {
        let extractor = extractor(&["CI/CD"]);
        let result = extractor.extract("built ci cd pipelines");

        assert_eq!(result.phrases, vec!["ci/cd"]);
        assert_eq!(
            result.remaining_text.split_whitespace().collect::<Vec<_>>(),
            vec!["built", "pipelines"]
        );
    }

    #[test]
    fn test_respects_word_boundaries() {
        let extractor = extractor(&["cloud computing"]);
        let result = extractor.extract("soundcloud computings");

        assert!(result.phrases.is_empty());
        assert_eq!(result.remaining_text, "soundcloud computings");
    }

    #[test]
    fn test_first_listed_phrase_wins_overlap() {
        let extractor = extractor(&["react testing", "react testing library"]);
        let result = extractor.extract("react testing library");

        assert_eq!(result.phrases, vec!["react testing"]);
        assert_eq!(result.remaining_text.trim(), "library");
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let extractor = extractor(&["   ", "///", "event-driven architecture"]);
        assert_eq!(extractor.len(), 1);
    }

    #[test]
    fn test_boundary_pattern_only_anchors_word_edges() {
        assert_eq!(boundary_pattern("worked on"), r"\bworked on\b");
        assert_eq!(boundary_pattern("c++"), r"\bc\+\+");
        assert_eq!(boundary_pattern(".net"), r"\.net\b");
    }
}
