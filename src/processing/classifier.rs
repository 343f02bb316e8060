//! Keyword classification and per-source occurrence counting

use crate::processing::keyword::{KeywordCategory, KeywordResult};
use crate::processing::vocabulary::Vocabulary;
use std::collections::HashMap;

/// Which document an observation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    JobDescription,
    Resume,
}

/// Splits phrase-free text into scannable tokens.
///
/// Trailing periods are stripped so a sentence-final `docker.` reads as
/// `docker` while `node.js` stays intact. Junk tokens are dropped in either
/// spelling.
pub fn tokenize<'a>(remaining_text: &'a str, vocabulary: &Vocabulary) -> Vec<&'a str> {
    remaining_text
        .split_whitespace()
        .filter(|raw| !vocabulary.is_junk(raw))
        .map(|raw| raw.trim_end_matches('.'))
        .filter(|token| !token.is_empty() && !vocabulary.is_junk(token))
        .collect()
}

/// Accumulates keyword observations across both documents, keyed by
/// lower-cased term text
#[derive(Debug, Default)]
pub struct KeywordAccumulator {
    entries: HashMap<String, KeywordResult>,
}

impl KeywordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. The first text seen for a key is kept for display.
    pub fn track(&mut self, text: &str, category: KeywordCategory, source: Source) {
        if category == KeywordCategory::Unknown {
            return;
        }

        let entry = self
            .entries
            .entry(text.to_lowercase())
            .or_insert_with(|| KeywordResult::new(text, category));

        match source {
            Source::JobDescription => entry.count_in_jd += 1,
            Source::Resume => entry.count_in_resume += 1,
        }
    }

    pub fn accumulate_phrases(&mut self, phrases: &[String], source: Source) {
        for phrase in phrases {
            self.track(phrase, KeywordCategory::Phrase, source);
        }
    }

    /// Classify and count single tokens; unclassified tokens are ignored
    pub fn accumulate(&mut self, tokens: &[&str], source: Source, vocabulary: &Vocabulary) {
        for token in tokens {
            self.track(token, vocabulary.classify(token), source);
        }
    }

    /// Entries the job description mentions at least once
    pub fn into_jd_results(self) -> Vec<KeywordResult> {
        self.entries
            .into_values()
            .filter(|entry| entry.count_in_jd > 0)
            .collect()
    }

    pub fn get(&self, text: &str) -> Option<&KeywordResult> {
        self.entries.get(&text.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
