//! Matching engine: normalization, phrase extraction, classification, scoring

use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::processing::classifier::{tokenize, KeywordAccumulator, Source};
use crate::processing::keyword::AnalysisSummary;
use crate::processing::normalizer::Normalizer;
use crate::processing::scorer::{Scorer, ScoringWeights, SentenceSplitter};
use crate::processing::vocabulary::Vocabulary;
use log::debug;

/// Deterministic resume/job description matcher.
///
/// Holds only immutable data, so one engine can serve any number of
/// independent analyses.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    vocabulary: Vocabulary,
    weights: ScoringWeights,
    normalizer: Normalizer,
    sentences: SentenceSplitter,
}

impl MatchEngine {
    pub fn new(vocabulary: Vocabulary, weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            vocabulary,
            weights,
            normalizer: Normalizer::new(),
            sentences: SentenceSplitter::new(),
        })
    }

    /// Engine over the built-in vocabulary and default weights
    pub fn with_defaults() -> Result<Self> {
        Self::new(Vocabulary::builtin()?, ScoringWeights::default())
    }

    /// Engine over the configured vocabulary bundle (or the built-in one) and weights
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = match &config.vocabulary.path {
            Some(path) => {
                debug!("Loading vocabulary bundle from {}", path.display());
                Vocabulary::load(path)?
            }
            None => Vocabulary::builtin()?,
        };
        Self::new(vocabulary, config.scoring)
    }

    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<AnalysisSummary> {
        if resume_text.trim().is_empty() && jd_text.trim().is_empty() {
            return Err(ScanError::InvalidInput(
                "Both the resume and the job description are empty".to_string(),
            ));
        }

        let phrases = self.vocabulary.phrases();
        let jd = phrases.extract(&self.normalizer.normalize(jd_text));
        let resume = phrases.extract(&self.normalizer.normalize(resume_text));

        let jd_tokens = tokenize(&jd.remaining_text, &self.vocabulary);
        let resume_tokens = tokenize(&resume.remaining_text, &self.vocabulary);

        let mut accumulator = KeywordAccumulator::new();
        accumulator.accumulate_phrases(&jd.phrases, Source::JobDescription);
        accumulator.accumulate_phrases(&resume.phrases, Source::Resume);
        accumulator.accumulate(&jd_tokens, Source::JobDescription, &self.vocabulary);
        accumulator.accumulate(&resume_tokens, Source::Resume, &self.vocabulary);

        debug!(
            "Tracked {} terms ({} JD phrases, {} resume phrases, {} JD tokens, {} resume tokens)",
            accumulator.len(),
            jd.phrases.len(),
            resume.phrases.len(),
            jd_tokens.len(),
            resume_tokens.len()
        );

        let scorer = Scorer::new(&self.vocabulary, &self.weights, &self.sentences);
        let impact = scorer.assess_impact(resume_text);
        let summary = scorer.score(accumulator.into_jd_results(), jd_text, impact);

        debug!(
            "Match score {} ({} of {} JD keywords present), impact {}",
            summary.score, summary.matched_keywords, summary.total_jd_keywords, summary.impact_score
        );

        Ok(summary)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_defaults().expect("Failed to build default match engine")
    }
}

/// Analyze with the built-in vocabulary and default weights
pub fn analyze(resume_text: &str, jd_text: &str) -> Result<AnalysisSummary> {
    MatchEngine::with_defaults()?.analyze(resume_text, jd_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keyword::{KeywordCategory, Significance};

    #[test]
    fn test_blank_inputs_are_rejected() {
        let engine = MatchEngine::default();
        let err = engine.analyze("  \n\t", "").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_job_description_scores_full() {
        let engine = MatchEngine::default();
        let summary = engine.analyze("Rust and Docker", "   ").unwrap();

        assert_eq!(summary.score, 100);
        assert!(summary.results.is_empty());
        assert_eq!(summary.total_jd_keywords, 0);
    }

    #[test]
    fn test_phrase_not_double_counted_as_tokens() {
        let engine = MatchEngine::default();
        let summary = engine
            .analyze("Ran continuous integration daily", "Continuous integration is key")
            .unwrap();

        assert_eq!(summary.results.len(), 1);
        let phrase = &summary.results[0];
        assert_eq!(phrase.text, "continuous integration");
        assert_eq!(phrase.category, KeywordCategory::Phrase);
        assert_eq!(phrase.significance, Significance::High);
        assert!(phrase.is_present());
    }

    #[test]
    fn test_custom_weights_are_validated() {
        let weights = ScoringWeights {
            hard_skill_weight: 0.9,
            ..ScoringWeights::default()
        };
        let err = MatchEngine::new(Vocabulary::builtin().unwrap(), weights).unwrap_err();
        assert!(matches!(err, ScanError::Configuration(_)));
    }

    #[test]
    fn test_hard_only_weights() {
        let weights = ScoringWeights {
            hard_skill_weight: 1.0,
            soft_signal_weight: 0.0,
            phrase_weight: 0.0,
            weak_word_penalty: 8,
        };
        let engine = MatchEngine::new(Vocabulary::builtin().unwrap(), weights).unwrap();
        let summary = engine.analyze("python", "python and java").unwrap();

        assert_eq!(summary.calculation_breakdown.hard_skills_score, 50);
        assert_eq!(summary.score, 50);
    }

    #[test]
    fn test_sentence_boundaries_hold_across_analyses() {
        let engine = MatchEngine::default();
        let job = "Python is a plus. Kubernetes required.\nGo is nice";

        for _ in 0..3 {
            let summary = engine.analyze("python", job).unwrap();
            let kubernetes = summary.results.iter().find(|r| r.text == "kubernetes").unwrap();
            assert_eq!(kubernetes.significance, Significance::Critical);
            let python = summary.results.iter().find(|r| r.text == "python").unwrap();
            assert_eq!(python.significance, Significance::Normal);
        }
    }
}
