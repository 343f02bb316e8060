//! Significance ranking and score composition

use crate::error::{Result, ScanError};
use crate::processing::keyword::{
    AnalysisSummary, CalculationBreakdown, ImpactMetric, KeywordCategory, KeywordResult,
    Significance,
};
use crate::processing::vocabulary::Vocabulary;
use regex::Regex;
use serde::{Deserialize, Serialize};

const HARD_REQUIREMENT: &str = "Hard requirement.";
const HIGH_FREQUENCY: &str = "High frequency.";
const TECHNICAL_TERM: &str = "Technical Term";
const STRONGLY_PREFERRED: &str = "Strongly preferred.";
const MENTIONED: &str = "Appears in description.";

/// Composite weights and the per-weak-verb impact penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub hard_skill_weight: f64,
    pub soft_signal_weight: f64,
    pub phrase_weight: f64,
    pub weak_word_penalty: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            hard_skill_weight: 0.70,
            soft_signal_weight: 0.20,
            phrase_weight: 0.10,
            weak_word_penalty: 8,
        }
    }
}

impl ScoringWeights {
    /// Weights must be non-negative and sum to 1.0 so the composite stays in 0-100
    pub fn validate(&self) -> Result<()> {
        let weights = [
            self.hard_skill_weight,
            self.soft_signal_weight,
            self.phrase_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ScanError::Configuration(
                "Scoring weights must be finite and non-negative".to_string(),
            ));
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ScanError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.3}",
                total
            )));
        }
        Ok(())
    }
}

/// Weak-verb findings for a resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactAssessment {
    pub impact_score: u8,
    pub weak_words_found: Vec<ImpactMetric>,
}

/// Splits a job description into lower-cased sentences.
///
/// `.`, `!` and `?` only end a sentence when followed by whitespace or the end
/// of the text, so dotted names like `react.js` stay whole.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Regex,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"[.!?](?:\s|$)|\n").expect("Invalid sentence regex"),
        }
    }

    pub fn split(&self, jd_text: &str) -> Vec<String> {
        self.boundary
            .split(&jd_text.to_lowercase())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Rounded percentage of present terms in `category`; 100 when the job
/// description has none.
pub fn category_score(results: &[KeywordResult], category: KeywordCategory) -> u8 {
    let (total, matched) = results
        .iter()
        .filter(|r| r.category == category)
        .fold((0usize, 0usize), |(total, matched), r| {
            (total + 1, matched + usize::from(r.is_present()))
        });

    if total == 0 {
        100
    } else {
        (100.0 * matched as f64 / total as f64).round() as u8
    }
}

/// Ascending by significance, then missing before present, then text
pub fn rank(results: &mut [KeywordResult]) {
    results.sort_by(|a, b| {
        a.significance
            .cmp(&b.significance)
            .then_with(|| a.status().cmp(&b.status()))
            .then_with(|| a.text.cmp(&b.text))
    });
}

pub struct Scorer<'a> {
    vocabulary: &'a Vocabulary,
    weights: &'a ScoringWeights,
    sentences: &'a SentenceSplitter,
}

impl<'a> Scorer<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        weights: &'a ScoringWeights,
        sentences: &'a SentenceSplitter,
    ) -> Self {
        Self {
            vocabulary,
            weights,
            sentences,
        }
    }

    /// Tier and reason for one result, given the job description sentences
    pub fn assess_significance(
        &self,
        result: &KeywordResult,
        sentences: &[String],
    ) -> (Significance, &'static str) {
        let needle = result.text.to_lowercase();
        let required = sentences
            .iter()
            .any(|s| s.contains(&needle) && self.vocabulary.has_requirement_signal(s));

        if required {
            (Significance::Critical, HARD_REQUIREMENT)
        } else if result.count_in_jd >= 3 {
            (Significance::Critical, HIGH_FREQUENCY)
        } else if result.category == KeywordCategory::Phrase {
            (Significance::High, TECHNICAL_TERM)
        } else if result.count_in_jd == 2 {
            (Significance::High, STRONGLY_PREFERRED)
        } else {
            (Significance::Normal, MENTIONED)
        }
    }

    pub fn assess_impact(&self, resume_text: &str) -> ImpactAssessment {
        let weak_words_found: Vec<ImpactMetric> = self
            .vocabulary
            .weak_verbs()
            .iter()
            .filter(|w| w.is_found_in(resume_text))
            .map(|w| ImpactMetric {
                found: w.found.clone(),
                suggested: w.suggested.clone(),
            })
            .collect();

        let penalty = self.weights.weak_word_penalty as usize * weak_words_found.len();
        let impact_score = 100usize.saturating_sub(penalty) as u8;

        ImpactAssessment {
            impact_score,
            weak_words_found,
        }
    }

    pub fn composite(&self, breakdown: &CalculationBreakdown) -> u8 {
        let weighted = breakdown.hard_skills_score as f64 * self.weights.hard_skill_weight
            + breakdown.soft_signals_score as f64 * self.weights.soft_signal_weight
            + breakdown.phrases_score as f64 * self.weights.phrase_weight;
        weighted.round().clamp(0.0, 100.0) as u8
    }

    pub fn score(
        &self,
        mut results: Vec<KeywordResult>,
        jd_text: &str,
        impact: ImpactAssessment,
    ) -> AnalysisSummary {
        let sentences = self.sentences.split(jd_text);
        for result in results.iter_mut() {
            let (significance, reason) = self.assess_significance(result, &sentences);
            result.significance = significance;
            result.significance_reason = reason.to_string();
        }

        let calculation_breakdown = CalculationBreakdown {
            hard_skills_score: category_score(&results, KeywordCategory::HardSkill),
            soft_signals_score: category_score(&results, KeywordCategory::SoftSignal),
            phrases_score: category_score(&results, KeywordCategory::Phrase),
        };
        let score = self.composite(&calculation_breakdown);

        rank(&mut results);
        let matched_keywords = results.iter().filter(|r| r.is_present()).count();

        AnalysisSummary {
            score,
            total_jd_keywords: results.len(),
            matched_keywords,
            results,
            impact_score: impact.impact_score,
            weak_words_found: impact.weak_words_found,
            calculation_breakdown,
        }
    }
}
