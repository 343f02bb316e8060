//! Report assembled around an analysis summary for presentation

use crate::llm::insights::Insights;
use crate::processing::keyword::{AnalysisSummary, KeywordCategory};
use crate::processing::normalizer::Normalizer;
use crate::processing::scorer::ScoringWeights;
use crate::processing::vocabulary::VocabularyStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Résumé tokens shorter than this are never offered as near misses
const MIN_HINT_TOKEN_CHARS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: AnalysisSummary,
    /// One-line verdict
    pub verdict: String,
    pub near_misses: Vec<NearMiss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    pub metadata: ReportMetadata,
}

/// A missing term with a similar spelling somewhere in the résumé.
///
/// Hints are advisory only and never change the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearMiss {
    pub term: String,
    pub closest: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub resume_source: String,
    pub job_source: String,
    pub vocabulary: VocabularyStats,
    pub weights: ScoringWeights,
}

impl AnalysisReport {
    pub fn new(summary: AnalysisSummary, near_misses: Vec<NearMiss>, metadata: ReportMetadata) -> Self {
        let verdict = verdict_for(summary.score).to_string();
        Self {
            summary,
            verdict,
            near_misses,
            insights: None,
            metadata,
        }
    }

    pub fn with_insights(mut self, insights: Insights) -> Self {
        self.insights = Some(insights);
        self
    }
}

impl ReportMetadata {
    pub fn new(
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
        vocabulary: VocabularyStats,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            vocabulary,
            weights,
        }
    }
}

pub fn verdict_for(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent match - strong keyword coverage for this role",
        80..=89 => "Very good match - a few terms could be added",
        70..=79 => "Good match - some targeted additions recommended",
        60..=69 => "Fair match - several required terms are missing",
        50..=59 => "Below average match - significant gaps in required terms",
        _ => "Poor match - the resume misses most of the job's vocabulary",
    }
}

/// For each missing skill or signal, the most similar résumé token by
/// Jaro-Winkler at or above `threshold`.
pub fn find_near_misses(
    summary: &AnalysisSummary,
    resume_text: &str,
    normalizer: &Normalizer,
    threshold: f64,
) -> Vec<NearMiss> {
    let normalized = normalizer.normalize(resume_text);
    let tokens: BTreeSet<&str> = normalized
        .split_whitespace()
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| t.chars().count() >= MIN_HINT_TOKEN_CHARS)
        .collect();

    summary
        .missing()
        .filter(|r| r.category != KeywordCategory::Phrase)
        .filter_map(|result| {
            tokens
                .iter()
                .filter(|token| **token != result.text)
                .map(|token| (*token, strsim::jaro_winkler(&result.text, token)))
                .filter(|(_, similarity)| *similarity >= threshold)
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(token, similarity)| NearMiss {
                    term: result.text.clone(),
                    closest: token.to_string(),
                    similarity,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::MatchEngine;

    #[test]
    fn test_verdict_bands() {
        assert!(verdict_for(100).starts_with("Excellent"));
        assert!(verdict_for(85).starts_with("Very good"));
        assert!(verdict_for(65).starts_with("Fair"));
        assert!(verdict_for(0).starts_with("Poor"));
    }

    #[test]
    fn test_near_miss_suggests_abbreviation() {
        let engine = MatchEngine::with_defaults().unwrap();
        let resume = "Maintained Postgres clusters and Kubernete deployments.";
        let job = "Requires postgresql and kubernetes.";
        let summary = engine.analyze(resume, job).unwrap();

        let hints = find_near_misses(&summary, resume, engine.normalizer(), 0.88);

        let postgres = hints.iter().find(|h| h.term == "postgresql").unwrap();
        assert_eq!(postgres.closest, "postgres");
        assert!(postgres.similarity >= 0.88);

        let kube = hints.iter().find(|h| h.term == "kubernetes").unwrap();
        assert_eq!(kube.closest, "kubernete");
    }

    #[test]
    fn test_near_miss_respects_threshold() {
        let engine = MatchEngine::with_defaults().unwrap();
        let resume = "Built dashboards in Excel.";
        let summary = engine.analyze(resume, "Requires kubernetes.").unwrap();

        assert!(find_near_misses(&summary, resume, engine.normalizer(), 0.88).is_empty());
    }
}
