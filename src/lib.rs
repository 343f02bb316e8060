//! Resume scanner library
//!
//! Compares a resume against a job description and reports a weighted match
//! score together with categorized, ranked keyword evidence.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ScanError};
pub use processing::analyzer::{analyze, MatchEngine};
pub use processing::keyword::{
    AnalysisSummary, CalculationBreakdown, ImpactMetric, KeywordCategory, KeywordResult,
    MatchStatus, Significance,
};
pub use processing::scorer::ScoringWeights;
pub use processing::vocabulary::{Vocabulary, VocabularySource};
