//! Keyword evidence and analysis summary types

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Category a tracked term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordCategory {
    HardSkill,
    SoftSignal,
    Phrase,
    /// Token outside every vocabulary set; never tracked
    Unknown,
}

impl KeywordCategory {
    pub fn label(&self) -> &'static str {
        match self {
            KeywordCategory::HardSkill => "Core Competency",
            KeywordCategory::SoftSignal => "Work Style",
            KeywordCategory::Phrase => "Industry Term",
            KeywordCategory::Unknown => "Other",
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the resume covers a job description term.
///
/// Variant order is the ranking order: missing terms sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Missing,
    Present,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Missing => "Missing",
            MatchStatus::Present => "Found",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How strongly the job description implies a term is required.
///
/// Variant order is the ranking order: critical terms sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Significance {
    Critical,
    High,
    Normal,
}

impl Significance {
    pub fn label(&self) -> &'static str {
        match self {
            Significance::Critical => "Required",
            Significance::High => "Preferred",
            Significance::Normal => "Mentioned",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unique matched term of a single analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResult {
    pub text: String,
    pub category: KeywordCategory,
    pub count_in_jd: usize,
    pub count_in_resume: usize,
    pub significance: Significance,
    pub significance_reason: String,
}

impl KeywordResult {
    pub fn new(text: impl Into<String>, category: KeywordCategory) -> Self {
        Self {
            text: text.into(),
            category,
            count_in_jd: 0,
            count_in_resume: 0,
            significance: Significance::Normal,
            significance_reason: String::new(),
        }
    }

    /// Derived from the resume count on every read
    pub fn status(&self) -> MatchStatus {
        if self.count_in_resume > 0 {
            MatchStatus::Present
        } else {
            MatchStatus::Missing
        }
    }

    pub fn is_present(&self) -> bool {
        self.status() == MatchStatus::Present
    }
}

impl Serialize for KeywordResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KeywordResult", 7)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("count_in_jd", &self.count_in_jd)?;
        state.serialize_field("count_in_resume", &self.count_in_resume)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("significance", &self.significance)?;
        state.serialize_field("significance_reason", &self.significance_reason)?;
        state.end()
    }
}

/// A passive verb found in the resume with its stronger replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub found: String,
    pub suggested: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    pub hard_skills_score: u8,
    pub soft_signals_score: u8,
    pub phrases_score: u8,
}

/// Output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Weighted composite, 0-100
    pub score: u8,
    pub total_jd_keywords: usize,
    pub matched_keywords: usize,
    /// Ranked by significance, then missing before present, then text
    pub results: Vec<KeywordResult>,
    /// Writing-confidence score, independent of `score`
    pub impact_score: u8,
    pub weak_words_found: Vec<ImpactMetric>,
    pub calculation_breakdown: CalculationBreakdown,
}

impl AnalysisSummary {
    pub fn missing(&self) -> impl Iterator<Item = &KeywordResult> {
        self.results.iter().filter(|r| !r.is_present())
    }

    pub fn present(&self) -> impl Iterator<Item = &KeywordResult> {
        self.results.iter().filter(|r| r.is_present())
    }

    /// Missing terms the job description marks as required
    pub fn critical_gaps(&self) -> Vec<&KeywordResult> {
        self.missing()
            .filter(|r| r.significance == Significance::Critical)
            .collect()
    }
}
