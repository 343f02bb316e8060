//! Static reference data consumed by the matching engine
//!
//! A [`VocabularySource`] is plain data (built-in defaults or a TOML bundle on
//! disk). Compiling it yields an immutable [`Vocabulary`] with lookup sets,
//! phrase and weak-verb matchers, and the requirement-signal automaton.

use crate::error::{Result, ScanError};
use crate::processing::keyword::KeywordCategory;
use crate::processing::normalizer::Normalizer;
use crate::processing::phrases::{boundary_pattern, PhraseExtractor};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A passive verb or phrase and its suggested replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakVerb {
    pub found: String,
    pub suggested: String,
}

/// Uncompiled vocabulary bundle, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySource {
    pub hard_skills: Vec<String>,
    pub soft_signals: Vec<String>,
    pub junk_tokens: Vec<String>,
    /// Checked in order; earlier entries win overlaps
    pub phrases: Vec<String>,
    #[serde(default = "default_requirement_signals")]
    pub requirement_signals: Vec<String>,
    #[serde(default)]
    pub weak_verbs: Vec<WeakVerb>,
}

impl Default for VocabularySource {
    fn default() -> Self {
        Self {
            hard_skills: to_strings(DEFAULT_HARD_SKILLS),
            soft_signals: to_strings(DEFAULT_SOFT_SIGNALS),
            junk_tokens: to_strings(DEFAULT_JUNK_TOKENS),
            phrases: to_strings(DEFAULT_PHRASES),
            requirement_signals: default_requirement_signals(),
            weak_verbs: DEFAULT_WEAK_VERBS
                .iter()
                .map(|(found, suggested)| WeakVerb {
                    found: found.to_string(),
                    suggested: suggested.to_string(),
                })
                .collect(),
        }
    }
}

impl VocabularySource {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ScanError::Vocabulary(format!("Failed to parse vocabulary: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ScanError::Vocabulary(msg) => {
                ScanError::Vocabulary(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ScanError::Vocabulary(format!("Failed to serialize vocabulary: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// Compiled weak-verb matcher
#[derive(Debug, Clone)]
pub struct WeakVerbPattern {
    pub found: String,
    pub suggested: String,
    regex: Regex,
}

impl WeakVerbPattern {
    /// Case-insensitive, word-bounded search
    pub fn is_found_in(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub hard_skills: usize,
    pub soft_signals: usize,
    pub junk_tokens: usize,
    pub phrases: usize,
    pub weak_verbs: usize,
    pub requirement_signals: usize,
}

/// Immutable, compiled vocabulary shared by every analysis of an engine
#[derive(Debug, Clone)]
pub struct Vocabulary {
    hard_skills: HashSet<String>,
    soft_signals: HashSet<String>,
    junk_tokens: HashSet<String>,
    phrase_extractor: PhraseExtractor,
    weak_verbs: Vec<WeakVerbPattern>,
    requirement_signals: AhoCorasick,
    requirement_signal_count: usize,
}

impl Vocabulary {
    pub fn compile(source: &VocabularySource) -> Result<Self> {
        let normalizer = Normalizer::new();
        let phrase_extractor = PhraseExtractor::new(&source.phrases, &normalizer)?;

        let mut weak_verbs = Vec::with_capacity(source.weak_verbs.len());
        for entry in &source.weak_verbs {
            let found = entry.found.trim().to_lowercase();
            if found.is_empty() {
                continue;
            }
            let regex = RegexBuilder::new(&boundary_pattern(&found))
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    ScanError::Vocabulary(format!(
                        "Failed to compile weak verb '{}': {}",
                        entry.found, e
                    ))
                })?;
            weak_verbs.push(WeakVerbPattern {
                found,
                suggested: entry.suggested.trim().to_string(),
                regex,
            });
        }

        let signals: Vec<String> = source
            .requirement_signals
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let requirement_signals = AhoCorasick::new(&signals).map_err(|e| {
            ScanError::Vocabulary(format!("Failed to build requirement matcher: {}", e))
        })?;

        let vocabulary = Self {
            hard_skills: to_term_set(&source.hard_skills),
            soft_signals: to_term_set(&source.soft_signals),
            junk_tokens: to_term_set(&source.junk_tokens),
            phrase_extractor,
            weak_verbs,
            requirement_signals,
            requirement_signal_count: signals.len(),
        };

        debug!("Compiled vocabulary: {:?}", vocabulary.stats());
        Ok(vocabulary)
    }

    /// Vocabulary built from the embedded default lists
    pub fn builtin() -> Result<Self> {
        Self::compile(&VocabularySource::default())
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::compile(&VocabularySource::load(path)?)
    }

    /// Hard-skill membership wins over soft-signal membership
    pub fn classify(&self, token: &str) -> KeywordCategory {
        if self.hard_skills.contains(token) {
            KeywordCategory::HardSkill
        } else if self.soft_signals.contains(token) {
            KeywordCategory::SoftSignal
        } else {
            KeywordCategory::Unknown
        }
    }

    pub fn is_junk(&self, token: &str) -> bool {
        self.junk_tokens.contains(token)
    }

    pub fn phrases(&self) -> &PhraseExtractor {
        &self.phrase_extractor
    }

    pub fn weak_verbs(&self) -> &[WeakVerbPattern] {
        &self.weak_verbs
    }

    pub fn has_requirement_signal(&self, sentence: &str) -> bool {
        self.requirement_signals.is_match(sentence)
    }

    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            hard_skills: self.hard_skills.len(),
            soft_signals: self.soft_signals.len(),
            junk_tokens: self.junk_tokens.len(),
            phrases: self.phrase_extractor.len(),
            weak_verbs: self.weak_verbs.len(),
            requirement_signals: self.requirement_signal_count,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_term_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn default_requirement_signals() -> Vec<String> {
    to_strings(DEFAULT_REQUIREMENT_SIGNALS)
}

const DEFAULT_HARD_SKILLS: &[&str] = &[
    // Technical
    "react", "react.js", "node.js", "javascript", "typescript", "python", "java", "c++", "c#",
    "rust", "aws", "azure", "gcp", "docker", "kubernetes", "sql", "nosql", "mongodb",
    "postgresql", "mysql", "graphql", "rest", "api", "microservices", "cicd", "git",
    "terraform", "ansible", "linux", "rdbms", "oop", "redux", "tailwind", "sass", "css", "html",
    "testing", "jest", "cypress", "machine learning", "ai", "data science", "security",
    "cybersecurity", "agile", "scrum",
    // Marketing & Sales
    "seo", "sem", "google analytics", "crm", "salesforce", "hubspot", "copywriting",
    "content strategy", "market research", "lead generation", "social media marketing",
    "branding", "public relations",
    // Business & Finance
    "budgeting", "p&l", "financial modeling", "operations", "supply chain",
    "strategic planning", "compliance", "risk management", "project planning",
    "resource allocation", "accounting", "procurement", "vendor management", "forecasting",
];

const DEFAULT_SOFT_SIGNALS: &[&str] = &[
    "leadership", "communication", "mentorship", "collaboration", "teamwork",
    "problem solving", "critical thinking", "empathy", "adaptability", "initiative",
    "project management", "stakeholder management", "client facing", "conflict resolution",
    "presentation", "negotiation", "emotional intelligence", "time management", "delegation",
];

const DEFAULT_JUNK_TOKENS: &[&str] = &[
    "the", "and", "with", "for", "from", "this", "that", "they", "them", "these", "those",
    "their", "about", "around", "above", "below", "between", "during", "before", "after",
    "since", "until", "years", "experience", "work", "job", "highly", "strong", "excellent",
    "preferred", "plus", "required", "etc", "etc.", "i.e.", "e.g.",
];

const DEFAULT_PHRASES: &[&str] = &[
    "react testing library",
    "ci/cd",
    "event-driven architecture",
    "test driven development",
    "domain driven design",
    "distributed systems",
    "continuous integration",
    "continuous deployment",
    "serverless architecture",
    "cloud computing",
    "full stack development",
    "frontend engineering",
    "backend engineering",
    "go-to-market strategy",
    "customer acquisition cost",
    "return on investment",
    "cross-functional collaboration",
];

const DEFAULT_REQUIREMENT_SIGNALS: &[&str] = &[
    "required",
    "must have",
    "essential",
    "expert",
    "proficiency",
    "minimum",
    "at least",
];

const DEFAULT_WEAK_VERBS: &[(&str, &str)] = &[
    ("helped", "orchestrated"),
    ("worked on", "pioneered"),
    ("handled", "managed"),
    ("responsible for", "spearheaded"),
    ("did", "executed"),
    ("made", "developed"),
    ("used", "leveraged"),
    ("assisted", "collaborated"),
    ("tried", "implemented"),
    ("looked at", "analyzed"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary_compiles() {
        let vocabulary = Vocabulary::builtin().unwrap();
        let stats = vocabulary.stats();

        assert_eq!(stats.phrases, 17);
        assert_eq!(stats.weak_verbs, 10);
        assert_eq!(stats.requirement_signals, 7);
        assert!(stats.hard_skills > 50);
    }

    #[test]
    fn test_classification_prefers_hard_skills() {
        let source = VocabularySource {
            hard_skills: vec!["Rust".to_string(), "leadership".to_string()],
            soft_signals: vec!["leadership".to_string(), "empathy".to_string()],
            junk_tokens: vec![],
            phrases: vec![],
            requirement_signals: vec![],
            weak_verbs: vec![],
        };
        let vocabulary = Vocabulary::compile(&source).unwrap();

        assert_eq!(vocabulary.classify("rust"), KeywordCategory::HardSkill);
        assert_eq!(vocabulary.classify("leadership"), KeywordCategory::HardSkill);
        assert_eq!(vocabulary.classify("empathy"), KeywordCategory::SoftSignal);
        assert_eq!(vocabulary.classify("banana"), KeywordCategory::Unknown);
        assert!(!vocabulary.has_requirement_signal("required"));
    }

    #[test]
    fn test_requirement_signals() {
        let vocabulary = Vocabulary::builtin().unwrap();
        assert!(vocabulary.has_requirement_signal("at least 5 years of rust"));
        assert!(vocabulary.has_requirement_signal("expertise in go"));
        assert!(!vocabulary.has_requirement_signal("nice to have: go"));
    }

    #[test]
    fn test_weak_verbs_are_case_insensitive_and_bounded() {
        let vocabulary = Vocabulary::builtin().unwrap();
        let helped = vocabulary
            .weak_verbs()
            .iter()
            .find(|w| w.found == "helped")
            .unwrap();

        assert_eq!(helped.suggested, "orchestrated");
        assert!(helped.is_found_in("HELPED the team"));
        assert!(!helped.is_found_in("unhelpedness"));
    }

    #[test]
    fn test_toml_round_trip_keeps_order() {
        let source = VocabularySource::default();
        let toml = source.to_toml_string().unwrap();
        let parsed = VocabularySource::from_toml_str(&toml).unwrap();

        assert_eq!(parsed, source);
        assert_eq!(parsed.phrases[0], "react testing library");
        assert_eq!(parsed.weak_verbs[1].found, "worked on");
    }

    #[test]
    fn test_partial_bundle_uses_default_signals() {
        let source = VocabularySource::from_toml_str(
            r#"
hard_skills = ["kotlin"]
soft_signals = []
junk_tokens = []
phrases = ["android jetpack"]
"#,
        )
        .unwrap();

        assert_eq!(source.requirement_signals.len(), 7);
        assert!(source.weak_verbs.is_empty());
    }

    #[test]
    fn test_invalid_bundle_is_rejected() {
        let err = VocabularySource::from_toml_str("hard_skills = 3").unwrap_err();
        assert!(matches!(err, ScanError::Vocabulary(_)));
    }
}
