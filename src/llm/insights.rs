//! Prose insights from the text-generation collaborator
//!
//! Every operation makes a single attempt bounded by a timeout and falls back
//! to a placeholder on any failure. Insights never affect the match score.

use crate::config::InsightsConfig;
use crate::llm::generator::{ConfiguredGenerator, GenerationError, TextGenerator};
use crate::llm::prompts::PromptTemplates;
use crate::processing::keyword::AnalysisSummary;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SUMMARY_FALLBACK: &str = "Recruiter summary currently unavailable.";
pub const REWRITE_FALLBACK: &str = "Rewrite failed.";

/// Most missing terms handed to the interview-trap prompt
const MAX_TRAP_SKILLS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewTrap {
    pub question: String,
    pub reason: String,
    pub suggested_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub platform: String,
    pub description: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldGuide {
    pub title: String,
    pub author: String,
    pub url: String,
    pub why_it_works: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPathway {
    pub skill: String,
    pub project_title: String,
    pub project_idea: String,
    pub time_estimate: String,
    pub difficulty: String,
    pub future_resume_bullet: String,
    pub value_proposition: String,
    pub interview_talking_points: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub field_guide: Option<FieldGuide>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalSignal {
    pub signal: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_level: String,
    pub suggestion: String,
    pub standard_equivalent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalAudit {
    pub score: f64,
    pub signals: Vec<ProfessionalSignal>,
    pub general_advice: String,
}

/// Insights attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub generator: String,
    pub executive_summary: String,
    pub interview_traps: Vec<InterviewTrap>,
}

pub struct InsightService<G: TextGenerator> {
    generator: G,
    templates: PromptTemplates,
    timeout: Duration,
}

impl<G: TextGenerator> InsightService<G> {
    pub fn new(generator: G, timeout: Duration) -> Self {
        Self {
            generator,
            templates: PromptTemplates::default(),
            timeout,
        }
    }

    pub fn with_templates(mut self, templates: PromptTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    async fn attempt(&self, prompt: String) -> Result<String, GenerationError> {
        debug!(
            "Sending {} char prompt to {}",
            prompt.chars().count(),
            self.generator.name()
        );
        match tokio::time::timeout(self.timeout, self.generator.complete(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        }
    }

    async fn attempt_json<T: DeserializeOwned>(&self, prompt: String) -> Result<T, GenerationError> {
        let raw = self.attempt(prompt).await?;
        parse_json(&raw)
    }

    pub async fn executive_summary(&self, resume: &str, job: &str, score: u8) -> String {
        let prompt = self.templates.render_executive_summary(resume, job, score);
        match self.attempt(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Executive summary unavailable: {}", e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    pub async fn interview_traps(&self, missing: &[String], job: &str) -> Vec<InterviewTrap> {
        if missing.is_empty() {
            return Vec::new();
        }
        let prompt = self.templates.render_interview_traps(missing, job);
        self.attempt_json(prompt).await.unwrap_or_else(|e| {
            warn!("Interview traps unavailable: {}", e);
            Vec::new()
        })
    }

    pub async fn learning_pathway(&self, skill: &str) -> Option<LearningPathway> {
        let prompt = self.templates.render_learning_pathway(skill);
        match self.attempt_json(prompt).await {
            Ok(pathway) => Some(pathway),
            Err(e) => {
                warn!("Learning pathway for '{}' unavailable: {}", skill, e);
                None
            }
        }
    }

    pub async fn rewrite_bullet(&self, bullet: &str, keyword: &str, job: &str) -> String {
        let prompt = self.templates.render_bullet_rewrite(bullet, keyword, job);
        match self.attempt(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Bullet rewrite failed: {}", e);
                REWRITE_FALLBACK.to_string()
            }
        }
    }

    pub async fn signal_audit(&self, resume: &str) -> Option<SignalAudit> {
        let prompt = self.templates.render_signal_audit(resume);
        match self.attempt_json(prompt).await {
            Ok(audit) => Some(audit),
            Err(e) => {
                warn!("Signal audit unavailable: {}", e);
                None
            }
        }
    }

    /// Summary plus interview traps for the most significant missing skills
    pub async fn gather(&self, resume: &str, job: &str, summary: &AnalysisSummary) -> Insights {
        let missing: Vec<String> = summary
            .missing()
            .take(MAX_TRAP_SKILLS)
            .map(|r| r.text.clone())
            .collect();

        let executive_summary = self.executive_summary(resume, job, summary.score).await;
        let interview_traps = self.interview_traps(&missing, job).await;

        Insights {
            generator: self.generator.name().to_string(),
            executive_summary,
            interview_traps,
        }
    }
}

impl InsightService<ConfiguredGenerator> {
    /// Service over the configured generator, timeout and prompt context limit
    pub fn from_config(config: &InsightsConfig) -> Self {
        let templates = PromptTemplates::default().with_context_limit(config.max_context_chars);
        Self::new(
            ConfiguredGenerator::from_config(config),
            Duration::from_secs(config.timeout_secs),
        )
        .with_templates(templates)
    }
}

/// Parse a loosely formatted JSON reply, tolerating code fences and prose
/// around the payload
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, GenerationError> {
    let trimmed = raw.trim();
    let start = trimmed.find(['{', '[']);
    let end = trimmed.rfind(['}', ']']);

    let payload = match (start, end) {
        (Some(start), Some(end)) if start <= end => &trimmed[start..=end],
        _ => {
            return Err(GenerationError::MalformedResponse(
                "no JSON payload in response".to_string(),
            ))
        }
    };

    serde_json::from_str(payload).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_with_fences() {
        let raw = "Here you go:\n```json\n[{\"question\": \"Why no Kafka?\", \"reason\": \"gap\"}]\n```";
        let traps: Vec<InterviewTrap> = parse_json(raw).unwrap();

        assert_eq!(traps.len(), 1);
        assert_eq!(traps[0].question, "Why no Kafka?");
        assert_eq!(traps[0].suggested_answer, "");
    }

    #[test]
    fn test_parse_json_rejects_prose() {
        let result: Result<SignalAudit, _> = parse_json("I cannot help with that.");
        assert!(matches!(result, Err(GenerationError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_learning_pathway_with_missing_fields() {
        let raw = r#"{"skill": "graphql", "difficulty": "Beginner", "resources": [{"name": "Docs", "type": "Free"}]}"#;
        let pathway: LearningPathway = parse_json(raw).unwrap();

        assert_eq!(pathway.skill, "graphql");
        assert_eq!(pathway.resources[0].kind, "Free");
        assert!(pathway.field_guide.is_none());
        assert!(pathway.interview_talking_points.is_empty());
    }

    #[tokio::test]
    async fn test_service_from_default_config_is_disabled() {
        let service = InsightService::from_config(&InsightsConfig::default());
        assert!(!service.generator().is_enabled());
        assert_eq!(service.timeout, Duration::from_secs(30));
        assert_eq!(
            service.rewrite_bullet("Built APIs", "graphql", "GraphQL required.").await,
            REWRITE_FALLBACK
        );
    }
}
