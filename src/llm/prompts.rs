//! Prompt templates for the text-generation collaborator

use unicode_segmentation::UnicodeSegmentation;

/// Prompt templates with `{placeholder}` substitution
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub executive_summary: String,
    pub interview_traps: String,
    pub learning_pathway: String,
    pub bullet_rewrite: String,
    pub signal_audit: String,
    max_context_chars: usize,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            executive_summary: EXECUTIVE_SUMMARY_TEMPLATE.to_string(),
            interview_traps: INTERVIEW_TRAPS_TEMPLATE.to_string(),
            learning_pathway: LEARNING_PATHWAY_TEMPLATE.to_string(),
            bullet_rewrite: BULLET_REWRITE_TEMPLATE.to_string(),
            signal_audit: SIGNAL_AUDIT_TEMPLATE.to_string(),
            max_context_chars: 3000,
        }
    }
}

impl PromptTemplates {
    pub fn with_context_limit(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars;
        self
    }

    pub fn render_executive_summary(&self, resume: &str, job: &str, score: u8) -> String {
        self.executive_summary
            .replace("{resume}", &self.context(resume))
            .replace("{job}", &self.context(job))
            .replace("{score}", &score.to_string())
    }

    pub fn render_interview_traps(&self, missing: &[String], job: &str) -> String {
        self.interview_traps
            .replace("{missing}", &missing.join(", "))
            .replace("{job}", &self.context(job))
    }

    pub fn render_learning_pathway(&self, skill: &str) -> String {
        self.learning_pathway.replace("{skill}", skill)
    }

    pub fn render_bullet_rewrite(&self, bullet: &str, keyword: &str, job: &str) -> String {
        self.bullet_rewrite
            .replace("{bullet}", bullet)
            .replace("{keyword}", keyword)
            .replace("{job}", &self.context(job))
    }

    pub fn render_signal_audit(&self, resume: &str) -> String {
        self.signal_audit.replace("{resume}", &self.context(resume))
    }

    fn context(&self, text: &str) -> String {
        truncate_graphemes(text.trim(), self.max_context_chars)
    }
}

/// Cut `text` to at most `max` graphemes, marking the cut with `...`
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    match text.grapheme_indices(true).nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

const EXECUTIVE_SUMMARY_TEMPLATE: &str = r#"Resume: {resume}
JD: {job}
Match Score: {score}%

Provide a 2-sentence "Recruiter Perspective".
Sentence 1: The honest truth about why this candidate would or wouldn't get an interview based on the JD.
Sentence 2: The single most impactful change they should make.
Keep it blunt and professional."#;

const INTERVIEW_TRAPS_TEMPLATE: &str = r#"Predict 2 trap questions an interviewer would ask about these missing skills: {missing}.
JD: {job}

Return only a JSON array of objects with the fields "question", "reason" and "suggested_answer"."#;

const LEARNING_PATHWAY_TEMPLATE: &str = r#"Create a detailed learning plan to master the missing skill: "{skill}". Focus on creating a practical project that can be added to a resume.

Return only a JSON object with the fields "skill", "project_title", "project_idea", "time_estimate", "difficulty" (Beginner, Intermediate or Advanced), "future_resume_bullet", "value_proposition", "interview_talking_points" (array of strings), "resources" (array of objects with "name", "url", "type", "platform", "description", "duration") and "field_guide" (object with "title", "author", "url", "why_it_works")."#;

const BULLET_REWRITE_TEMPLATE: &str = r#"Rewrite "{bullet}" to include "{keyword}" based on this JD: {job}. Under 25 words. Return only the rewritten bullet."#;

const SIGNAL_AUDIT_TEMPLATE: &str = r#"Perform a "Professional Signal Audit" on this resume.
Identify PII risks (emails, phones, locations), legacy technical markers (tech over 10 years old not used in modern stacks), and professional polish issues.

Return only a JSON object:
{
  "score": number,
  "signals": [{ "signal": string, "type": string, "risk_level": string, "suggestion": string, "standard_equivalent": string }],
  "general_advice": string
}
Resume: {resume}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executive_summary_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_executive_summary(
            "Software Engineer with Python experience at Tech Corp.",
            "Senior Software Engineer role requiring React and Python.",
            72,
        );

        assert!(prompt.contains("Software Engineer with Python experience at Tech Corp"));
        assert!(prompt.contains("Senior Software Engineer role requiring React and Python"));
        assert!(prompt.contains("Match Score: 72%"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_context_is_truncated() {
        let templates = PromptTemplates::default().with_context_limit(10);
        let prompt = templates.render_signal_audit("abcdefghijklmnopqrstuvwxyz");

        assert!(prompt.contains("Resume: abcdefghij..."));
        assert!(!prompt.contains("klm"));
    }

    #[test]
    fn test_interview_traps_lists_missing_skills() {
        let templates = PromptTemplates::default();
        let missing = vec!["kubernetes".to_string(), "graphql".to_string()];
        let prompt = templates.render_interview_traps(&missing, "Platform role");

        assert!(prompt.contains("kubernetes, graphql"));
        assert!(prompt.contains("JD: Platform role"));
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("short", 10), "short");
        assert_eq!(truncate_graphemes("résumé text", 6), "résumé...");
        assert_eq!(truncate_graphemes("exact", 5), "exact");
    }
}
