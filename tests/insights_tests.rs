//! Insight service behaviour against stub generators

use resume_scan::analyze;
use resume_scan::llm::generator::{DisabledGenerator, GenerationError, TextGenerator};
use resume_scan::llm::insights::{InsightService, REWRITE_FALLBACK, SUMMARY_FALLBACK};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Replies with a fixed string and counts calls
struct CannedGenerator {
    reply: String,
    calls: AtomicUsize,
}

impl CannedGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl TextGenerator for CannedGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

struct SlowGenerator;

impl TextGenerator for SlowGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("too late".to_string())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

const JOB: &str = "Kubernetes and GraphQL required. Python is a plus.";
const RESUME: &str = "Python developer.";

#[tokio::test]
async fn test_disabled_generator_falls_back() {
    let service = InsightService::new(DisabledGenerator, Duration::from_secs(1));
    let summary = analyze(RESUME, JOB).unwrap();

    let insights = service.gather(RESUME, JOB, &summary).await;
    assert_eq!(insights.generator, "disabled");
    assert_eq!(insights.executive_summary, SUMMARY_FALLBACK);
    assert!(insights.interview_traps.is_empty());

    assert_eq!(
        service.rewrite_bullet("Did things", "graphql", JOB).await,
        REWRITE_FALLBACK
    );
    assert!(service.learning_pathway("graphql").await.is_none());
    assert!(service.signal_audit(RESUME).await.is_none());
}

#[tokio::test]
async fn test_slow_generator_times_out() {
    let service = InsightService::new(SlowGenerator, Duration::from_millis(50));

    let summary = service.executive_summary(RESUME, JOB, 40).await;
    assert_eq!(summary, SUMMARY_FALLBACK);
}

#[tokio::test]
async fn test_json_traps_are_parsed() {
    let reply = r#"```json
[{"question": "How would you debug a failing Kubernetes pod?", "reason": "Not on resume", "suggested_answer": "Walk through kubectl describe."}]
```"#;
    let service = InsightService::new(CannedGenerator::new(reply), Duration::from_secs(1));
    let summary = analyze(RESUME, JOB).unwrap();

    let insights = service.gather(RESUME, JOB, &summary).await;
    assert_eq!(insights.generator, "canned");
    assert_eq!(insights.interview_traps.len(), 1);
    assert_eq!(
        insights.interview_traps[0].suggested_answer,
        "Walk through kubectl describe."
    );
    assert_eq!(service.generator().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_prose_reply_is_not_json() {
    let service = InsightService::new(
        CannedGenerator::new("Sorry, I can't produce JSON today."),
        Duration::from_secs(1),
    );

    assert!(service.signal_audit(RESUME).await.is_none());
    assert!(service
        .interview_traps(&["graphql".to_string()], JOB)
        .await
        .is_empty());
    assert_eq!(
        service.rewrite_bullet("Did things", "graphql", JOB).await,
        "Sorry, I can't produce JSON today."
    );
}

#[tokio::test]
async fn test_no_missing_skills_skips_trap_request() {
    let generator = CannedGenerator::new("Strong match.");
    let service = InsightService::new(generator, Duration::from_secs(1));
    let summary = analyze("Python developer", "Python").unwrap();

    let insights = service.gather("Python developer", "Python", &summary).await;
    assert_eq!(insights.executive_summary, "Strong match.");
    assert!(insights.interview_traps.is_empty());
    assert_eq!(service.generator().calls.load(Ordering::SeqCst), 1);
}
