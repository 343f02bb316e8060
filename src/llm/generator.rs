//! Text generation capability used for prose insights
//!
//! The matching engine never depends on a generator. Callers inject one into
//! [`crate::llm::insights::InsightService`], which turns every failure into a
//! fallback value.

use crate::config::InsightsConfig;
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("text generator unavailable: {0}")]
    Unavailable(String),

    #[error("text generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("text generation failed: {0}")]
    Failed(String),

    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
}

pub trait TextGenerator {
    /// Single completion for a free-form instruction
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    fn name(&self) -> &str;
}

/// Generator used when insights are switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

impl TextGenerator for DisabledGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable(
            "no text generator configured".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Pipes the prompt to a local command's stdin and returns its stdout.
///
/// The child is killed if the completion future is dropped, so a caller-side
/// timeout also stops the process.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl TextGenerator for CommandGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GenerationError::Unavailable(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| GenerationError::Failed(format!("writing prompt: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| GenerationError::Failed(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenerationError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "empty response".to_string(),
            ));
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Generator chosen by the `[insights]` config section
#[derive(Debug, Clone)]
pub enum ConfiguredGenerator {
    Command(CommandGenerator),
    Disabled(DisabledGenerator),
}

impl ConfiguredGenerator {
    pub fn from_config(config: &InsightsConfig) -> Self {
        match &config.command {
            Some(command) => Self::Command(CommandGenerator::new(command.clone(), config.args.clone())),
            None => Self::Disabled(DisabledGenerator),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Command(_))
    }
}

impl TextGenerator for ConfiguredGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Self::Command(generator) => generator.complete(prompt).await,
            Self::Disabled(generator) => generator.complete(prompt).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Command(generator) => generator.name(),
            Self::Disabled(generator) => generator.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_generator_is_unavailable() {
        let result = DisabledGenerator.complete("anything").await;
        assert!(matches!(result, Err(GenerationError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_generator_round_trip() {
        let generator = CommandGenerator::new("cat", Vec::new());
        let text = generator.complete("  echo this prompt  \n").await.unwrap();
        assert_eq!(text, "echo this prompt");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_generator_failures() {
        let missing = CommandGenerator::new("definitely-not-a-real-generator-binary", Vec::new());
        assert!(matches!(
            missing.complete("prompt").await,
            Err(GenerationError::Unavailable(_))
        ));

        let failing = CommandGenerator::new("false", Vec::new());
        assert!(matches!(
            failing.complete("prompt").await,
            Err(GenerationError::Failed(_))
        ));
    }

    #[tokio::test]
    async fn test_configured_generator_follows_config() {
        let mut config = InsightsConfig::default();
        let generator = ConfiguredGenerator::from_config(&config);
        assert!(!generator.is_enabled());
        assert_eq!(generator.name(), "disabled");
        assert!(matches!(
            generator.complete("prompt").await,
            Err(GenerationError::Unavailable(_))
        ));

        config.command = Some("llm-cli".to_string());
        config.args = vec!["--quiet".to_string()];
        let generator = ConfiguredGenerator::from_config(&config);
        assert!(generator.is_enabled());
        assert_eq!(generator.name(), "llm-cli");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_configured_command_generator_completes() {
        let config = InsightsConfig {
            command: Some("cat".to_string()),
            ..InsightsConfig::default()
        };
        let generator = ConfiguredGenerator::from_config(&config);
        assert_eq!(generator.complete("tailored bullet").await.unwrap(), "tailored bullet");
    }
}
