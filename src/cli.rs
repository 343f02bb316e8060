//! CLI interface for the resume scanner

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scan")]
#[command(about = "Deterministic resume and job description keyword matching")]
#[command(long_about = "Score how well a resume covers the skills, work-style signals and industry phrases of a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show counts and significance reasons for every term
        #[arg(short, long)]
        detailed: bool,

        /// Custom vocabulary bundle (TOML)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Ask the configured text generator for a recruiter summary
        #[arg(long)]
        insights: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Ask the configured text generator for targeted advice
    Insights {
        #[command(subcommand)]
        action: InsightsAction,
    },

    /// Inspect or export the keyword vocabulary
    Vocabulary {
        #[command(subcommand)]
        action: VocabularyAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Suggest a portfolio project and resources for a missing skill
    Pathway {
        /// Skill to build a learning plan for
        skill: String,

        /// Print the raw JSON reply
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a resume bullet to feature a keyword
    Rewrite {
        /// The bullet to rewrite
        #[arg(short, long)]
        bullet: String,

        /// Keyword the rewritten bullet should feature
        #[arg(short, long)]
        keyword: String,

        /// Job description giving the rewrite its context (PDF, TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,
    },

    /// Flag unprofessional signals in a resume
    Audit {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Print the raw JSON reply
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum VocabularyAction {
    /// Print vocabulary statistics
    Show {
        /// Custom vocabulary bundle to inspect instead of the active one
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Write the built-in vocabulary to a TOML file for editing
    Export {
        /// Destination file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.hard_skill_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
