//! resume-scan: deterministic resume and job description keyword matching

use clap::Parser;
use colored::Colorize;
use log::{error, info, warn};
use resume_scan::cli::{self, Cli, Commands, ConfigAction, InsightsAction, VocabularyAction};
use resume_scan::config::Config;
use resume_scan::error::{Result, ScanError};
use resume_scan::input::InputManager;
use resume_scan::llm::generator::{ConfiguredGenerator, TextGenerator};
use resume_scan::llm::insights::{InsightService, LearningPathway, SignalAudit};
use resume_scan::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_scan::output::report::{find_near_misses, AnalysisReport, ReportMetadata};
use resume_scan::processing::analyzer::MatchEngine;
use resume_scan::processing::vocabulary::{Vocabulary, VocabularySource};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path),
        Some(_) => Ok(Config::default()),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            vocabulary,
            insights,
            no_color,
        } => {
            if let Some(path) = vocabulary {
                check_vocabulary_path(&path)?;
                config.vocabulary.path = Some(path);
            }

            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ScanError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let use_colors = !no_color && config.output.color_output && save.is_none();

            info!("Analyzing {} against {}", resume.display(), job.display());

            let mut input_manager =
                InputManager::new().with_max_input_bytes(config.input.max_input_bytes);
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let engine = MatchEngine::from_config(&config)?;
            let summary = engine.analyze(&resume_text, &job_text)?;
            info!(
                "Matched {}/{} job description terms, score {}%",
                summary.matched_keywords, summary.total_jd_keywords, summary.score
            );

            let near_misses = find_near_misses(
                &summary,
                &resume_text,
                engine.normalizer(),
                config.output.fuzzy_threshold,
            );
            let metadata = ReportMetadata::new(
                resume.display().to_string(),
                job.display().to_string(),
                engine.vocabulary().stats(),
                *engine.weights(),
            );

            let gathered = if insights || config.insights.enabled {
                let service = insight_service(&config);
                Some(service.gather(&resume_text, &job_text, &summary).await)
            } else {
                None
            };

            let mut report = AnalysisReport::new(summary, near_misses, metadata);
            if let Some(gathered) = gathered {
                report = report.with_insights(gathered);
            }

            let generator = ReportGenerator::with_options(use_colors, detailed);
            let rendered = generator.generate_report(&report, format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    println!("Report saved to {}", target.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Insights { action } => {
            let service = insight_service(&config);
            let mut input_manager =
                InputManager::new().with_max_input_bytes(config.input.max_input_bytes);

            match action {
                InsightsAction::Pathway { skill, json } => {
                    match service.learning_pathway(&skill).await {
                        Some(pathway) if json => {
                            println!("{}", serde_json::to_string_pretty(&pathway)?)
                        }
                        Some(pathway) => print_pathway(&pathway),
                        None => println!("Learning pathway for '{}' unavailable.", skill),
                    }
                }

                InsightsAction::Rewrite { bullet, keyword, job } => {
                    let job_text = match job {
                        Some(path) => input_manager.extract_text(&path).await?,
                        None => String::new(),
                    };
                    println!("{}", service.rewrite_bullet(&bullet, &keyword, &job_text).await);
                }

                InsightsAction::Audit { resume, json } => {
                    let resume_text = input_manager.extract_text(&resume).await?;
                    match service.signal_audit(&resume_text).await {
                        Some(audit) if json => {
                            println!("{}", serde_json::to_string_pretty(&audit)?)
                        }
                        Some(audit) => print_audit(&audit),
                        None => println!("Signal audit unavailable."),
                    }
                }
            }
        }

        Commands::Vocabulary { action } => match action {
            VocabularyAction::Show { path } => {
                let vocabulary = match path.or(config.vocabulary.path) {
                    Some(path) => {
                        check_vocabulary_path(&path)?;
                        println!("Vocabulary: {}", path.display());
                        Vocabulary::load(&path)?
                    }
                    None => {
                        println!("Vocabulary: built-in");
                        Vocabulary::builtin()?
                    }
                };

                let stats = vocabulary.stats();
                println!("  Hard skills:         {}", stats.hard_skills);
                println!("  Soft signals:        {}", stats.soft_signals);
                println!("  Junk tokens:         {}", stats.junk_tokens);
                println!("  Phrases:             {}", stats.phrases);
                println!("  Weak verbs:          {}", stats.weak_verbs);
                println!("  Requirement signals: {}", stats.requirement_signals);
            }

            VocabularyAction::Export { path, force } => {
                check_vocabulary_path(&path)?;
                if path.exists() && !force {
                    return Err(ScanError::InvalidInput(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                VocabularySource::default().save(&path)?;
                println!("Built-in vocabulary written to {}", path.display());
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ScanError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("# {}\n{}", config_path.display(), content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("{} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn check_vocabulary_path(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, &["toml"])
        .map_err(|e| ScanError::InvalidInput(format!("Vocabulary file: {}", e)))
}

fn insight_service(config: &Config) -> InsightService<ConfiguredGenerator> {
    let service = InsightService::from_config(&config.insights);
    if service.generator().is_enabled() {
        info!("Requesting insights from {}", service.generator().name());
    } else {
        warn!("Insights requested but insights.command is not set");
    }
    service
}

fn print_pathway(pathway: &LearningPathway) {
    println!("{}", format!("Learning pathway: {}", pathway.skill).bold());
    println!("  Project:    {}", pathway.project_title);
    println!("  Idea:       {}", pathway.project_idea);
    println!("  Time:       {} ({})", pathway.time_estimate, pathway.difficulty);
    println!("  Bullet:     {}", pathway.future_resume_bullet);
    if !pathway.value_proposition.is_empty() {
        println!("  Why:        {}", pathway.value_proposition);
    }

    if !pathway.interview_talking_points.is_empty() {
        println!("\n{}", "Talking points".bold());
        for point in &pathway.interview_talking_points {
            println!("  - {}", point);
        }
    }

    if !pathway.resources.is_empty() {
        println!("\n{}", "Resources".bold());
        for resource in &pathway.resources {
            println!("  - {} [{}] {}", resource.name, resource.kind, resource.url);
        }
    }

    if let Some(guide) = &pathway.field_guide {
        println!("\n{}", "Field guide".bold());
        println!("  {} by {} {}", guide.title, guide.author, guide.url);
    }
}

fn print_audit(audit: &SignalAudit) {
    println!("{}", format!("Professionalism score: {:.0}", audit.score).bold());
    for signal in &audit.signals {
        println!(
            "  [{}] {} ({}): {}",
            signal.risk_level.yellow(),
            signal.signal,
            signal.kind,
            signal.suggestion
        );
        if !signal.standard_equivalent.is_empty() {
            println!("      use: {}", signal.standard_equivalent);
        }
    }
    if !audit.general_advice.is_empty() {
        println!("\n{}", audit.general_advice);
    }
}
