//! Configuration management for the resume scanner

use crate::error::{Result, ScanError};
use crate::processing::scorer::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub scoring: ScoringWeights,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VocabularyConfig {
    /// Custom vocabulary bundle; the built-in lists are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_input_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    /// Minimum Jaro-Winkler similarity for near-miss hints
    pub fuzzy_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    pub enabled: bool,
    /// Local command that reads a prompt on stdin and writes a completion to stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    pub timeout_secs: u64,
    pub max_context_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 1_000_000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            fuzzy_threshold: 0.88,
        }
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: None,
            args: Vec::new(),
            timeout_secs: 30,
            max_context_chars: 3000,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ScanError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScanError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scan")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;

        if !(0.0..=1.0).contains(&self.output.fuzzy_threshold) {
            return Err(ScanError::Configuration(format!(
                "output.fuzzy_threshold must be within 0.0-1.0, got {}",
                self.output.fuzzy_threshold
            )));
        }
        if self.input.max_input_bytes == 0 {
            return Err(ScanError::Configuration(
                "input.max_input_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a single `section.key` value, keeping the field's type
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut root = toml::Value::try_from(&*self)
            .map_err(|e| ScanError::Configuration(format!("Failed to serialize config: {}", e)))?;

        let (section, field) = key.split_once('.').ok_or_else(|| {
            ScanError::Configuration(format!("Expected a key like 'section.field', got '{}'", key))
        })?;

        let table = root
            .get_mut(section)
            .and_then(|v| v.as_table_mut())
            .ok_or_else(|| ScanError::Configuration(format!("Unknown config section: {}", section)))?;

        let parsed = parse_value(value);
        if let Some(existing) = table.get(field) {
            if !same_kind(existing, &parsed) {
                return Err(ScanError::Configuration(format!(
                    "Value '{}' does not fit {} (expected {})",
                    value,
                    key,
                    existing.type_str()
                )));
            }
        } else if !OPTIONAL_KEYS.contains(&key) {
            return Err(ScanError::Configuration(format!("Unknown config key: {}", key)));
        }
        table.insert(field.to_string(), parsed);

        let updated: Config = root
            .try_into()
            .map_err(|e| ScanError::Configuration(format!("Invalid value for {}: {}", key, e)))?;
        updated.validate()?;

        *self = updated;
        Ok(())
    }
}

/// Keys omitted from the serialized form while unset
const OPTIONAL_KEYS: &[&str] = &["vocabulary.path", "insights.command"];

fn parse_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        toml::Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        toml::Value::Float(f)
    } else {
        toml::Value::String(raw.to_string())
    }
}

fn same_kind(existing: &toml::Value, new: &toml::Value) -> bool {
    use toml::Value::*;
    matches!(
        (existing, new),
        (Boolean(_), Boolean(_))
            | (Integer(_), Integer(_))
            | (Float(_), Float(_))
            | (Float(_), Integer(_))
            | (String(_), String(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.hard_skill_weight, 0.70);
        assert_eq!(config.insights.max_context_chars, 3000);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.vocabulary.path = Some(PathBuf::from("/tmp/vocab.toml"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"Json\"\ndetailed = true\ncolor_output = false\nfuzzy_threshold = 0.9\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.scoring, ScoringWeights::default());
    }

    #[test]
    fn test_partial_scoring_table_keeps_default_penalty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\nhard_skill_weight = 0.6\nsoft_signal_weight = 0.3\nphrase_weight = 0.1\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scoring.hard_skill_weight, 0.6);
        assert_eq!(config.scoring.weak_word_penalty, 8);
    }

    #[test]
    fn test_invalid_weights_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\nhard_skill_weight = 0.9\nsoft_signal_weight = 0.2\nphrase_weight = 0.1\nweak_word_penalty = 8\n",
        )
        .unwrap();

        assert!(matches!(Config::load_from(&path), Err(ScanError::Configuration(_))));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();

        config.set_value("output.detailed", "true").unwrap();
        assert!(config.output.detailed);

        config.set_value("scoring.weak_word_penalty", "10").unwrap();
        assert_eq!(config.scoring.weak_word_penalty, 10);

        config.set_value("output.format", "Html").unwrap();
        assert_eq!(config.output.format, OutputFormat::Html);

        config.set_value("insights.command", "llm").unwrap();
        assert_eq!(config.insights.command.as_deref(), Some("llm"));
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();

        assert!(config.set_value("output", "true").is_err());
        assert!(config.set_value("nope.detailed", "true").is_err());
        assert!(config.set_value("output.missing", "true").is_err());
        assert!(config.set_value("output.detailed", "yes please").is_err());
        assert!(config.set_value("output.format", "Pdf").is_err());
        assert!(config.set_value("scoring.phrase_weight", "0.5").is_err());
        assert_eq!(config, Config::default());
    }
}
