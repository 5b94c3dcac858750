//! Configuration loading from mapbench.toml
//!
//! Configuration can be specified in a `mapbench.toml` file in the project root.
//! The file is discovered by walking up from the current directory; every
//! section and key is optional and falls back to the built-in defaults.

use anyhow::Context;
use mapbench_core::{DEFAULT_ALPHABET, DEFAULT_CHARACTER_COUNT, DEFAULT_INTEGER_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "mapbench.toml";

/// mapbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapbenchConfig {
    /// Workload sizes and inputs
    #[serde(default)]
    pub workload: WorkloadConfig,
    /// Runner behaviour
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Workload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Characters the character workload draws from
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Number of random characters to draw
    #[serde(default = "default_character_count")]
    pub character_count: usize,
    /// Length of the integer sequence
    #[serde(default = "default_integer_count")]
    pub integer_count: usize,
    /// Seed for the random generator (entropy when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            character_count: default_character_count(),
            integer_count: default_integer_count(),
            seed: None,
        }
    }
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}
fn default_character_count() -> usize {
    DEFAULT_CHARACTER_COUNT
}
fn default_integer_count() -> usize {
    DEFAULT_INTEGER_COUNT
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Compare both strategies' outputs after timing them
    #[serde(default = "default_verify")]
    pub verify_equivalence: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verify_equivalence: default_verify(),
        }
    }
}

fn default_verify() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Write the report here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl MapbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Find `mapbench.toml` by walking up from the current directory
    pub fn discover_path() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Load an explicit file, else a discovered one, else the defaults
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::discover_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# mapbench configuration

[workload]
# Characters the character workload draws from
alphabet = "abcdefghijklmn"
# Number of random characters mapped to their codes
character_count = 2000000
# Length of the integer sequence mapped to squares
integer_count = 1000000
# Seed for reproducible input (uncomment to enable)
# seed = 42

[runner]
# Check that both strategies produce the same output
verify_equivalence = true

[output]
# Output format: human, json, csv
format = "human"
# Report file (uncomment to write to a file instead of stdout)
# path = "target/mapbench/report.json"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MapbenchConfig::default();
        assert_eq!(config.workload.alphabet, "abcdefghijklmn");
        assert_eq!(config.workload.character_count, 2_000_000);
        assert_eq!(config.workload.integer_count, 1_000_000);
        assert!(config.workload.seed.is_none());
        assert!(config.runner.verify_equivalence);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [workload]
            character_count = 10
            seed = 5

            [runner]
            verify_equivalence = false
        "#;

        let config: MapbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workload.character_count, 10);
        assert_eq!(config.workload.seed, Some(5));
        assert!(!config.runner.verify_equivalence);
        // Defaults should still apply
        assert_eq!(config.workload.integer_count, 1_000_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: MapbenchConfig = toml::from_str(&MapbenchConfig::default_toml()).unwrap();
        assert_eq!(config.workload.alphabet, DEFAULT_ALPHABET);
        assert_eq!(config.workload.character_count, DEFAULT_CHARACTER_COUNT);
        assert_eq!(config.workload.integer_count, DEFAULT_INTEGER_COUNT);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = MapbenchConfig::load(file.path()).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.workload.alphabet, DEFAULT_ALPHABET);
    }

    #[test]
    fn test_resolve_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[workload]\ninteger_count = 3").unwrap();

        let config = MapbenchConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.workload.integer_count, 3);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[workload\ncharacter_count = ").unwrap();

        let err = MapbenchConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MapbenchConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
