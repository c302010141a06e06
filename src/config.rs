use crate::defaults;
use crate::error::{LectorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub segmenter: SegmenterConfig,
    pub synthesis: SynthesisConfig,
    pub output: OutputConfig,
}

/// Text segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmenterConfig {
    pub max_words_per_chunk: usize,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    /// External TTS command (chunk text on stdin, WAV on stdout).
    pub engine_command: Option<String>,
    pub sample_rate: u32,
    /// Per-chunk synthesis timeout in seconds. None disables the bound.
    pub timeout_secs: Option<u64>,
}

/// Audio output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub inter_chunk_silence_seconds: f64,
    pub chunk_failure_policy: FailurePolicy,
}

/// What to do when one chunk fails to synthesize.
///
/// Serialized and parsed in kebab-case: `skip-with-silence`, `abort`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Substitute silence for the failed chunk and keep going.
    SkipWithSilence,
    /// Stop the run and surface the failing chunk index.
    #[default]
    Abort,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_words_per_chunk: defaults::MAX_WORDS_PER_CHUNK,
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            engine_command: None,
            sample_rate: defaults::SAMPLE_RATE,
            timeout_secs: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            inter_chunk_silence_seconds: defaults::INTER_CHUNK_SILENCE_SECS,
            chunk_failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Self::default()
                } else {
                    // Re-panic on invalid TOML or other errors
                    panic!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - LECTOR_ENGINE → synthesis.engine_command
    /// - LECTOR_SAMPLE_RATE → synthesis.sample_rate
    /// - LECTOR_MAX_WORDS → segmenter.max_words_per_chunk
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(engine) = std::env::var("LECTOR_ENGINE")
            && !engine.is_empty()
        {
            self.synthesis.engine_command = Some(engine);
        }

        if let Ok(rate) = std::env::var("LECTOR_SAMPLE_RATE")
            && let Ok(rate) = rate.parse::<u32>()
        {
            self.synthesis.sample_rate = rate;
        }

        if let Ok(words) = std::env::var("LECTOR_MAX_WORDS")
            && let Ok(words) = words.parse::<usize>()
        {
            self.segmenter.max_words_per_chunk = words;
        }

        self
    }

    /// Validate configuration values that have hard constraints.
    pub fn validate(&self) -> Result<()> {
        if self.segmenter.max_words_per_chunk == 0 {
            return Err(LectorError::ConfigInvalidValue {
                key: "segmenter.max_words_per_chunk".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.synthesis.sample_rate == 0 {
            return Err(LectorError::ConfigInvalidValue {
                key: "synthesis.sample_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        let silence = self.output.inter_chunk_silence_seconds;
        if !silence.is_finite() || silence < 0.0 {
            return Err(LectorError::ConfigInvalidValue {
                key: "output.inter_chunk_silence_seconds".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        if self.synthesis.timeout_secs == Some(0) {
            return Err(LectorError::ConfigInvalidValue {
                key: "synthesis.timeout_secs".to_string(),
                message: "must be greater than zero (omit to disable)".to_string(),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/lector/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("lector")
            .join("config.toml")
    }
}
