//! Command-line interface for lector
//!
//! Provides argument parsing using clap derive macros.

use crate::config::FailurePolicy;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

/// Read text and PDF documents aloud into WAV files
#[derive(Parser, Debug)]
#[command(
    name = "lector",
    version,
    about = "Read text and PDF documents aloud into WAV files"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input document (plain text or PDF)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output WAV path (default: input path with a .wav extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Synthesis engine command (chunk text on stdin, WAV on stdout)
    #[arg(long, value_name = "COMMAND")]
    pub engine: Option<String>,

    /// Maximum words per synthesis chunk
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Output sample rate in Hz
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Silence between chunks (e.g., "100ms", "1s")
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub silence: Option<Duration>,

    /// What to do when one chunk fails to synthesize
    #[arg(long, value_name = "POLICY", value_enum)]
    pub on_chunk_failure: Option<FailurePolicy>,

    /// Per-chunk synthesis timeout (e.g., "30s", "2m")
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Suppress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: stage transitions)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify the configuration and the synthesis engine
    Check,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
