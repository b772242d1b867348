//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// SocialPulse - generate social media posts with Gemini
#[derive(Parser, Debug)]
#[command(name = "socialpulse")]
#[command(about = "Generate platform-styled social media posts with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file layered over the bundled defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Gemini model to use instead of the configured one
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Log file (defaults to the user cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
