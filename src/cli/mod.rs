//! CLI entry point for postcraft.

pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{Audience, PostLength, Tone};

/// postcraft CLI
#[derive(Parser, Debug)]
#[command(name = "postcraft", version, about = "Draft LinkedIn posts with Gemini")]
pub struct Cli {
    /// Config file (defaults to ~/.postcraft/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate post drafts for a topic
    Generate(GenerateArgs),
    /// Print a health report as JSON
    Health,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Topic or idea (positional)
    pub topic: Option<String>,

    /// Tone & style
    #[arg(short, long, default_value_t = Tone::Professional)]
    pub tone: Tone,

    /// Target audience
    #[arg(short, long, default_value_t = Audience::General)]
    pub audience: Audience,

    /// Post length
    #[arg(short, long, default_value_t = PostLength::Medium)]
    pub length: PostLength,

    /// Number of variations (3-5)
    #[arg(short = 'n', long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=5))]
    pub count: u8,

    /// Gemini model id (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Copy post N (1-based) to the clipboard
    #[arg(long, value_name = "N")]
    pub copy: Option<usize>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
