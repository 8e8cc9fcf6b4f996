use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vertex-probe")]
#[command(version)]
#[command(about = "Check Vertex AI credentials, project and region with two small requests", long_about = None)]
pub struct Cli {
    /// Cloud project identifier (overrides config)
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Region code, e.g. us-central1 (overrides config)
    #[arg(short, long, global = true)]
    pub location: Option<String>,

    /// Bearer token (defaults to the variable named by `vertex.token_env`)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Send requests to this base URL instead of the regional endpoint
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VERTEX_PROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the report
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List publisher models to verify project, location and token
    Connect,
    /// Ask a model for a fixed one-word answer
    Generate {
        /// Model identifier (defaults to config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Run connect then generate (default)
    All {
        /// Model identifier for the generation check
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
    /// Markdown formatted output
    Markdown,
}
