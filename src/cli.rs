use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wpmedia")]
#[command(author, version, about = "Enrich WordPress media attachments with parent-post categories")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page of media and print the enriched records
    Fetch {
        /// API base URL, e.g. https://example.com/wp-json/wp/v2
        /// (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        /// Media items to request (1-100, overrides the config file)
        #[arg(long)]
        per_page: Option<u32>,

        /// Output as a JSON array instead of one line per record
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
