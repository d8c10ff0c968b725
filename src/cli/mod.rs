//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod context;
pub mod init;
pub mod lookup;
pub mod rank;
pub mod status;

pub use context::CommandContext;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - summary lines for humans (default)
    #[default]
    Pretty,
    /// Table format - one row per record
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// intrarank CLI - companion for the 42 Intra API
#[derive(Parser, Debug)]
#[command(name = "intrarank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "INTRARANK_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override credentials file location
    #[arg(long, global = true, env = "INTRARANK_ENV_FILE", hide_env = true)]
    pub env_file: Option<String>,

    /// Override API host (for testing against a local server)
    #[arg(long, global = true, env = "INTRARANK_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the credentials file interactively
    Init,

    /// Show credentials configuration status
    Status,

    /// Export cursus users ranked by level (descending)
    Rank {
        /// Cursus to filter on
        #[arg(long, default_value_t = 21)]
        cursus_id: u32,

        /// Campus to filter on
        #[arg(long, default_value_t = 64)]
        campus_id: u32,

        /// Records requested per page (at least 1)
        #[arg(long, default_value_t = 100, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        page_size: usize,

        /// Output file for the ranked export
        #[arg(long, short = 'o', default_value = "cursus_users_filtered.json")]
        output: String,
    },

    /// Look up cursus and campus reference data by name
    Lookup {
        /// Name to filter both collections on
        name: String,

        /// Output file for the raw cursus response
        #[arg(long, default_value = "cursus.json")]
        cursus_out: String,

        /// Output file for the raw campus response
        #[arg(long, default_value = "campus.json")]
        campus_out: String,
    },

    /// Display version information
    Version,
}
