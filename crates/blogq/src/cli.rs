//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the blogq CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// blogq - Query and list blog posts
#[derive(Parser, Debug)]
#[command(name = "blogq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Blog data file (default: from config, then the platform data dir)
    #[arg(long, global = true, env = "BLOGQ_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts
    #[command(alias = "p")]
    Posts {
        /// Structured query (e.g., 'autor:admin visitas:>10 rust')
        #[arg(short = 'Q', long = "query", visible_alias = "q")]
        query: Option<String>,

        /// Filter by author (exact)
        #[arg(long)]
        autor: Option<String>,

        /// Filter by state (exact)
        #[arg(long)]
        estado: Option<String>,

        /// Filter by tag
        #[arg(long)]
        etiqueta: Option<String>,

        /// Filter by category ID
        #[arg(long)]
        categoria: Option<String>,

        /// Search title and body
        #[arg(long)]
        busqueda: Option<String>,

        /// Sort order (default: from config, then newest first)
        #[arg(long, value_enum)]
        ordenar: Option<SortArg>,

        /// Page number
        #[arg(long, default_value = "1")]
        pagina: usize,

        /// Page size (default: from config, then 10)
        #[arg(long)]
        limite: Option<usize>,

        /// Username used to mark liked posts
        #[arg(long)]
        viewer: Option<String>,
    },

    /// Show a post with its category
    #[command(alias = "s")]
    Show {
        /// Post ID
        id: String,

        /// Username used to mark a liked post
        #[arg(long)]
        viewer: Option<String>,
    },

    /// List the comments on a post
    #[command(alias = "c")]
    Comments {
        /// Post ID
        post_id: String,

        /// Filter by moderation state (exact)
        #[arg(long)]
        estado: Option<String>,

        /// Page number
        #[arg(long, default_value = "1")]
        pagina: usize,

        /// Page size (default: from config, then 10)
        #[arg(long)]
        limite: Option<usize>,

        /// Username used to mark liked comments
        #[arg(long)]
        viewer: Option<String>,
    },

    /// Show blog statistics
    Stats,

    /// Write the starter blog data to the data file
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Filter a JSON array of objects with a query
    #[command(alias = "f")]
    Filter {
        /// JSON file holding an array of objects ("-" for stdin)
        file: PathBuf,

        /// Query to apply
        query: String,

        /// Field searched by free-text terms (repeatable)
        #[arg(short, long = "field", action = clap::ArgAction::Append)]
        fields: Vec<String>,
    },

    /// Show how a query is tokenized and parsed
    Parse {
        /// Query to parse
        query: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sort orders for the posts command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    /// Title, alphabetical
    Titulo,
    /// Most viewed first
    Visitas,
    /// Newest first
    FechaCreacion,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
