//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redzone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./redzone.toml when present)
    #[arg(long, global = true, env = "REDZONE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Template search path, searched after the configured ones (repeatable)
    #[arg(short = 'I', long = "path", global = true, value_name = "DIR")]
    pub paths: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with JSON or TOML data
    Render {
        /// Template file, or a template name resolved through the search paths
        template: String,

        /// Data file (.json or .toml); the root must be an object
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Write output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compile templates and report syntax errors
    Check {
        #[arg(required = true)]
        templates: Vec<String>,
    },
}
