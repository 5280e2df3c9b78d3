//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Storefront pagination widget CLI
#[derive(Parser, Debug)]
#[command(name = "storefront-pagination")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override items per page
    #[arg(long, global = true)]
    pub per_page: Option<NonZeroU32>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute page values for a known count, without any request
    Pages {
        /// Total number of items
        #[arg(long)]
        count: u64,

        /// Current page
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Fetch the count and print the rendered widget
    Render {
        /// Current page
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Wrap the widget in a full HTML document
        #[arg(long)]
        document: bool,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}
