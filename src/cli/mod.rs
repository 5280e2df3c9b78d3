//! CLI module
//!
//! Command-line interface for the pagination widget.
//!
//! # Commands
//!
//! - `pages` - Offline page arithmetic for a given count
//! - `render` - Fetch the count once and print the widget
//! - `serve` - Serve listing pages over HTTP

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{parse_page, router, serve, ServerConfig};
