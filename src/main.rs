//! Storefront pagination CLI
//!
//! Command-line interface for rendering and serving the pagination widget

use anyhow::Context;
use clap::Parser;
use storefront_pagination::cli::{Cli, Commands, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let command = command_name(&cli.command);
    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await.with_context(|| format!("{command} failed")) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Pages { .. } => "pages",
        Commands::Render { .. } => "render",
        Commands::Serve { .. } => "serve",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_pagination::Error;

    #[test]
    fn test_failure_names_command_and_cause() {
        let cli = Cli::parse_from(["storefront-pagination", "render", "--page", "2"]);
        let command = command_name(&cli.command);

        let result: storefront_pagination::Result<()> =
            Err(Error::http_status(502, "bad gateway"));
        let err = result
            .with_context(|| format!("{command} failed"))
            .unwrap_err();

        assert_eq!(format!("{err:#}"), "render failed: HTTP 502: bad gateway");
    }
}
