//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::component::Pagination;
use crate::config::{load_settings, Settings};
use crate::count::build_query;
use crate::error::Result;
use crate::pagination::{Derived, PageState};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let settings = self.load_settings()?;

        match &self.cli.command {
            Commands::Pages { count, page } => self.pages(&settings, *count, *page),
            Commands::Render { page, document } => self.render(settings, *page, *document).await,
            Commands::Serve { port } => {
                let config = crate::cli::ServerConfig { settings };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Load settings from the file given with -C, or defaults
    fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.cli.config {
            Some(path) => load_settings(path)?,
            None => {
                let mut settings = Settings::default();
                settings.apply_overrides(|key| std::env::var(key).ok())?;
                settings.validate()?;
                settings
            }
        };

        // Command-line flag wins over file and environment
        if let Some(per_page) = self.cli.per_page {
            settings.per_page = per_page;
        }

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Print derived page values for a known count
    fn pages(&self, settings: &Settings, count: u64, page: u32) -> Result<()> {
        let derived = Derived::new(count, &PageState::new(page, settings.per_page));
        println!("{}", serde_json::to_string_pretty(&derived)?);
        Ok(())
    }

    /// Mount the widget, wait for the count and print the markup
    async fn render(&self, settings: Settings, page: u32, document: bool) -> Result<()> {
        let query = build_query(&settings.source)?;
        let mut widget = Pagination::new(query, settings).mount(page);
        let view = widget.settled().await;

        if document {
            println!("{}", view.to_document());
        } else {
            if let Some(title) = &view.title {
                tracing::info!("{title}");
            }
            println!("{}", view.to_html());
        }
        Ok(())
    }
}
