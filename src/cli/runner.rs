//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, BlogConfig};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{first_state, load_all, load_next, Page, PaginationState};
use crate::reading_time::{estimate_read_minutes, total_words, DEFAULT_WORDS_PER_MINUTE};
use crate::render::{parse_locale, static_paths, ListingView, PostView};
use crate::source::{ContentSource, PrismicSource};
use crate::types::PostDocument;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Environment variable overriding the configured access token
pub const ACCESS_TOKEN_ENV: &str = "BLOG_FEED_ACCESS_TOKEN";

/// Output of the `read-time` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadTimeReport {
    pub words: usize,
    pub words_per_minute: u32,
    pub minutes: u64,
}

impl ReadTimeReport {
    /// Estimate a document at the given speed
    pub fn for_document(document: &PostDocument, words_per_minute: u32) -> Self {
        Self {
            words: total_words(&document.data.content),
            words_per_minute,
            minutes: estimate_read_minutes(&document.data.content, words_per_minute),
        }
    }
}

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
        match &self.cli.command {
            Commands::Posts {
                all,
                max_pages,
                cursor,
            } => self.posts(*all, *max_pages, cursor.as_deref()).await,
            Commands::Post { uid } => self.post(uid).await,
            Commands::ReadTime { file, wpm } => self.read_time(file, *wpm),
            Commands::Paths => self.paths().await,
            Commands::Serve { port } => {
                let config = self.load_config()?;
                let source = PrismicSource::new(config.clone())?;
                let state = crate::cli::AppState::new(Arc::new(source), &config)?;
                crate::cli::serve(state, *port).await
            }
        }
    }

    /// Load the site config, applying the access token override
    fn load_config(&self) -> Result<BlogConfig> {
        let mut config = load_config(&self.cli.config)
            .with_context(|| format!("loading {}", self.cli.config.display()))?;
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.is_empty() {
                config.access_token = Some(token);
            }
        }
        Ok(config)
    }

    async fn posts(&self, all: bool, max_pages: Option<usize>, cursor: Option<&str>) -> Result<()> {
        let config = self.load_config()?;
        let locale = parse_locale(&config.locale)?;
        let source = PrismicSource::new(config)?;

        let mut state = match cursor {
            Some(cursor) => {
                let start = PaginationState::initialize(Page::new(vec![], Some(cursor.to_string())));
                load_next(&start, &source).await?
            }
            None => first_state(&source).await?,
        };

        if all || max_pages.is_some() {
            state = load_all(state, &source, max_pages).await?;
        }

        info!("Listed {} posts, more: {}", state.len(), state.has_more());
        self.emit(&ListingView::render(&state, locale)?)
    }

    async fn post(&self, uid: &str) -> Result<()> {
        let config = self.load_config()?;
        let locale = parse_locale(&config.locale)?;
        let words_per_minute = config.words_per_minute;
        let source = PrismicSource::new(config)?;

        let document = source.get_by_uid(uid).await?;
        self.emit(&PostView::render(&document, locale, words_per_minute)?)
    }

    fn read_time(&self, file: &Path, wpm: Option<u32>) -> Result<()> {
        if !file.exists() {
            return Err(Error::FileNotFound {
                path: file.display().to_string(),
            });
        }
        let words_per_minute = match wpm {
            Some(wpm) => wpm,
            None if self.cli.config.exists() => self.load_config()?.words_per_minute,
            None => DEFAULT_WORDS_PER_MINUTE,
        };
        if words_per_minute == 0 {
            return Err(Error::invalid_value("wpm", "must be greater than zero"));
        }

        let content = std::fs::read_to_string(file)?;
        let document: PostDocument = serde_json::from_str(&content)?;
        self.emit(&ReadTimeReport::for_document(&document, words_per_minute))
    }

    async fn paths(&self) -> Result<()> {
        let config = self.load_config()?;
        let count = config.static_paths;
        let source = PrismicSource::new(config)?;

        let state = first_state(&source).await?;
        self.emit(&static_paths(&state, count))
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{output}");
        Ok(())
    }
}
