//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Blog feed CLI
#[derive(Parser, Debug)]
#[command(name = "blog-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site configuration file (YAML)
    #[arg(short, long, global = true, default_value = "blog.yaml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the binary
    ///
    /// A valid `rust_log` (the `RUST_LOG` value) wins outright; otherwise the
    /// level is `debug` with `--verbose` and `info` without.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let level = if self.verbose { "debug" } else { "info" };
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(level))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the post listing
    Posts {
        /// Follow cursors until the listing is exhausted
        #[arg(long)]
        all: bool,

        /// Stop following cursors after this many extra pages
        #[arg(long)]
        max_pages: Option<usize>,

        /// Start from this next-page cursor instead of the first page
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Print a single post page
    Post {
        /// Post uid
        uid: String,
    },

    /// Estimate reading time of a post document (JSON)
    ReadTime {
        /// Path to the post document
        file: PathBuf,

        /// Reading speed override
        #[arg(long)]
        wpm: Option<u32>,
    },

    /// Print the post uids rendered ahead of time
    Paths,

    /// Start the HTTP preview server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
