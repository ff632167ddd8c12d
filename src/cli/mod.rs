//! CLI module
//!
//! Command-line interface over the listing, post and reading-time
//! operations.
//!
//! # Commands
//!
//! - `posts` - Print the post listing, optionally following cursors
//! - `post` - Print a single post page
//! - `read-time` - Estimate reading time of a local post document
//! - `paths` - Print the uids pre-rendered as post pages
//! - `serve` - Start the HTTP preview server

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{ReadTimeReport, Runner};
pub use server::{router, serve, AppState};
