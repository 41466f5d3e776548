//! FactLens CLI library.
//!
//! Submits content to a FactLens server from the terminal, prints the
//! verdict, and can hand the result to the results page through a link.

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod images;
pub mod output;

pub use cli::{Cli, Command};
pub use client::FactLensClient;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
