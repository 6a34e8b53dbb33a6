//! Errors reported by the md2html binary.
//!
//! Conversion itself cannot fail; everything here comes from I/O, configuration
//! or a bad format name on the command line.

use md2html_config::LoadError;
use md2html_core::FormatError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error reading file '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("Error reading standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("Error writing file '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error("Error writing standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] LoadError),

    #[error("Error: {0}")]
    Format(#[from] FormatError),

    #[error("Error: format '{0}' cannot be used as output. Use --list-formats to see the options")]
    NotAnOutputFormat(String),
}
