// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;
use thiserror::Error;

/// Convenient result alias for corpus operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading the chatbot corpus.
///
/// All of them are fatal: the service refuses to start on a partial corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data source is missing or could not be read.
    #[error("Failed to read data source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data source is not well-formed CSV.
    #[error("Malformed data source {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks one of the required columns.
    #[error("Data source {} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A row has an empty value in a required column.
    #[error("Data source {} line {line}: empty value in required column '{column}'", .path.display())]
    MissingField {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },
}

impl LoadError {
    /// Path of the data source that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::MissingColumn { path, .. }
            | LoadError::MissingField { path, .. } => path,
        }
    }
}
