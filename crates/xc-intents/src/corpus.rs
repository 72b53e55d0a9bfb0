// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::{LoadError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of the column holding the intent label.
pub const INTENT_COLUMN: &str = "Intent";
/// Header of the column holding the example user utterance.
pub const EXAMPLE_COLUMN: &str = "User Example";
/// Header of the column holding the canned bot response.
pub const RESPONSE_COLUMN: &str = "Bot Response";

const REQUIRED_COLUMNS: [&str; 3] = [INTENT_COLUMN, EXAMPLE_COLUMN, RESPONSE_COLUMN];

/// One (intent, example, response) triple read from a data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorpusRow {
    #[serde(rename = "Intent")]
    pub intent: String,
    #[serde(rename = "User Example")]
    pub example: String,
    #[serde(rename = "Bot Response")]
    pub response: String,
}

impl CorpusRow {
    pub fn new(
        intent: impl Into<String>,
        example: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            intent: intent.into(),
            example: example.into(),
            response: response.into(),
        }
    }
}

/// All rows from all data sources, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
    sources: Vec<PathBuf>,
}

impl Corpus {
    /// Build a corpus from rows that did not come from a file.
    pub fn from_rows(rows: Vec<CorpusRow>) -> Self {
        Self {
            rows,
            sources: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads and concatenates CSV data sources into a [`Corpus`].
#[derive(Debug, Default)]
pub struct CorpusLoader {
    corpus: Corpus,
}

impl CorpusLoader {
    /// Load every source in order. The first failing source aborts the load.
    pub fn from_sources<S, P>(sources: S) -> Result<Self>
    where
        S: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut loader = Self::default();
        for source in sources {
            loader.load_source(source.as_ref())?;
        }
        Ok(loader)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    fn load_source(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rows = read_rows(file, path)?;
        info!(source = %path.display(), rows = rows.len(), "Loaded data source");
        self.corpus.rows.extend(rows);
        self.corpus.sources.push(path.to_path_buf());
        Ok(())
    }
}

/// Parse CSV rows from `reader`. `origin` is only used for error reporting.
pub fn read_rows<R: Read>(reader: R, origin: &Path) -> Result<Vec<CorpusRow>> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn {
                path: origin.to_path_buf(),
                column,
            });
        }
    }

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: CorpusRow = record.deserialize(Some(&headers)).map_err(csv_error)?;

        let fields = [
            (INTENT_COLUMN, &row.intent),
            (EXAMPLE_COLUMN, &row.example),
            (RESPONSE_COLUMN, &row.response),
        ];
        if let Some((column, _)) = fields.into_iter().find(|(_, value)| value.is_empty()) {
            return Err(LoadError::MissingField {
                path: origin.to_path_buf(),
                line,
                column,
            });
        }

        rows.push(row);
    }

    debug!(source = %origin.display(), rows = rows.len(), "Parsed data source");
    Ok(rows)
}
