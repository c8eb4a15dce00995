//! File adapters for the intake sheet the operations team fills in each
//! morning.

mod parser;

use crate::workflows::allocation::AllocationInput;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum SheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    EmptySheet,
}

impl std::fmt::Display for SheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetImportError::Io(err) => write!(f, "failed to read allocation sheet: {}", err),
            SheetImportError::Csv(err) => write!(f, "invalid allocation CSV data: {}", err),
            SheetImportError::Json(err) => write!(f, "invalid allocation JSON data: {}", err),
            SheetImportError::EmptySheet => {
                write!(f, "allocation sheet has a header but no data row")
            }
        }
    }
}

impl std::error::Error for SheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetImportError::Io(err) => Some(err),
            SheetImportError::Csv(err) => Some(err),
            SheetImportError::Json(err) => Some(err),
            SheetImportError::EmptySheet => None,
        }
    }
}

impl From<std::io::Error> for SheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for SheetImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub struct AllocationSheetImporter;

impl AllocationSheetImporter {
    /// `.json` files are read as a JSON document, anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AllocationInput, SheetImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), is_json, "loading allocation sheet");
        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_csv_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<AllocationInput, SheetImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads the first data row; later rows are ignored.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<AllocationInput, SheetImportError> {
        parser::first_row(reader)?.ok_or(SheetImportError::EmptySheet)
    }
}
