use std::fs;
use std::io::Read;

use camino::Utf8Path;
use serde::de::DeserializeOwned;

use crate::domain::SampleRecord;
use crate::error::SnippyJobsError;

/// Tab-delimited sample sheet reader.
///
/// The header row is required but its labels are ignored: columns are bound
/// positionally to `R::COLUMNS`. Rows come back in file order and duplicate
/// sample ids are kept.
pub struct SampleTable;

impl SampleTable {
    pub fn load<R>(path: &Utf8Path) -> Result<Vec<R>, SnippyJobsError>
    where
        R: SampleRecord + DeserializeOwned,
    {
        let file = fs::File::open(path.as_std_path()).map_err(|err| {
            SnippyJobsError::TableRead {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        let rows = Self::from_reader::<R, _>(file)?;
        tracing::debug!(path = %path, rows = rows.len(), "loaded sample table");
        Ok(rows)
    }

    pub fn from_reader<R, I>(input: I) -> Result<Vec<R>, SnippyJobsError>
    where
        R: SampleRecord + DeserializeOwned,
        I: Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let expected = R::COLUMNS.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| SnippyJobsError::TableParse(err.to_string()))?;
            if record.len() != expected {
                let line = record.position().map(|pos| pos.line()).unwrap_or_default();
                return Err(SnippyJobsError::TableParse(format!(
                    "line {line}: expected {expected} columns ({}), found {}",
                    R::COLUMNS.join(", "),
                    record.len()
                )));
            }
            let row: R = record
                .deserialize(None)
                .map_err(|err| SnippyJobsError::TableParse(err.to_string()))?;
            rows.push(row);
        }
        Ok(rows)
    }
}
