use crate::error::{Result, WeatherError};
use crate::models::{WeatherRecord, COLUMN_NAMES};
use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Reads hourly records back from a CSV file with a header row.
pub struct RecordReader {
    delimiter: u8,
}

impl RecordReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Open a file and check its header, returning a lazy row iterator
    pub fn open(&self, path: &Path) -> Result<RecordIter> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?;
        if headers.len() != COLUMN_NAMES.len() {
            return Err(WeatherError::Validation(format!(
                "{}: expected {} columns, found {}",
                path.display(),
                COLUMN_NAMES.len(),
                headers.len()
            )));
        }

        Ok(RecordIter {
            inner: reader.into_deserialize(),
        })
    }

    /// Read every record of a file into memory
    pub fn read_records(&self, path: &Path) -> Result<Vec<WeatherRecord>> {
        self.open(path)?.collect()
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecordIter {
    inner: DeserializeRecordsIntoIter<File, WeatherRecord>,
}

impl Iterator for RecordIter {
    type Item = Result<WeatherRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|row| row.map_err(WeatherError::from))
    }
}
