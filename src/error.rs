use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    InvalidRecord(#[from] validator::ValidationErrors),

    #[error("Network request failed for {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed hourly table: {0}")]
    Parse(String),

    #[error("Record ({region_id}, {station_id}, {date}, {hour}) already stored, not registered")]
    DuplicateKey {
        region_id: u32,
        station_id: u32,
        date: NaiveDate,
        hour: u32,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl WeatherError {
    /// Name of the failure class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Validation(_) | WeatherError::InvalidRecord(_) => "ValidationError",
            WeatherError::Fetch { .. } | WeatherError::HttpStatus { .. } => "FetchError",
            WeatherError::Parse(_) => "ParseError",
            WeatherError::DuplicateKey { .. } => "DuplicateKeyError",
            WeatherError::Storage(_) => "StorageError",
            WeatherError::Io(_) => "IoError",
            WeatherError::Csv(_) => "CsvError",
            WeatherError::Config(_) => "ConfigError",
        }
    }

    /// Display the error followed by its chain of sources.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            report.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_failure_class() {
        let err = WeatherError::Parse("table#tablefix1 not found".to_string());
        assert_eq!(err.kind(), "ParseError");

        let err = WeatherError::DuplicateKey {
            region_id: 91,
            station_id: 47936,
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            hour: 1,
        };
        assert_eq!(err.kind(), "DuplicateKeyError");
        assert!(err.to_string().contains("2023-01-01"));
    }

    #[test]
    fn test_report_includes_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err = WeatherError::Io(io);
        let report = err.report();
        assert!(report.starts_with("File I/O error: missing.csv"));
    }
}
