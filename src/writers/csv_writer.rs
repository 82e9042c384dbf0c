use crate::error::Result;
use crate::models::{WeatherRecord, COLUMN_NAMES};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Writes hourly records as CSV with the fixed 20-column header.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Write records to a file, creating parent directories as needed.
    ///
    /// The header is written even when `records` is empty.
    pub fn write_records(&self, records: &[WeatherRecord], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        self.write_to(records, file)
    }

    /// Write records to any writer
    pub fn write_to<W: Write>(&self, records: &[WeatherRecord], writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(COLUMN_NAMES)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;
    use crate::readers::RecordReader;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(hour: u32) -> WeatherRecord {
        let mut record = WeatherRecord::empty(
            Station::default(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            hour,
        );
        record.temperature = 17.3;
        record.weather_text = "晴れ".to_string();
        record
    }

    #[test]
    fn test_header_and_rows() -> Result<()> {
        let mut buffer = Vec::new();
        CsvWriter::new().write_to(&[record(1), record(2)], &mut buffer)?;

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], COLUMN_NAMES.join(","));
        assert_eq!(
            lines[1],
            "91,47936,2023-01-01,1,0.0,0.0,0.0,17.3,0.0,0.0,0,0.0,,0.0,0.0,0.0,0.0,晴れ,,0.0"
        );
        Ok(())
    }

    #[test]
    fn test_empty_records_still_write_header() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("hourly_s1.csv");

        CsvWriter::new().write_records(&[], &path)?;

        let text = std::fs::read_to_string(&path)?;
        assert_eq!(text.trim_end(), COLUMN_NAMES.join(","));
        Ok(())
    }

    #[test]
    fn test_written_file_reads_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("hourly_s1.csv");
        let records = vec![record(1), record(2)];

        CsvWriter::new().write_records(&records, &path)?;

        assert_eq!(RecordReader::new().read_records(&path)?, records);
        Ok(())
    }
}
