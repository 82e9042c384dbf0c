use chrono::NaiveDate;

use crate::error::{Result, WeatherError};
use crate::utils::constants::DATE_FORMAT;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(WeatherError::Validation(format!(
                "from date {} is after to date {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// Parse both bounds with the fixed `YYYY-MM-DD` format
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }

    pub fn len(&self) -> u64 {
        (self.to - self.from).num_days() as u64 + 1
    }

    /// A constructed range always holds at least one day
    pub fn is_empty(&self) -> bool {
        false
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        WeatherError::Validation(format!(
            "date '{}' does not match {}: {}",
            value, DATE_FORMAT, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_are_inclusive() -> Result<()> {
        let range = DateRange::parse("2023-12-30", "2024-01-02")?;
        let days: Vec<String> = range.days().map(|d| d.to_string()).collect();

        assert_eq!(
            days,
            vec!["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"]
        );
        assert_eq!(range.len(), 4);
        Ok(())
    }

    #[test]
    fn test_single_day() -> Result<()> {
        let range = DateRange::parse("2023-01-01", "2023-01-01")?;
        assert_eq!(range.days().count(), 1);
        Ok(())
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = DateRange::parse("2023-01-02", "2023-01-01").unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(DateRange::parse("2023/01/01", "2023-01-02").is_err());
        assert!(DateRange::parse("2023-01-01", "2023-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
