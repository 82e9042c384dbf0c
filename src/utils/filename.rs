use crate::models::Station;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Default export filename for a query: jma-{prec_no}-{block_no}-{YYYYMMDD}-{YYYYMMDD}.csv
pub fn generate_default_export_filename(
    station: Station,
    from: NaiveDate,
    to: NaiveDate,
) -> PathBuf {
    let filename = format!(
        "jma-{}-{}-{}-{}.csv",
        station.region_id,
        station.station_id,
        from.format("%Y%m%d"),
        to.format("%Y%m%d")
    );
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_export_filename() {
        let filename = generate_default_export_filename(
            Station::default(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        );
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output"));
        assert!(filename_str.ends_with("jma-91-47936-20230101-20230131.csv"));
    }
}
