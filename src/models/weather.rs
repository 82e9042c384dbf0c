use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::value::{lenient_int, lenient_real, lenient_text};
use crate::models::Station;

/// CSV and table column names, in file order
pub const COLUMN_NAMES: [&str; 20] = [
    "region_id",
    "station_id",
    "date",
    "hour",
    "pressure_onland",
    "pressure_onsea",
    "precipitation",
    "temperature",
    "dew_point",
    "vapor_pressure",
    "humidity",
    "wind_speed",
    "wind_direction",
    "sunlight_hours",
    "solar_radiation",
    "snowfall",
    "snow_depth",
    "weather_text",
    "cloud_amount",
    "visibility",
];

/// Primary key of a stored record
pub type RecordKey = (u32, u32, NaiveDate, u32);

/// One hourly observation row.
///
/// Field aliases accept CSV files written with the JMA page's own
/// (Japanese) column headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[serde(alias = "県番号")]
    #[validate(range(min = 1))]
    pub region_id: u32,

    #[serde(alias = "地区番号")]
    #[validate(range(min = 1))]
    pub station_id: u32,

    #[serde(alias = "日付")]
    pub date: NaiveDate,

    #[serde(alias = "時刻")]
    #[validate(range(min = 1, max = 24))]
    pub hour: u32,

    #[serde(alias = "気圧・現地(hPa)", deserialize_with = "lenient_real")]
    pub pressure_onland: f64,

    #[serde(alias = "気圧・海面(hPa)", deserialize_with = "lenient_real")]
    pub pressure_onsea: f64,

    #[serde(alias = "降水量", deserialize_with = "lenient_real")]
    pub precipitation: f64,

    #[serde(alias = "気温(C)", deserialize_with = "lenient_real")]
    pub temperature: f64,

    #[serde(alias = "露天温度(C)", deserialize_with = "lenient_real")]
    pub dew_point: f64,

    #[serde(alias = "蒸気圧(hPa)", deserialize_with = "lenient_real")]
    pub vapor_pressure: f64,

    #[serde(alias = "湿度(%)", deserialize_with = "lenient_int")]
    #[validate(range(max = 100))]
    pub humidity: u32,

    #[serde(alias = "風速(m/s)", deserialize_with = "lenient_real")]
    pub wind_speed: f64,

    #[serde(alias = "風向", deserialize_with = "lenient_text")]
    pub wind_direction: String,

    #[serde(alias = "日照時間(h)", deserialize_with = "lenient_real")]
    pub sunlight_hours: f64,

    #[serde(alias = "全天日射量(MJ/m2)", deserialize_with = "lenient_real")]
    pub solar_radiation: f64,

    #[serde(alias = "降雪(cm)", deserialize_with = "lenient_real")]
    pub snowfall: f64,

    #[serde(alias = "積雪(cm)", deserialize_with = "lenient_real")]
    pub snow_depth: f64,

    #[serde(alias = "天気", deserialize_with = "lenient_text")]
    pub weather_text: String,

    #[serde(alias = "雨雲", deserialize_with = "lenient_text")]
    pub cloud_amount: String,

    #[serde(alias = "視程(km)", deserialize_with = "lenient_real")]
    pub visibility: f64,
}

impl WeatherRecord {
    /// A record with every measurement at its missing-data default
    pub fn empty(station: Station, date: NaiveDate, hour: u32) -> Self {
        Self {
            region_id: station.region_id,
            station_id: station.station_id,
            date,
            hour,
            pressure_onland: 0.0,
            pressure_onsea: 0.0,
            precipitation: 0.0,
            temperature: 0.0,
            dew_point: 0.0,
            vapor_pressure: 0.0,
            humidity: 0,
            wind_speed: 0.0,
            wind_direction: String::new(),
            sunlight_hours: 0.0,
            solar_radiation: 0.0,
            snowfall: 0.0,
            snow_depth: 0.0,
            weather_text: String::new(),
            cloud_amount: String::new(),
            visibility: 0.0,
        }
    }

    pub fn key(&self) -> RecordKey {
        (self.region_id, self.station_id, self.date, self.hour)
    }

    pub fn check(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}

/// Sort records ascending by (region_id, station_id, date, hour)
pub fn sort_by_key(records: &mut [WeatherRecord]) {
    records.sort_by_key(|r| r.key());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
    }

    #[test]
    fn test_hour_range_validation() {
        let station = Station::default();
        assert!(WeatherRecord::empty(station, date(1), 24).check().is_ok());
        assert!(WeatherRecord::empty(station, date(1), 0).check().is_err());
        assert!(WeatherRecord::empty(station, date(1), 25).check().is_err());
    }

    #[test]
    fn test_humidity_over_hundred_is_invalid() {
        let mut record = WeatherRecord::empty(Station::default(), date(1), 1);
        record.humidity = 101;
        assert!(record.check().is_err());
    }

    #[test]
    fn test_sort_by_key() {
        let naha = Station::new(91, 47936);
        let other = Station::new(44, 47662);
        let mut records = vec![
            WeatherRecord::empty(naha, date(2), 1),
            WeatherRecord::empty(naha, date(1), 10),
            WeatherRecord::empty(naha, date(1), 2),
            WeatherRecord::empty(other, date(3), 5),
        ];

        sort_by_key(&mut records);

        let keys: Vec<RecordKey> = records.iter().map(|r| r.key()).collect();
        assert_eq!(
            keys,
            vec![
                (44, 47662, date(3), 5),
                (91, 47936, date(1), 2),
                (91, 47936, date(1), 10),
                (91, 47936, date(2), 1),
            ]
        );
    }

    #[test]
    fn test_column_names_match_field_order() {
        assert_eq!(COLUMN_NAMES.len(), 20);
        assert_eq!(COLUMN_NAMES[0], "region_id");
        assert_eq!(COLUMN_NAMES[3], "hour");
        assert_eq!(COLUMN_NAMES[17], "weather_text");
        assert_eq!(COLUMN_NAMES[19], "visibility");
    }
}
