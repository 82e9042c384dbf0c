pub mod station;
pub mod value;
pub mod weather;

pub use station::Station;
pub use weather::{sort_by_key, RecordKey, WeatherRecord, COLUMN_NAMES};
