//! SQL for the `weather_info` table.
//!
//! Integer columns are declared `INTEGER` and always bound as integers, so
//! SQLite stores them with integer affinity rather than as blobs.

pub const CREATE_TABLE: &str = "CREATE TABLE weather_info (
    region_id INTEGER NOT NULL,
    station_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    hour INTEGER NOT NULL,
    pressure_onland REAL DEFAULT 0.0,
    pressure_onsea REAL DEFAULT 0.0,
    precipitation REAL DEFAULT 0.0,
    temperature REAL DEFAULT 0.0,
    dew_point REAL DEFAULT 0.0,
    vapor_pressure REAL DEFAULT 0.0,
    humidity INTEGER DEFAULT 0,
    wind_speed REAL DEFAULT 0.0,
    wind_direction TEXT DEFAULT '',
    sunlight_hours REAL DEFAULT 0.0,
    solar_radiation REAL DEFAULT 0.0,
    snowfall REAL DEFAULT 0.0,
    snow_depth REAL DEFAULT 0.0,
    weather_text TEXT DEFAULT '',
    cloud_amount TEXT DEFAULT '',
    visibility REAL DEFAULT 0.0,
    PRIMARY KEY (region_id, station_id, date, hour)
)";

/// Plain INSERT: a key collision fails the statement instead of replacing
pub const INSERT_RECORD: &str = "INSERT INTO weather_info (
    region_id, station_id, date, hour,
    pressure_onland, pressure_onsea, precipitation, temperature,
    dew_point, vapor_pressure, humidity, wind_speed, wind_direction,
    sunlight_hours, solar_radiation, snowfall, snow_depth,
    weather_text, cloud_amount, visibility
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)";

/// No ORDER BY: rows come back in whatever order SQLite yields them
pub const SELECT_RANGE: &str = "SELECT
    region_id, station_id, date, hour,
    pressure_onland, pressure_onsea, precipitation, temperature,
    dew_point, vapor_pressure, humidity, wind_speed, wind_direction,
    sunlight_hours, solar_radiation, snowfall, snow_depth,
    weather_text, cloud_amount, visibility
FROM weather_info
WHERE region_id = ?1 AND station_id = ?2 AND date BETWEEN ?3 AND ?4";

pub const COUNT_ROWS: &str = "SELECT COUNT(*) FROM weather_info";
