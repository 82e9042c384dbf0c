use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{ffi, params, Connection, ErrorCode, OpenFlags, Row, Statement};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::collector::parse_date;
use crate::config::Settings;
use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;
use crate::readers::RecordReader;
use crate::store::schema::{COUNT_ROWS, CREATE_TABLE, INSERT_RECORD, SELECT_RANGE};
use crate::utils::constants::DATE_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
}

impl LoadReport {
    pub fn summary(&self) -> String {
        format!(
            "Inserted {} record(s), skipped {} duplicate(s)",
            self.inserted, self.duplicates
        )
    }
}

/// SQLite-backed store of hourly records.
///
/// Every operation opens its own connection and closes it before
/// returning. Nothing guards against two processes loading at once beyond
/// SQLite's own file locking.
pub struct WeatherStore {
    db_path: PathBuf,
    reader: RecordReader,
}

impl WeatherStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            reader: RecordReader::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.database_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Create the table if the database file does not exist yet.
    ///
    /// An existing file is left untouched and its schema is not checked.
    pub fn create_schema(&self) -> Result<SchemaStatus> {
        if self.db_path.exists() {
            warn!(
                "Database {} already exists, nothing to create",
                self.db_path.display()
            );
            return Ok(SchemaStatus::AlreadyExists);
        }

        self.initialize(CREATE_TABLE)?;
        info!("Created database {}", self.db_path.display());
        Ok(SchemaStatus::Created)
    }

    /// Create the file and run `ddl`; a failure removes the file again so
    /// the next `create_schema` starts over.
    fn initialize(&self, ddl: &str) -> Result<()> {
        let created = Connection::open(&self.db_path).and_then(|conn| {
            conn.execute_batch(ddl)?;
            conn.close().map_err(|(_, e)| e)
        });

        if let Err(e) = created {
            error!(
                "Creating {} failed, removing it: {}",
                self.db_path.display(),
                e
            );
            if let Err(io) = std::fs::remove_file(&self.db_path) {
                if io.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not remove {}: {}", self.db_path.display(), io);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Insert every row of a CSV file in one transaction.
    ///
    /// Rows whose key is already stored are logged and skipped; the stored
    /// row is kept. Any other failure rolls back the whole file.
    pub fn load(&self, csv_path: &Path) -> Result<LoadReport> {
        info!(
            "Importing {} into {}",
            csv_path.display(),
            self.db_path.display()
        );

        let rows = self.reader.open(csv_path)?;
        let mut conn = self.open(OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        let tx = conn.transaction()?;
        let mut report = LoadReport::default();

        {
            let mut insert = tx.prepare(INSERT_RECORD)?;
            for (index, row) in rows.enumerate() {
                let record = match row.and_then(|record| record.check().map(|()| record)) {
                    Ok(record) => record,
                    Err(e) => {
                        error!(
                            kind = e.kind(),
                            "Row {} unreadable or invalid, rolling back import: {}",
                            index + 1,
                            e.report()
                        );
                        return Err(e);
                    }
                };

                match insert_record(&mut insert, &record) {
                    Ok(()) => report.inserted += 1,
                    Err(e) if is_duplicate_key(&e) => {
                        let duplicate = WeatherError::DuplicateKey {
                            region_id: record.region_id,
                            station_id: record.station_id,
                            date: record.date,
                            hour: record.hour,
                        };
                        warn!(kind = duplicate.kind(), "{}", duplicate);
                        report.duplicates += 1;
                    }
                    Err(e) => {
                        let e = WeatherError::from(e);
                        error!(
                            kind = e.kind(),
                            "Insert of row {} failed, rolling back import: {}",
                            index + 1,
                            e
                        );
                        return Err(e);
                    }
                }
            }
        }

        tx.commit()?;
        info!("Import ended: {}", report.summary());
        Ok(report)
    }

    /// Raw rows of one station with `from <= date <= to`, in storage order.
    pub fn query_range(
        &self,
        region_id: u32,
        station_id: u32,
        from: &str,
        to: &str,
    ) -> Result<Vec<WeatherRecord>> {
        let from = parse_date(from)?.format(DATE_FORMAT).to_string();
        let to = parse_date(to)?.format(DATE_FORMAT).to_string();
        debug!(
            "Selecting prec_no={} block_no={} between {} and {}",
            region_id, station_id, from, to
        );

        let conn = self.open(OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let mut select = conn.prepare(SELECT_RANGE)?;
        let records = select
            .query_map(params![region_id, station_id, from, to], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    pub fn row_count(&self) -> Result<usize> {
        let conn = self.open(OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let count: i64 = conn.query_row(COUNT_ROWS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Open an existing database; a missing file is an error, not a new database.
    fn open(&self, flags: OpenFlags) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            flags | OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI,
        )?;
        Ok(conn)
    }
}

fn insert_record(insert: &mut Statement<'_>, record: &WeatherRecord) -> rusqlite::Result<()> {
    insert.execute(params![
        record.region_id,
        record.station_id,
        record.date.format(DATE_FORMAT).to_string(),
        record.hour,
        record.pressure_onland,
        record.pressure_onsea,
        record.precipitation,
        record.temperature,
        record.dew_point,
        record.vapor_pressure,
        record.humidity,
        record.wind_speed,
        record.wind_direction,
        record.sunlight_hours,
        record.solar_radiation,
        record.snowfall,
        record.snow_depth,
        record.weather_text,
        record.cloud_amount,
        record.visibility,
    ])?;
    Ok(())
}

fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<WeatherRecord> {
    let date_text: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    let real = |index: usize| -> rusqlite::Result<f64> {
        Ok(row.get::<_, Option<f64>>(index)?.unwrap_or(0.0))
    };
    let text = |index: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(index)?.unwrap_or_default())
    };

    Ok(WeatherRecord {
        region_id: row.get(0)?,
        station_id: row.get(1)?,
        date,
        hour: row.get(3)?,
        pressure_onland: real(4)?,
        pressure_onsea: real(5)?,
        precipitation: real(6)?,
        temperature: real(7)?,
        dew_point: real(8)?,
        vapor_pressure: real(9)?,
        humidity: row.get::<_, Option<u32>>(10)?.unwrap_or(0),
        wind_speed: real(11)?,
        wind_direction: text(12)?,
        sunlight_hours: real(13)?,
        solar_radiation: real(14)?,
        snowfall: real(15)?,
        snow_depth: real(16)?,
        weather_text: text(17)?,
        cloud_amount: text(18)?,
        visibility: real(19)?,
    })
}
