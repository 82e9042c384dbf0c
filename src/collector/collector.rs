use chrono::NaiveDate;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::collector::date_range::DateRange;
use crate::collector::source::{DayRequest, JmaClient, PageSource};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{sort_by_key, Station, WeatherRecord};
use crate::parsers::{HourlyTableParser, RowContext};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

/// Outcome of a collection run.
#[derive(Debug, Clone)]
pub struct CollectReport {
    /// Records in (region_id, station_id, date, hour) order
    pub records: Vec<WeatherRecord>,
    pub output_path: PathBuf,
    pub fetched_days: Vec<NaiveDate>,
    pub skipped_days: Vec<NaiveDate>,
    pub elapsed: Duration,
}

impl CollectReport {
    pub fn is_partial(&self) -> bool {
        !self.skipped_days.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Collected {} hourly records from {} day(s) into {}\n  Elapsed: {:.2?}\n",
            self.records.len(),
            self.fetched_days.len(),
            self.output_path.display(),
            self.elapsed
        );
        if self.is_partial() {
            let skipped: Vec<String> = self.skipped_days.iter().map(|d| d.to_string()).collect();
            summary.push_str(&format!(
                "  Skipped {} day(s): {}\n",
                skipped.len(),
                skipped.join(", ")
            ));
        }
        summary
    }
}

/// Scrapes a date range day by day and writes the sorted result as CSV.
pub struct Collector<S: PageSource> {
    settings: Settings,
    wait: Duration,
    source: S,
    parser: HourlyTableParser,
    writer: CsvWriter,
}

impl Collector<JmaClient> {
    /// Collector backed by the live JMA site
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let source = JmaClient::new(&settings)?;
        Self::new(settings, source)
    }
}

impl<S: PageSource> Collector<S> {
    pub fn new(settings: Settings, source: S) -> Result<Self> {
        settings.check()?;
        Ok(Self {
            wait: settings.wait_time()?,
            settings,
            source,
            parser: HourlyTableParser::new()?,
            writer: CsvWriter::new(),
        })
    }

    /// Collect every hourly record between `from` and `to` (inclusive,
    /// `YYYY-MM-DD`) for one station.
    ///
    /// Days that fail to download or parse are logged and left out; the run
    /// only fails on invalid arguments or when the output cannot be written.
    pub fn collect(
        &self,
        from: &str,
        to: &str,
        station: Station,
        progress: Option<&ProgressReporter>,
    ) -> Result<CollectReport> {
        let started = Instant::now();
        info!("Collection start: {} from {} to {}", station, from, to);

        let range = match self.validate(from, to, station) {
            Ok(range) => range,
            Err(e) => {
                error!(kind = e.kind(), "Invalid arguments: {}", e);
                return Err(e);
            }
        };

        let mut records = Vec::new();
        let mut fetched_days = Vec::new();
        let mut skipped_days = Vec::new();

        for (index, date) in range.days().enumerate() {
            if index > 0 && !self.wait.is_zero() {
                thread::sleep(self.wait);
            }

            let request = DayRequest { station, date };
            match self.collect_day(&request) {
                Ok(day_records) => {
                    debug!("{}: {} hourly rows", date, day_records.len());
                    records.extend(day_records);
                    fetched_days.push(date);
                }
                Err(e) => {
                    error!(kind = e.kind(), %date, "Skipping day: {}", e.report());
                    skipped_days.push(date);
                }
            }

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        sort_by_key(&mut records);

        let output_path = self.settings.csv_path.clone();
        self.writer.write_records(&records, &output_path)?;

        let elapsed = started.elapsed();
        if !skipped_days.is_empty() {
            warn!(
                "{} of {} day(s) skipped",
                skipped_days.len(),
                range.len()
            );
        }
        info!(
            "Collection ended: {} records written to {} in {:.2?}",
            records.len(),
            output_path.display(),
            elapsed
        );

        Ok(CollectReport {
            records,
            output_path,
            fetched_days,
            skipped_days,
            elapsed,
        })
    }

    fn validate(&self, from: &str, to: &str, station: Station) -> Result<DateRange> {
        station.check()?;
        DateRange::parse(from, to)
    }

    fn collect_day(&self, request: &DayRequest) -> Result<Vec<WeatherRecord>> {
        let page = self.source.fetch_page(request)?;
        let ctx = RowContext {
            station: request.station,
            date: request.date,
        };
        self.parser.parse_page(&page, &ctx)
    }
}
