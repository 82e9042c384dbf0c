use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::collector::{Collector, DateRange};
use crate::config::Settings;
use crate::error::Result;
use crate::models::Station;
use crate::store::{SchemaStatus, WeatherStore};
use crate::utils::filename::generate_default_export_filename;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Collect {
            from,
            to,
            region,
            station,
            output,
        } => {
            let settings = match output {
                Some(path) => settings.with_csv_path(path),
                None => settings,
            };
            let station = Station::new(region, station);
            let days = DateRange::parse(&from, &to).map(|r| r.len()).unwrap_or(0);

            println!("Collecting hourly observations for {}", station);
            println!("Range: {} to {}", from, to);
            println!("Output file: {}", settings.csv_path.display());

            let progress = ProgressReporter::new(days, "Fetching daily pages...", cli.quiet);
            let collector = Collector::from_settings(settings)?;
            let report = collector.collect(&from, &to, station, Some(&progress))?;
            progress.finish_with_message(&format!("Fetched {} day(s)", report.fetched_days.len()));

            println!("\n{}", report.summary());
        }

        Commands::InitDb { database } => {
            let store = store_for(&settings, database);
            match store.create_schema()? {
                SchemaStatus::Created => println!("Created {}", store.path().display()),
                SchemaStatus::AlreadyExists => {
                    println!("{} already exists, nothing to do", store.path().display())
                }
            }
        }

        Commands::Load { input, database } => {
            let store = store_for(&settings, database);
            store.create_schema()?;

            let progress = ProgressReporter::new_spinner("Importing records...", cli.quiet);
            let report = store.load(&input)?;
            progress.finish_with_message(&report.summary());

            println!(
                "{} now holds {} record(s)",
                store.path().display(),
                store.row_count()?
            );
        }

        Commands::Query {
            from,
            to,
            region,
            station,
            database,
            output,
            export,
            json,
        } => {
            let store = store_for(&settings, database);
            let records = store.query_range(region, station, &from, &to)?;

            let output = if export {
                let range = DateRange::parse(&from, &to)?;
                Some(generate_default_export_filename(
                    Station::new(region, station),
                    range.from,
                    range.to,
                ))
            } else {
                output
            };

            if let Some(path) = output {
                CsvWriter::new().write_records(&records, &path)?;
                println!("Wrote {} record(s) to {}", records.len(), path.display());
            } else if json {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                for record in &records {
                    serde_json::to_writer(&mut out, record).map_err(std::io::Error::from)?;
                    writeln!(out)?;
                }
            } else {
                CsvWriter::new().write_to(&records, std::io::stdout().lock())?;
            }
        }
    }

    Ok(())
}

fn store_for(settings: &Settings, database: Option<PathBuf>) -> WeatherStore {
    match database {
        Some(path) => WeatherStore::new(path),
        None => WeatherStore::from_settings(settings),
    }
}
