use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_REGION_ID, DEFAULT_STATION_ID};

#[derive(Parser)]
#[command(name = "jma-collector")]
#[command(about = "Collect JMA hourly weather observations into SQLite")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Settings file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape hourly observations for a date range into a CSV file
    Collect {
        #[arg(long, help = "First day, YYYY-MM-DD")]
        from: String,

        #[arg(long, help = "Last day (inclusive), YYYY-MM-DD")]
        to: String,

        #[arg(long, default_value_t = DEFAULT_REGION_ID, help = "Region id (prec_no)")]
        region: u32,

        #[arg(long, default_value_t = DEFAULT_STATION_ID, help = "Station id (block_no)")]
        station: u32,

        #[arg(short, long, help = "Output CSV path [default: settings csv_path]")]
        output: Option<PathBuf>,
    },

    /// Create the SQLite database if it does not exist
    InitDb {
        #[arg(short, long, help = "Database path [default: settings database_path]")]
        database: Option<PathBuf>,
    },

    /// Create the database if needed and import a collected CSV file
    Load {
        #[arg(short, long, help = "CSV file written by `collect`")]
        input: PathBuf,

        #[arg(short, long, help = "Database path [default: settings database_path]")]
        database: Option<PathBuf>,
    },

    /// Print or export stored raw rows for a date range
    Query {
        #[arg(long, help = "First day, YYYY-MM-DD")]
        from: String,

        #[arg(long, help = "Last day (inclusive), YYYY-MM-DD")]
        to: String,

        #[arg(long, default_value_t = DEFAULT_REGION_ID, help = "Region id (prec_no)")]
        region: u32,

        #[arg(long, default_value_t = DEFAULT_STATION_ID, help = "Station id (block_no)")]
        station: u32,

        #[arg(short, long, help = "Database path [default: settings database_path]")]
        database: Option<PathBuf>,

        #[arg(short, long, help = "Write rows to this CSV file")]
        output: Option<PathBuf>,

        #[arg(
            long,
            conflicts_with = "output",
            help = "Write rows to output/jma-{prec_no}-{block_no}-{from}-{to}.csv"
        )]
        export: bool,

        #[arg(long, help = "Print rows as JSON lines")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_defaults() {
        let cli = Cli::parse_from([
            "jma-collector",
            "collect",
            "--from",
            "2023-01-01",
            "--to",
            "2023-01-02",
        ]);

        match cli.command {
            Commands::Collect {
                region,
                station,
                output,
                ..
            } => {
                assert_eq!(region, 91);
                assert_eq!(station, 47936);
                assert!(output.is_none());
            }
            _ => panic!("expected collect"),
        }
    }

    #[test]
    fn test_query_export_flag() {
        let cli = Cli::parse_from([
            "jma-collector",
            "query",
            "--from",
            "2023-01-01",
            "--to",
            "2023-01-02",
            "--export",
        ]);

        match cli.command {
            Commands::Query {
                output,
                export,
                json,
                ..
            } => {
                assert!(output.is_none());
                assert!(export);
                assert!(!json);
            }
            _ => panic!("expected query"),
        }
    }
}
