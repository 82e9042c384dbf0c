//! Collector and SQLite store for the hourly weather observation pages of
//! the Japan Meteorological Agency.
//!
//! Data flows one way: [`collector::Collector`] scrapes a date range into a
//! CSV file, [`store::WeatherStore`] loads that file and answers date-range
//! queries with raw rows.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod readers;
pub mod store;
pub mod utils;
pub mod writers;

pub use collector::{CollectReport, Collector, PageSource};
pub use config::Settings;
pub use error::{Result, WeatherError};
pub use models::{Station, WeatherRecord};
pub use store::{LoadReport, SchemaStatus, WeatherStore};
