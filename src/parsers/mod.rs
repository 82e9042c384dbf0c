pub mod cell;
pub mod row_parser;
pub mod table;

pub use cell::{CellLookup, FirstMatch, ImageLabel, TextContent};
pub use row_parser::{HourlyRowParser, RowContext};
pub use table::HourlyTableParser;

use crate::error::{Result, WeatherError};
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| WeatherError::Parse(format!("invalid selector '{}': {}", css, e)))
}
