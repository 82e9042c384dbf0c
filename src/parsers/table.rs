use scraper::{Html, Selector};

use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;
use crate::parsers::row_parser::{HourlyRowParser, RowContext};
use crate::parsers::selector;
use crate::utils::constants::{HEADER_ROW_COUNT, HOURLY_TABLE_ROWS};

/// Extracts every hourly record from one day's page.
pub struct HourlyTableParser {
    table: Selector,
    rows: Selector,
    row_parser: HourlyRowParser,
}

impl HourlyTableParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: selector("table#tablefix1")?,
            rows: selector(HOURLY_TABLE_ROWS)?,
            row_parser: HourlyRowParser::new()?,
        })
    }

    /// Parse a page, skipping the two header rows of the table.
    ///
    /// Any malformed data row fails the whole page.
    pub fn parse_page(&self, page: &str, ctx: &RowContext) -> Result<Vec<WeatherRecord>> {
        let document = Html::parse_document(page);

        if document.select(&self.table).next().is_none() {
            return Err(WeatherError::Parse(format!(
                "table#tablefix1 not found in page for {} on {}",
                ctx.station, ctx.date
            )));
        }

        document
            .select(&self.rows)
            .skip(HEADER_ROW_COUNT)
            .map(|row| self.row_parser.parse_row(row, ctx))
            .collect()
    }
}
