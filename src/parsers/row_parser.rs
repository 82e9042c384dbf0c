use chrono::NaiveDate;
use scraper::{ElementRef, Selector};

use crate::error::{Result, WeatherError};
use crate::models::value::{int_or_default, real_or_default, text_or_default};
use crate::models::{Station, WeatherRecord};
use crate::parsers::cell::{CellLookup, FirstMatch, TextContent};
use crate::parsers::selector;

// Cell positions in a row of the hourly_s1 (view=p1) table
const HOUR: usize = 0;
const PRESSURE_ONLAND: usize = 1;
const PRESSURE_ONSEA: usize = 2;
const PRECIPITATION: usize = 3;
const TEMPERATURE: usize = 4;
const DEW_POINT: usize = 5;
const VAPOR_PRESSURE: usize = 6;
const HUMIDITY: usize = 7;
const WIND_SPEED: usize = 8;
const WIND_DIRECTION: usize = 9;
const SUNLIGHT_HOURS: usize = 10;
const SOLAR_RADIATION: usize = 11;
const SNOWFALL: usize = 12;
const SNOW_DEPTH: usize = 13;
const WEATHER: usize = 14;
const CLOUD_AMOUNT: usize = 15;
const VISIBILITY: usize = 16;

/// Number of `td` cells a data row must carry
pub const CELL_COUNT: usize = 17;

/// Which station and day a row belongs to; the page itself does not repeat it.
#[derive(Debug, Clone, Copy)]
pub struct RowContext {
    pub station: Station,
    pub date: NaiveDate,
}

/// Turns one data row of the hourly table into a [`WeatherRecord`].
///
/// Cells are read by position. A layout change on the JMA side only
/// requires touching the index constants above and [`parse_row`].
///
/// [`parse_row`]: HourlyRowParser::parse_row
pub struct HourlyRowParser {
    td: Selector,
    weather: FirstMatch,
}

impl HourlyRowParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            td: selector("td")?,
            weather: FirstMatch::weather()?,
        })
    }

    pub fn parse_row(&self, row: ElementRef<'_>, ctx: &RowContext) -> Result<WeatherRecord> {
        let cells: Vec<ElementRef<'_>> = row.select(&self.td).collect();
        if cells.len() < CELL_COUNT {
            return Err(WeatherError::Parse(format!(
                "row for {} has {} cells, expected {}",
                ctx.date,
                cells.len(),
                CELL_COUNT
            )));
        }

        let text = |index: usize| TextContent.lookup(cells[index]).unwrap_or_default();

        let hour_text = text(HOUR);
        let hour = hour_text.parse::<u32>().map_err(|_| {
            WeatherError::Parse(format!("invalid hour '{}' on {}", hour_text, ctx.date))
        })?;

        let record = WeatherRecord {
            region_id: ctx.station.region_id,
            station_id: ctx.station.station_id,
            date: ctx.date,
            hour,
            pressure_onland: real_or_default(&text(PRESSURE_ONLAND)),
            pressure_onsea: real_or_default(&text(PRESSURE_ONSEA)),
            precipitation: real_or_default(&text(PRECIPITATION)),
            temperature: real_or_default(&text(TEMPERATURE)),
            dew_point: real_or_default(&text(DEW_POINT)),
            vapor_pressure: real_or_default(&text(VAPOR_PRESSURE)),
            humidity: int_or_default(&text(HUMIDITY)),
            wind_speed: real_or_default(&text(WIND_SPEED)),
            wind_direction: text_or_default(&text(WIND_DIRECTION)),
            sunlight_hours: real_or_default(&text(SUNLIGHT_HOURS)),
            solar_radiation: real_or_default(&text(SOLAR_RADIATION)),
            snowfall: real_or_default(&text(SNOWFALL)),
            snow_depth: real_or_default(&text(SNOW_DEPTH)),
            weather_text: text_or_default(&self.weather.resolve(cells[WEATHER])),
            cloud_amount: text_or_default(&text(CLOUD_AMOUNT)),
            visibility: real_or_default(&text(VISIBILITY)),
        };

        record.check().map_err(|e| {
            WeatherError::Parse(format!("row for {} hour {}: {}", ctx.date, hour, e))
        })?;

        Ok(record)
    }
}
