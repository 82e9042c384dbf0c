use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, WeatherError};
use crate::models::Station;

/// One page request: a station on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRequest {
    pub station: Station,
    pub date: NaiveDate,
}

/// Something that can deliver the hourly HTML page for a day.
pub trait PageSource {
    fn fetch_page(&self, request: &DayRequest) -> Result<String>;
}

/// Blocking HTTP client for the JMA hourly pages.
pub struct JmaClient {
    client: Client,
    base_url: String,
    view_mode: String,
}

impl JmaClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout()?)
            .timeout(settings.request_timeout()?)
            .build()
            .map_err(|source| WeatherError::Fetch {
                url: settings.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            view_mode: settings.view_mode.clone(),
        })
    }

    pub fn url_for(&self, request: &DayRequest) -> String {
        format!(
            "{}?prec_no={}&block_no={}&year={}&month={}&day={}&view={}",
            self.base_url,
            request.station.region_id,
            request.station.station_id,
            request.date.year(),
            request.date.month(),
            request.date.day(),
            self.view_mode
        )
    }
}

impl PageSource for JmaClient {
    fn fetch_page(&self, request: &DayRequest) -> Result<String> {
        let url = self.url_for(request);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| WeatherError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::HttpStatus { url, status });
        }

        response
            .text()
            .map_err(|source| WeatherError::Fetch { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_day() -> Result<()> {
        let client = JmaClient::new(&Settings::default())?;
        let request = DayRequest {
            station: Station::default(),
            date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        };

        assert_eq!(
            client.url_for(&request),
            "http://www.data.jma.go.jp/obd/stats/etrn/view/hourly_s1.php?prec_no=91&block_no=47936&year=2023&month=1&day=2&view=p1"
        );
        Ok(())
    }
}
