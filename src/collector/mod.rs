#[allow(clippy::module_inception)]
pub mod collector;
pub mod date_range;
pub mod source;

pub use collector::{CollectReport, Collector};
pub use date_range::{parse_date, DateRange};
pub use source::{DayRequest, JmaClient, PageSource};
