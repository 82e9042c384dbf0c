/// Date format shared by arguments, CSV files and the database
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// JMA hourly observation page (view=p1 is the ground station table)
pub const DEFAULT_BASE_URL: &str = "http://www.data.jma.go.jp/obd/stats/etrn/view/hourly_s1.php";
pub const VIEW_MODE: &str = "p1";

/// File names
pub const DEFAULT_CSV_FILE: &str = "hourly_s1.csv";
pub const DEFAULT_DB_FILE: &str = "WeatherInfo.sqlite";

/// Default station (Naha, Okinawa)
pub const DEFAULT_REGION_ID: u32 = 91;
pub const DEFAULT_STATION_ID: u32 = 47936;

/// Request pacing and timeouts, in seconds
pub const DEFAULT_WAIT_SECS: f64 = 0.5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: f64 = 1.0;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 1.0;

/// Hourly table layout
pub const HOURLY_TABLE_ROWS: &str = "table#tablefix1 tr";
pub const HEADER_ROW_COUNT: usize = 2;

/// Cell values JMA uses for "no data" or "phenomenon absent"
pub const PLACEHOLDER_VALUES: &[&str] = &["", "--", "---", "///", "×", "#"];

/// Quality markers that trail a value (quasi-normal and incomplete)
pub const QUALITY_MARKERS: &[char] = &[')', ']'];

/// Environment prefix for configuration overrides (JMA_WAIT_TIME_SECS etc.)
pub const ENV_PREFIX: &str = "JMA";
