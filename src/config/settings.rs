//! Cleaner configuration settings and environment variable handling

use std::env;

// NYC bounding box. Rows outside this box are not NYC listings and are
// dropped regardless of any other field.
pub const LONGITUDE_MIN: f64 = -74.25;
pub const LONGITUDE_MAX: f64 = -73.50;
pub const LATITUDE_MIN: f64 = 40.5;
pub const LATITUDE_MAX: f64 = 41.2;

// Artifact store defaults
pub const DEFAULT_TRACKER_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the experiment tracker's artifact API
    pub tracker_base_url: String,
    /// Optional bearer token for the tracker
    pub tracker_api_key: Option<String>,
    pub http_timeout_secs: u64,
    /// Local directory for logs, downloaded data and reports
    pub output_dir: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            tracker_base_url: env::var("TRACKER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRACKER_BASE_URL.to_string()),
            tracker_api_key: env::var("TRACKER_API_KEY").ok(),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
        }
    }
}
