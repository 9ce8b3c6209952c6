use crate::constants::{DEFAULT_API_URL, DEFAULT_FETCH_TIMEOUT_MS, MIN_FETCH_TIMEOUT_MS};

/// Runtime settings read from the viewer container's `data-*` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    pub api_url: String,
    pub fetch_timeout_ms: u32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl TourConfig {
    /// Blank or unparsable values fall back to the defaults; timeouts below
    /// the minimum are raised to it.
    pub fn from_attributes(api_url: Option<String>, fetch_timeout_ms: Option<String>) -> Self {
        let api_url = api_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let fetch_timeout_ms = fetch_timeout_ms
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_FETCH_TIMEOUT_MS))
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_MS);
        Self {
            api_url,
            fetch_timeout_ms,
        }
    }
}
