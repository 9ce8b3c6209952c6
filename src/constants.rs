/// Front-end wiring constants.
///
/// Element ids, attribute names and fetch defaults used while bootstrapping
/// the viewer. Tour-wide tuning (scale, marker defaults, camera band) lives in
/// `tour_core::constants`.
// Viewer container element and its optional configuration attributes
pub const CONTAINER_ID: &str = "container";
pub const API_URL_ATTR: &str = "data-api-url";
pub const FETCH_TIMEOUT_ATTR: &str = "data-fetch-timeout-ms";

// Scene endpoint
pub const DEFAULT_API_URL: &str = "/api/data";
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 15_000;
pub const MIN_FETCH_TIMEOUT_MS: u32 = 100;

// Viewer options
pub const VIEWER_CONTROL_BAR: bool = true;
pub const VIEWER_AUTO_ROTATE: bool = false;
pub const VIEWER_OUTPUT: &str = "console";

// Event that activates a marker or the overlay close button
pub const CLICK_EVENT: &str = "click";
