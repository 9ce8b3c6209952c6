use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

// Shared tour constants used by the web frontend, the server and the migration tool.

// Coordinates
pub const POSITION_SCALE: f32 = 100.0; // authoring units -> viewer world units

// Marker defaults (one canonical value for store, migration and builder)
pub const DEFAULT_SPOT_SIZE: f32 = 50.0;
pub const DEFAULT_SPOT_ICON: &str = "/icons/default.png";

// Camera
pub const POLAR_CENTER: f32 = FRAC_PI_2; // horizon
pub const POLAR_HALF_WIDTH: f32 = FRAC_PI_6; // ~30 degrees either side

// Overlay
pub const OVERLAY_CLASS: &str = "info-box";
pub const OVERLAY_CLOSE_CLASS: &str = "info-box-close";
pub const OVERLAY_DEFAULT_TITLE: &str = "Information";
pub const OVERLAY_Z_INDEX: u32 = 1000;
pub const UNSUPPORTED_CONTENT_HTML: &str = "<p>Unsupported content type</p>";
