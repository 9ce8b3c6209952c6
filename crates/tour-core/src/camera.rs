use crate::constants::{POLAR_CENTER, POLAR_HALF_WIDTH};
use crate::viewer::{OrbitControls, PanoramaViewer};

/// Orbit limits applied to the viewer camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraLimits {
    pub min_polar: f32,
    pub max_polar: f32,
    pub zoom_enabled: bool,
}

impl CameraLimits {
    /// Look angle held within a band around the horizon, zoom off.
    pub const FIXED: Self = Self {
        min_polar: POLAR_CENTER - POLAR_HALF_WIDTH,
        max_polar: POLAR_CENTER + POLAR_HALF_WIDTH,
        zoom_enabled: false,
    };

    pub fn apply(&self, controls: &mut impl OrbitControls) {
        controls.set_polar_range(self.min_polar, self.max_polar);
        controls.set_zoom_enabled(self.zoom_enabled);
        controls.update();
    }
}

/// Apply [`CameraLimits::FIXED`]. Returns `None` without touching anything
/// when the viewer exposes no controls.
pub fn apply_fixed_limits<V: PanoramaViewer>(viewer: &V) -> Option<CameraLimits> {
    let Some(mut controls) = viewer.controls() else {
        log::error!("[camera] camera controls not accessible");
        return None;
    };
    let limits = CameraLimits::FIXED;
    limits.apply(&mut controls);
    Some(limits)
}
