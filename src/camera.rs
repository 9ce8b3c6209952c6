use crate::panolens;
use glam::Mat4;
use tour_core::OrbitControls;

/// Viewer orbit controls as seen by `tour_core::apply_fixed_limits`.
pub struct ControlsHandle(pub panolens::OrbitControls);

impl OrbitControls for ControlsHandle {
    fn set_polar_range(&mut self, min: f32, max: f32) {
        self.0.set_max_polar_angle(max as f64);
        self.0.set_min_polar_angle(min as f64);
    }

    fn set_zoom_enabled(&mut self, enabled: bool) {
        self.0.set_enable_zoom(enabled);
    }

    fn update(&mut self) {
        self.0.update();
    }
}

#[inline]
fn to_mat4(m: &panolens::Matrix4) -> Mat4 {
    let cols: Vec<f32> = m
        .elements()
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0) as f32)
        .collect();
    if cols.len() == 16 {
        Mat4::from_cols_slice(&cols)
    } else {
        log::warn!("[camera] unexpected matrix length {}", cols.len());
        Mat4::IDENTITY
    }
}

/// Current world-to-clip transform of the viewer camera.
///
/// Read fresh on every call; the camera moves between overlay displays.
pub fn view_projection(viewer: &panolens::Viewer) -> Mat4 {
    let camera = viewer.camera();
    camera.update_matrix_world();
    to_mat4(&camera.projection_matrix()) * to_mat4(&camera.matrix_world_inverse())
}
