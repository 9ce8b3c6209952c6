//! Capability seam to the panorama viewer library.
//!
//! The viewer is anything that can turn an image into a navigable panorama
//! node and place clickable markers on it. The browser build implements these
//! traits over the JS library; tests implement them with a recorder.

use crate::error::ViewerError;
use crate::model::MarkerStyle;
use crate::overlay::OverlayContent;
use glam::Vec3;

/// What a marker does when activated.
#[derive(Clone, Debug, PartialEq)]
pub enum SpotAction<P> {
    /// Switch the active panorama.
    Navigate { target_id: String, panorama: P },
    /// Show the info overlay next to the marker.
    ShowInfo(OverlayContent),
}

pub trait PanoramaViewer {
    type Panorama: Clone;
    type Marker;
    type Controls: OrbitControls;

    fn create_panorama(&mut self, id: &str, src: &str) -> Result<Self::Panorama, ViewerError>;

    /// Register a panorama so the viewer can display it.
    fn add_panorama(&mut self, panorama: &Self::Panorama);

    fn create_marker(&mut self, style: &MarkerStyle, position: Vec3) -> Self::Marker;

    fn bind_action(&mut self, marker: &Self::Marker, action: SpotAction<Self::Panorama>);

    fn attach_marker(&mut self, parent: &Self::Panorama, marker: Self::Marker);

    /// Orbit controls of the active camera, if the viewer exposes them.
    fn controls(&self) -> Option<Self::Controls>;
}

pub trait OrbitControls {
    fn set_polar_range(&mut self, min: f32, max: f32);
    fn set_zoom_enabled(&mut self, enabled: bool);
    fn update(&mut self);
}
