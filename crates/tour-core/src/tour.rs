use crate::camera::{apply_fixed_limits, CameraLimits};
use crate::model::Scene;
use crate::panorama::{build_panoramas, PanoramaIndex};
use crate::validate::{validate_tour, TourIssue};
use crate::viewer::PanoramaViewer;
use crate::wiring::{wire_hotspots, WiringReport};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourSummary {
    pub panoramas: usize,
    pub issues: Vec<TourIssue>,
    pub wiring: WiringReport,
    pub camera: Option<CameraLimits>,
}

/// Build the viewer graph for a loaded tour.
///
/// Panoramas are registered with the viewer in scene order, so the first
/// scene is the one shown initially. An empty tour builds and wires nothing;
/// camera limits are applied either way.
pub fn start_tour<V: PanoramaViewer>(scenes: &[Scene], viewer: &mut V) -> TourSummary {
    let mut summary = TourSummary::default();

    if scenes.is_empty() {
        log::warn!("[tour] no scenes to display");
    } else {
        summary.issues = validate_tour(scenes);
        for issue in &summary.issues {
            log::warn!("[tour] {issue}");
        }

        let panoramas = build_panoramas(scenes, viewer);
        for p in &panoramas {
            viewer.add_panorama(&p.node);
        }
        summary.panoramas = panoramas.len();

        let index = PanoramaIndex::build(&panoramas);
        summary.wiring = wire_hotspots(scenes, &index, viewer);
    }

    summary.camera = apply_fixed_limits(viewer);
    log::info!(
        "[tour] ready: panoramas={} markers={}",
        summary.panoramas,
        summary.wiring.attached
    );
    summary
}
