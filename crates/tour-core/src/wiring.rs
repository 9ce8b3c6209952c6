//! Hotspot wiring: turns spots into markers with click actions.

use crate::model::{Scene, Spot, SpotType};
use crate::overlay::OverlayContent;
use crate::panorama::PanoramaIndex;
use crate::viewer::{PanoramaViewer, SpotAction};
use glam::Vec3;
use thiserror::Error;

/// Reason a spot produced no marker.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpotIssue {
    #[error("spot data is incomplete: missing position")]
    MissingPosition,
    #[error("spot data is incomplete: missing type")]
    MissingType,
    #[error("unsupported spot type \"{0}\"")]
    UnsupportedType(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSpot {
    pub scene_id: String,
    pub index: usize,
    pub issue: SpotIssue,
}

/// What wiring did, for callers that want more than log lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WiringReport {
    /// Markers attached to a panorama (navigable + informational + inert).
    pub attached: usize,
    pub navigable: usize,
    pub informational: usize,
    /// Hotspots attached without an action because their target is unknown.
    pub inert: usize,
    pub skipped: Vec<SkippedSpot>,
    pub missing_scenes: Vec<String>,
}

enum SpotKind<'a> {
    Hotspot { target: Option<&'a str> },
    Infospot,
}

fn classify(spot: &Spot) -> Result<(Vec3, SpotKind<'_>), SpotIssue> {
    let position = spot.position.ok_or(SpotIssue::MissingPosition)?;
    let kind = match spot.kind.as_ref().ok_or(SpotIssue::MissingType)? {
        SpotType::Hotspot => SpotKind::Hotspot {
            target: spot.target.as_deref(),
        },
        SpotType::Infospot => SpotKind::Infospot,
        SpotType::Other(t) => return Err(SpotIssue::UnsupportedType(t.clone())),
    };
    Ok((position, kind))
}

/// Create, bind and attach a marker for every valid spot of every scene.
///
/// Never aborts: a scene without a panorama, an invalid spot or a dangling
/// hotspot target is logged and only that piece loses its interactivity.
pub fn wire_hotspots<V: PanoramaViewer>(
    scenes: &[Scene],
    index: &PanoramaIndex<V::Panorama>,
    viewer: &mut V,
) -> WiringReport {
    let mut report = WiringReport::default();

    for scene in scenes {
        let Some(parent) = index.get(&scene.id).cloned() else {
            log::error!("[wiring] panorama for scene \"{}\" not found", scene.id);
            report.missing_scenes.push(scene.id.clone());
            continue;
        };

        for (i, spot) in scene.spots.iter().enumerate() {
            let (position, kind) = match classify(spot) {
                Ok(c) => c,
                Err(issue) => {
                    log::error!("[wiring] scene \"{}\" spot #{i}: {issue}", scene.id);
                    report.skipped.push(SkippedSpot {
                        scene_id: scene.id.clone(),
                        index: i,
                        issue,
                    });
                    continue;
                }
            };

            let marker = viewer.create_marker(&spot.marker_style(), position);
            match kind {
                SpotKind::Hotspot { target } => {
                    match target.and_then(|t| index.get(t).map(|p| (t, p.clone()))) {
                        Some((target_id, panorama)) => {
                            viewer.bind_action(
                                &marker,
                                SpotAction::Navigate {
                                    target_id: target_id.to_string(),
                                    panorama,
                                },
                            );
                            report.navigable += 1;
                        }
                        None => {
                            log::error!(
                                "[wiring] target panorama \"{}\" not found for hotspot #{i} in scene \"{}\"",
                                target.unwrap_or("<none>"),
                                scene.id
                            );
                            report.inert += 1;
                        }
                    }
                }
                SpotKind::Infospot => {
                    viewer.bind_action(&marker, SpotAction::ShowInfo(OverlayContent::from_spot(spot)));
                    report.informational += 1;
                }
            }
            viewer.attach_marker(&parent, marker);
            report.attached += 1;
        }
    }

    log::debug!(
        "[wiring] attached={} navigable={} info={} inert={} skipped={}",
        report.attached,
        report.navigable,
        report.informational,
        report.inert,
        report.skipped.len()
    );
    report
}
