//! Tour-level consistency checks: unique scene ids and resolvable hotspot targets.

use crate::model::{Scene, SceneRecord, SpotType};
use fnv::FnvHashSet;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TourIssue {
    #[error("scene id \"{0}\" is used more than once")]
    DuplicateSceneId(String),
    #[error("scene \"{0}\" has no image source")]
    EmptySource(String),
    #[error("hotspot #{spot_index} in scene \"{scene_id}\" targets unknown scene \"{target}\"")]
    DanglingTarget {
        scene_id: String,
        spot_index: usize,
        target: String,
    },
    #[error("hotspot #{spot_index} in scene \"{scene_id}\" has no target")]
    MissingTarget { scene_id: String, spot_index: usize },
}

pub fn validate_tour(scenes: &[Scene]) -> Vec<TourIssue> {
    check(scenes.iter().map(|s| {
        (
            s.id.as_str(),
            s.src.trim().is_empty(),
            s.spots
                .iter()
                .map(|sp| (sp.kind.as_ref(), sp.target.as_deref()))
                .collect(),
        )
    }))
}

pub fn validate_records(records: &[SceneRecord]) -> Vec<TourIssue> {
    check(records.iter().map(|s| {
        (
            s.id.as_str(),
            s.src.trim().is_empty(),
            s.spots
                .iter()
                .map(|sp| (sp.kind.as_ref(), sp.target.as_deref()))
                .collect(),
        )
    }))
}

type SpotRefs<'a> = Vec<(Option<&'a SpotType>, Option<&'a str>)>;

/// Scene id, whether its source is empty, and its spots.
type SceneRefs<'a> = (&'a str, bool, SpotRefs<'a>);

fn check<'a>(scenes: impl Iterator<Item = SceneRefs<'a>> + Clone) -> Vec<TourIssue> {
    let mut issues = Vec::new();
    let mut ids = FnvHashSet::default();
    // Scenes without a source never get a panorama, so they cannot be targets.
    let mut targets = FnvHashSet::default();
    for (id, empty_src, _) in scenes.clone() {
        if !ids.insert(id) {
            issues.push(TourIssue::DuplicateSceneId(id.to_string()));
        }
        if empty_src {
            issues.push(TourIssue::EmptySource(id.to_string()));
        } else {
            targets.insert(id);
        }
    }

    for (scene_id, _, spots) in scenes {
        for (spot_index, (kind, target)) in spots.into_iter().enumerate() {
            if kind != Some(&SpotType::Hotspot) {
                continue;
            }
            match target {
                None => issues.push(TourIssue::MissingTarget {
                    scene_id: scene_id.to_string(),
                    spot_index,
                }),
                Some(t) if !targets.contains(t) => issues.push(TourIssue::DanglingTarget {
                    scene_id: scene_id.to_string(),
                    spot_index,
                    target: t.to_string(),
                }),
                Some(_) => {}
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpotRecord;

    fn hotspot(target: Option<&str>) -> SpotRecord {
        SpotRecord {
            kind: Some(SpotType::Hotspot),
            target: target.map(str::to_string),
            ..Default::default()
        }
    }

    fn scene(id: &str, spots: Vec<SpotRecord>) -> SceneRecord {
        SceneRecord {
            id: id.into(),
            src: format!("/img/{id}.jpg"),
            spots,
        }
    }

    #[test]
    fn consistent_tour_has_no_issues() {
        let records = vec![
            scene("hall", vec![hotspot(Some("garden"))]),
            scene("garden", vec![hotspot(Some("hall"))]),
        ];
        assert!(validate_records(&records).is_empty());
    }

    #[test]
    fn reports_duplicates_and_dangling_targets() {
        let records = vec![
            scene("hall", vec![hotspot(Some("attic")), hotspot(None)]),
            scene("hall", vec![]),
        ];
        let issues = validate_records(&records);
        assert!(issues.contains(&TourIssue::DuplicateSceneId("hall".into())));
        assert!(issues.contains(&TourIssue::DanglingTarget {
            scene_id: "hall".into(),
            spot_index: 0,
            target: "attic".into(),
        }));
        assert!(issues.contains(&TourIssue::MissingTarget {
            scene_id: "hall".into(),
            spot_index: 1,
        }));
    }

    #[test]
    fn scene_without_source_is_not_a_target() {
        let mut blank = scene("attic", vec![]);
        blank.src = "  ".into();
        let issues = validate_records(&[scene("hall", vec![hotspot(Some("attic"))]), blank]);
        assert_eq!(
            issues,
            vec![
                TourIssue::EmptySource("attic".into()),
                TourIssue::DanglingTarget {
                    scene_id: "hall".into(),
                    spot_index: 0,
                    target: "attic".into(),
                },
            ]
        );
    }

    #[test]
    fn infospots_are_not_checked_for_targets() {
        let info = SpotRecord {
            kind: Some(SpotType::Infospot),
            ..Default::default()
        };
        assert!(validate_records(&[scene("hall", vec![info])]).is_empty());
    }
}
