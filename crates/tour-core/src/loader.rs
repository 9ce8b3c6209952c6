//! Scene loading and coordinate normalisation.

use crate::constants::POSITION_SCALE;
use crate::error::LoadError;
use crate::model::{Scene, SceneRecord, Spot, SpotRecord};

/// Transport that yields the persisted scene collection.
#[allow(async_fn_in_trait)]
pub trait SceneSource {
    async fn fetch_scenes(&self) -> Result<Vec<SceneRecord>, LoadError>;
}

/// Decode an `/api/data` response. Non-2xx and malformed bodies are errors.
pub fn decode_payload(status: u16, body: &str) -> Result<Vec<SceneRecord>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Fetch every scene and convert it to world units.
///
/// Fails soft: any error is logged and an empty tour is returned.
pub async fn load_tour_data<S: SceneSource>(source: &S) -> Vec<Scene> {
    match source.fetch_scenes().await {
        Ok(records) => {
            let scenes = normalize_scenes(records);
            log::info!("[loader] loaded {} scenes", scenes.len());
            scenes
        }
        Err(e) => {
            log::error!("[loader] error loading tour data: {e}");
            Vec::new()
        }
    }
}

pub fn normalize_scenes(records: Vec<SceneRecord>) -> Vec<Scene> {
    records
        .into_iter()
        .map(|r| Scene {
            id: r.id,
            src: r.src,
            spots: r.spots.into_iter().map(normalize_spot).collect(),
        })
        .collect()
}

fn normalize_spot(r: SpotRecord) -> Spot {
    Spot {
        kind: r.kind,
        position: r.position.map(|p| p.to_world(POSITION_SCALE)),
        target: r.target,
        content_type: r.content_type,
        content: r.content,
        size: r.size,
        label: r.label,
        icon: r.icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_a_load_error() {
        assert!(matches!(
            decode_payload(500, r#"{"error":"x"}"#),
            Err(LoadError::Status(500))
        ));
        assert!(matches!(decode_payload(404, ""), Err(LoadError::Status(404))));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            decode_payload(200, "<html>"),
            Err(LoadError::Decode(_))
        ));
        assert!(matches!(
            decode_payload(200, r#"{"id": "not-an-array"}"#),
            Err(LoadError::Decode(_))
        ));
    }

    #[test]
    fn missing_position_stays_missing() {
        let scenes = normalize_scenes(vec![SceneRecord {
            id: "a".into(),
            src: "/img/a.jpg".into(),
            spots: vec![SpotRecord::default()],
        }]);
        assert_eq!(scenes[0].spots[0].position, None);
    }
}
