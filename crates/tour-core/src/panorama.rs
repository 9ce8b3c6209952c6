use crate::error::ViewerError;
use crate::model::Scene;
use crate::viewer::PanoramaViewer;
use fnv::FnvHashMap;

/// Viewer node for one scene, keyed by scene id.
#[derive(Clone, Debug)]
pub struct Panorama<P> {
    pub id: String,
    pub node: P,
}

/// Map every scene to a viewer panorama, preserving input order.
///
/// A scene whose image source is empty cannot become a panorama; it is logged
/// and left out. Nothing else is validated here.
pub fn build_panoramas<V: PanoramaViewer>(
    scenes: &[Scene],
    viewer: &mut V,
) -> Vec<Panorama<V::Panorama>> {
    scenes
        .iter()
        .filter_map(|scene| {
            let created = if scene.src.trim().is_empty() {
                Err(ViewerError::EmptySource(scene.id.clone()))
            } else {
                viewer.create_panorama(&scene.id, &scene.src)
            };
            match created {
                Ok(node) => Some(Panorama {
                    id: scene.id.clone(),
                    node,
                }),
                Err(e) => {
                    log::error!("[panorama] {e}");
                    None
                }
            }
        })
        .collect()
}

/// Id-indexed view over built panoramas.
#[derive(Clone, Debug)]
pub struct PanoramaIndex<P> {
    by_id: FnvHashMap<String, P>,
}

impl<P: Clone> PanoramaIndex<P> {
    /// Duplicate ids keep the first panorama.
    pub fn build(panoramas: &[Panorama<P>]) -> Self {
        let mut by_id = FnvHashMap::default();
        by_id.reserve(panoramas.len());
        for p in panoramas {
            if by_id.contains_key(&p.id) {
                log::warn!("[panorama] duplicate scene id \"{}\"; keeping the first", p.id);
                continue;
            }
            by_id.insert(p.id.clone(), p.node.clone());
        }
        Self { by_id }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&P> {
        self.by_id.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
