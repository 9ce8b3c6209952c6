// Recording stand-in for the browser panorama viewer, shared by host-side tests.

#![allow(dead_code)]

use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use tour_core::{
    ContentType, MarkerStyle, OrbitControls, PanoramaViewer, Position, SceneRecord, SpotAction,
    SpotContent, SpotRecord, SpotType, ViewerError,
};

#[derive(Clone, Debug, PartialEq)]
pub struct PanoNode {
    pub scene_id: String,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerNode {
    pub style: MarkerStyle,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    pub min_polar: Option<f32>,
    pub max_polar: Option<f32>,
    pub zoom_enabled: bool,
    pub updates: usize,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            min_polar: None,
            max_polar: None,
            zoom_enabled: true,
            updates: 0,
        }
    }
}

pub struct SharedControls(pub Rc<RefCell<ControlState>>);

impl OrbitControls for SharedControls {
    fn set_polar_range(&mut self, min: f32, max: f32) {
        let mut s = self.0.borrow_mut();
        s.min_polar = Some(min);
        s.max_polar = Some(max);
    }

    fn set_zoom_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().zoom_enabled = enabled;
    }

    fn update(&mut self) {
        self.0.borrow_mut().updates += 1;
    }
}

#[derive(Default)]
pub struct RecordingViewer {
    pub created: Vec<PanoNode>,
    pub added: Vec<PanoNode>,
    pub markers: Vec<MarkerNode>,
    /// (marker index, action)
    pub actions: Vec<(usize, SpotAction<PanoNode>)>,
    /// (parent scene id, marker index)
    pub attached: Vec<(String, usize)>,
    pub controls: Option<Rc<RefCell<ControlState>>>,
}

impl RecordingViewer {
    pub fn with_controls() -> Self {
        Self {
            controls: Some(Rc::new(RefCell::new(ControlState::default()))),
            ..Default::default()
        }
    }

    pub fn markers_on(&self, scene_id: &str) -> Vec<usize> {
        self.attached
            .iter()
            .filter(|(parent, _)| parent == scene_id)
            .map(|(_, m)| *m)
            .collect()
    }

    pub fn action_for(&self, marker: usize) -> Option<&SpotAction<PanoNode>> {
        self.actions
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, a)| a)
    }
}

impl PanoramaViewer for RecordingViewer {
    type Panorama = PanoNode;
    type Marker = usize;
    type Controls = SharedControls;

    fn create_panorama(&mut self, id: &str, src: &str) -> Result<PanoNode, ViewerError> {
        let node = PanoNode {
            scene_id: id.to_string(),
            src: src.to_string(),
        };
        self.created.push(node.clone());
        Ok(node)
    }

    fn add_panorama(&mut self, panorama: &PanoNode) {
        self.added.push(panorama.clone());
    }

    fn create_marker(&mut self, style: &MarkerStyle, position: Vec3) -> usize {
        self.markers.push(MarkerNode {
            style: style.clone(),
            position,
        });
        self.markers.len() - 1
    }

    fn bind_action(&mut self, marker: &usize, action: SpotAction<PanoNode>) {
        self.actions.push((*marker, action));
    }

    fn attach_marker(&mut self, parent: &PanoNode, marker: usize) {
        self.attached.push((parent.scene_id.clone(), marker));
    }

    fn controls(&self) -> Option<SharedControls> {
        self.controls.clone().map(SharedControls)
    }
}

// ---------------- Record builders ----------------

pub fn scene(id: &str, spots: Vec<SpotRecord>) -> SceneRecord {
    SceneRecord {
        id: id.to_string(),
        src: format!("/img/{id}.jpg"),
        spots,
    }
}

pub fn hotspot(pos: [f64; 3], target: &str) -> SpotRecord {
    SpotRecord {
        kind: Some(SpotType::Hotspot),
        position: Some(Position::new(pos[0], pos[1], pos[2])),
        target: Some(target.to_string()),
        ..Default::default()
    }
}

pub fn infospot(pos: [f64; 3], content_type: &str, content: &str) -> SpotRecord {
    SpotRecord {
        kind: Some(SpotType::Infospot),
        position: Some(Position::new(pos[0], pos[1], pos[2])),
        content_type: Some(ContentType::from(content_type)),
        content: Some(SpotContent::Single(content.to_string())),
        ..Default::default()
    }
}
