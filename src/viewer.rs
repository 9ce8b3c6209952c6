use crate::camera::ControlsHandle;
use crate::constants::{CLICK_EVENT, VIEWER_AUTO_ROTATE, VIEWER_CONTROL_BAR, VIEWER_OUTPUT};
use crate::overlay::OverlayHandle;
use crate::panolens;
use glam::Vec3;
use tour_core::{MarkerStyle, PanoramaViewer, SpotAction, ViewerError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One viewer session: the PANOLENS viewer plus the overlay it owns.
pub struct PanolensViewer {
    viewer: panolens::Viewer,
    overlay: OverlayHandle,
}

fn viewer_options(container: &web::Element) -> Result<js_sys::Object, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"container".into(), container)?;
    js_sys::Reflect::set(&options, &"controlBar".into(), &VIEWER_CONTROL_BAR.into())?;
    js_sys::Reflect::set(&options, &"autoRotate".into(), &VIEWER_AUTO_ROTATE.into())?;
    js_sys::Reflect::set(&options, &"output".into(), &VIEWER_OUTPUT.into())?;
    Ok(options)
}

impl PanolensViewer {
    pub fn new(container: &web::Element) -> anyhow::Result<Self> {
        let options = viewer_options(container).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let viewer =
            panolens::Viewer::new(&options).map_err(|e| anyhow::anyhow!("viewer: {:?}", e))?;
        Ok(Self {
            viewer,
            overlay: OverlayHandle::default(),
        })
    }
}

impl PanoramaViewer for PanolensViewer {
    type Panorama = panolens::ImagePanorama;
    type Marker = panolens::Infospot;
    type Controls = ControlsHandle;

    fn create_panorama(&mut self, id: &str, src: &str) -> Result<Self::Panorama, ViewerError> {
        panolens::ImagePanorama::new(src).map_err(|e| ViewerError::Rejected {
            id: id.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn add_panorama(&mut self, panorama: &Self::Panorama) {
        self.viewer.add(panorama);
    }

    fn create_marker(&mut self, style: &MarkerStyle, position: Vec3) -> Self::Marker {
        let marker = panolens::Infospot::new(style.size, &style.icon);
        marker.position().set(position.x, position.y, position.z);
        marker
    }

    fn bind_action(&mut self, marker: &Self::Marker, action: SpotAction<Self::Panorama>) {
        let viewer = self.viewer.clone();
        let handler: Box<dyn FnMut()> = match action {
            SpotAction::Navigate {
                target_id,
                panorama,
            } => Box::new(move || {
                log::info!("[hotspot] entering scene \"{}\"", target_id);
                viewer.set_panorama(&panorama);
            }),
            SpotAction::ShowInfo(content) => {
                let overlay = self.overlay.clone();
                let anchor = marker.clone();
                Box::new(move || overlay.show(&anchor, &viewer, &content))
            }
        };
        let closure = Closure::wrap(handler);
        marker.add_event_listener(CLICK_EVENT, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn attach_marker(&mut self, parent: &Self::Panorama, marker: Self::Marker) {
        parent.add(&marker);
    }

    fn controls(&self) -> Option<Self::Controls> {
        self.viewer.get_control().map(ControlsHandle)
    }
}
