use crate::camera;
use crate::dom;
use crate::panolens;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use tour_core::{
    overlay_style, project_to_screen, render_overlay_html, OverlayContent, OVERLAY_CLASS,
    OVERLAY_CLOSE_CLASS,
};
use web_sys as web;

/// The session's single info overlay element, created on first use.
///
/// Clones share the same element. Closing removes the element from the
/// document and forgets it, so the next `show` builds a fresh one.
#[derive(Clone, Default)]
pub struct OverlayHandle {
    element: Rc<RefCell<Option<web::Element>>>,
}

impl OverlayHandle {
    pub fn show(
        &self,
        marker: &panolens::Object3D,
        viewer: &panolens::Viewer,
        content: &OverlayContent,
    ) {
        let Some(document) = dom::window_document() else {
            log::error!("[overlay] no document");
            return;
        };
        let Some(el) = self.get_or_create(&document) else {
            log::error!("[overlay] could not create overlay element");
            return;
        };

        el.set_inner_html(&render_overlay_html(content));

        let world = marker.get_world_position(&panolens::Vector3::new(0.0, 0.0, 0.0));
        let screen = project_to_screen(
            Vec3::new(world.x(), world.y(), world.z()),
            camera::view_projection(viewer),
            dom::viewport_size(),
        );
        _ = el.set_attribute("style", &overlay_style(screen));

        self.wire_close(&el);
    }

    pub fn close(&self) {
        if let Some(el) = self.element.borrow_mut().take() {
            el.remove();
        }
    }

    fn get_or_create(&self, document: &web::Document) -> Option<web::Element> {
        if let Some(el) = self.element.borrow().as_ref() {
            if el.is_connected() {
                return Some(el.clone());
            }
        }
        let el = document.create_element("div").ok()?;
        el.set_class_name(OVERLAY_CLASS);
        document.body()?.append_child(&el).ok()?;
        *self.element.borrow_mut() = Some(el.clone());
        Some(el)
    }

    // The header is rebuilt on every show, so the close button is always new.
    fn wire_close(&self, el: &web::Element) {
        let selector = format!(".{OVERLAY_CLOSE_CLASS}");
        if let Ok(Some(button)) = el.query_selector(&selector) {
            let handle = self.clone();
            dom::add_click_listener(&button, move || handle.close());
        }
    }
}
