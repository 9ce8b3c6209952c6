use crate::constants::CLICK_EVENT;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// CSS pixel size of the browser viewport.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}
