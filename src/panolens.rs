//! Bindings to the PANOLENS / three.js globals loaded by the host page.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = THREE)]
extern "C" {
    #[derive(Clone, Debug)]
    pub type Object3D;

    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, js_name = getWorldPosition)]
    pub fn get_world_position(this: &Object3D, target: &Vector3) -> Vector3;

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &Object3D, kind: &str, listener: &js_sys::Function);

    #[derive(Clone, Debug)]
    pub type Vector3;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, z: f32) -> Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f32, y: f32, z: f32) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Vector3) -> f32;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Vector3) -> f32;

    #[wasm_bindgen(method, getter)]
    pub fn z(this: &Vector3) -> f32;

    #[wasm_bindgen(extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type Camera;

    #[wasm_bindgen(method, js_name = updateMatrixWorld)]
    pub fn update_matrix_world(this: &Camera);

    #[wasm_bindgen(method, getter, js_name = projectionMatrix)]
    pub fn projection_matrix(this: &Camera) -> Matrix4;

    #[wasm_bindgen(method, getter, js_name = matrixWorldInverse)]
    pub fn matrix_world_inverse(this: &Camera) -> Matrix4;

    #[derive(Clone, Debug)]
    pub type Matrix4;

    /// Column-major, 16 entries.
    #[wasm_bindgen(method, getter)]
    pub fn elements(this: &Matrix4) -> js_sys::Array;
}

#[wasm_bindgen(js_namespace = PANOLENS)]
extern "C" {
    #[derive(Clone, Debug)]
    pub type Viewer;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(options: &js_sys::Object) -> Result<Viewer, JsValue>;

    #[wasm_bindgen(method)]
    pub fn add(this: &Viewer, panorama: &ImagePanorama);

    #[wasm_bindgen(method, js_name = setPanorama)]
    pub fn set_panorama(this: &Viewer, panorama: &ImagePanorama);

    #[wasm_bindgen(method, js_name = getControl)]
    pub fn get_control(this: &Viewer) -> Option<OrbitControls>;

    #[wasm_bindgen(method, getter)]
    pub fn camera(this: &Viewer) -> Camera;

    #[wasm_bindgen(extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type ImagePanorama;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(src: &str) -> Result<ImagePanorama, JsValue>;

    #[wasm_bindgen(extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type Infospot;

    #[wasm_bindgen(constructor)]
    pub fn new(scale: f32, image_src: &str) -> Infospot;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type OrbitControls;

    #[wasm_bindgen(method, setter = minPolarAngle)]
    pub fn set_min_polar_angle(this: &OrbitControls, radians: f64);

    #[wasm_bindgen(method, setter = maxPolarAngle)]
    pub fn set_max_polar_angle(this: &OrbitControls, radians: f64);

    #[wasm_bindgen(method, setter = enableZoom)]
    pub fn set_enable_zoom(this: &OrbitControls, enabled: bool);

    #[wasm_bindgen(method)]
    pub fn update(this: &OrbitControls);
}
