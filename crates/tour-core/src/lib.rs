pub mod camera;
pub mod constants;
pub mod error;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod panorama;
pub mod tour;
pub mod validate;
pub mod viewer;
pub mod wiring;

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use overlay::*;
pub use panorama::*;
pub use tour::*;
pub use validate::*;
pub use viewer::*;
pub use wiring::*;
