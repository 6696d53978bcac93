//! Terminal surface adapters

pub mod image_render;
pub mod picker;
pub mod popup;
pub mod surface;

pub use surface::ConsoleSurface;
