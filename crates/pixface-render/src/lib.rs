//! Rendering for the pixface watch face.
//!
//! The face is drawn into a pixel [`Canvas`] by [`render_face`] and shown in
//! the terminal by [`FaceWidget`], two pixels per cell. [`FaceState`] keeps the
//! canvas sized to the drawing area between frames.

mod canvas;
mod color;
mod face;
mod geometry;
mod state;
mod widget;

pub use canvas::Canvas;
pub use color::{Palette, dim, hsl_to_rgb};
pub use face::{FaceOptions, hour_walker, minute_walker, render_face, second_runner};
pub use geometry::{FaceGeometry, Placement};
pub use state::FaceState;
pub use widget::FaceWidget;
