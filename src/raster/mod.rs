//! Raster canvas and PNG encoding.
//!
//! The canvas is a single owned pixel buffer; drawing primitives take it
//! by `&mut` and the encoder reads the final state.

pub mod canvas;
pub mod png;

// Re-export main types
pub use canvas::{Canvas, Rgb};
pub use png::{encode_png, PNG_SIGNATURE};
