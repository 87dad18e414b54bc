//! Signature capture normalization.
//!
//! A handwritten signature arrives as stroke geometry: point sequences
//! with optional pressure, grouped per pen-down stroke. Whatever pen
//! color the capture surface used, the stored signature is re-rendered
//! in opaque black on a fully transparent canvas and encoded as a PNG
//! data URL. The image travels in cleartext alongside the encrypted
//! record, ready for document embedding.

mod error;
mod render;
mod stroke;

pub use error::{SignatureError, SignatureResult};
pub use render::{render_normalized, SignatureImage, PEN_COLOR};
pub use stroke::{SignatureCapture, Stroke, StrokePoint};
