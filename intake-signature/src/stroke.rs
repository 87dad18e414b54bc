//! Stroke geometry types.

use serde::{Deserialize, Serialize};

/// A single sampled pen position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
    /// Normalized pen pressure in `0.0..=1.0`, when the capture surface
    /// reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>,
}

impl StrokePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }
}

/// A contiguous pen-down stroke.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
    /// Base pen width in pixels; the renderer default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

/// A full signature capture: canvas dimensions plus stroke groups.
///
/// The capture-time pen color is deliberately not modeled. Rendering
/// always uses the fixed output color, so the color a kiosk or themed
/// page drew with never leaks into the stored image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureCapture {
    pub width: u32,
    pub height: u32,
    pub strokes: Vec<Stroke>,
}

impl SignatureCapture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
        }
    }

    /// True when no stroke carries a single point. Callers must reject
    /// empty captures before starting the submission pipeline.
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.points.is_empty())
    }
}
