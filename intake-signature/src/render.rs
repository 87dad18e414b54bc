//! Fixed-color re-rendering of stroke geometry.

use crate::error::{SignatureError, SignatureResult};
use crate::stroke::{SignatureCapture, Stroke};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Output pen color: opaque black.
pub const PEN_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Pen width in pixels when a stroke does not carry its own.
const DEFAULT_STROKE_WIDTH: f32 = 2.5;

/// A rendered signature raster (RGBA, transparent background).
pub struct SignatureImage {
    raster: RgbaImage,
}

impl SignatureImage {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Encodes the raster as a lossless PNG with alpha.
    pub fn to_png(&self) -> SignatureResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.raster
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| SignatureError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Encodes the raster as a `data:image/png;base64,` URL.
    pub fn to_png_data_url(&self) -> SignatureResult<String> {
        Ok(format!(
            "data:image/png;base64,{}",
            BASE64.encode(self.to_png()?)
        ))
    }
}

/// Re-renders a capture in the fixed pen color on a transparent canvas.
///
/// Geometry is preserved exactly: same canvas dimensions, same point
/// coordinates, same stroke grouping. Per-point pressure scales the pen
/// radius when present.
pub fn render_normalized(capture: &SignatureCapture) -> SignatureResult<SignatureImage> {
    if capture.width == 0 || capture.height == 0 {
        return Err(SignatureError::InvalidDimensions {
            width: capture.width,
            height: capture.height,
        });
    }

    // RgbaImage::new zero-fills: fully transparent background
    let mut raster = RgbaImage::new(capture.width, capture.height);

    for stroke in &capture.strokes {
        draw_stroke(&mut raster, stroke);
    }

    Ok(SignatureImage { raster })
}

fn draw_stroke(raster: &mut RgbaImage, stroke: &Stroke) {
    let base_width = stroke.width.unwrap_or(DEFAULT_STROKE_WIDTH);

    let mut points = stroke.points.iter();
    let Some(first) = points.next() else {
        return;
    };

    let mut prev = *first;
    stamp(raster, prev.x, prev.y, radius_at(base_width, prev.pressure));

    for point in points {
        // Round pen marks along the segment at sub-pixel spacing keep
        // fast strokes contiguous
        let dx = point.x - prev.x;
        let dy = point.y - prev.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let steps = distance.ceil().max(1.0) as u32;

        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let pressure = lerp_pressure(prev.pressure, point.pressure, t);
            stamp(
                raster,
                prev.x + dx * t,
                prev.y + dy * t,
                radius_at(base_width, pressure),
            );
        }

        prev = *point;
    }
}

fn radius_at(base_width: f32, pressure: Option<f32>) -> f32 {
    // Zero pressure still leaves a hairline rather than a gap
    let scale = pressure.unwrap_or(1.0).clamp(0.1, 1.0);
    (base_width * scale) / 2.0
}

fn lerp_pressure(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (a, b) => b.or(a),
    }
}

fn stamp(raster: &mut RgbaImage, cx: f32, cy: f32, radius: f32) {
    let r = radius.max(0.5);
    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).ceil() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).ceil() as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            if x < 0 || y < 0 || x >= i64::from(raster.width()) || y >= i64::from(raster.height()) {
                continue;
            }
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                raster.put_pixel(x as u32, y as u32, PEN_COLOR);
            }
        }
    }
}
