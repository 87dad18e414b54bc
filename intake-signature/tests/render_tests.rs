use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use intake_signature::{render_normalized, SignatureCapture, Stroke, StrokePoint};

fn line_capture() -> SignatureCapture {
    let mut capture = SignatureCapture::new(40, 20);
    capture.strokes.push(Stroke {
        points: vec![StrokePoint::new(5.0, 10.0), StrokePoint::new(30.0, 10.0)],
        width: None,
    });
    capture
}

fn decode_png(image: &intake_signature::SignatureImage) -> image::RgbaImage {
    let png = image.to_png().unwrap();
    image::load_from_memory(&png).unwrap().to_rgba8()
}

#[test]
fn capture_without_strokes_is_empty() {
    assert!(SignatureCapture::new(100, 50).is_empty());
}

#[test]
fn capture_with_pointless_strokes_is_empty() {
    let mut capture = SignatureCapture::new(100, 50);
    capture.strokes.push(Stroke::default());
    capture.strokes.push(Stroke::default());
    assert!(capture.is_empty());
}

#[test]
fn single_point_is_not_empty() {
    let mut capture = SignatureCapture::new(100, 50);
    capture.strokes.push(Stroke {
        points: vec![StrokePoint::new(10.0, 10.0)],
        width: None,
    });
    assert!(!capture.is_empty());
}

#[test]
fn zero_dimension_canvas_rejected() {
    let capture = SignatureCapture::new(0, 50);
    assert!(render_normalized(&capture).is_err());

    let capture = SignatureCapture::new(100, 0);
    assert!(render_normalized(&capture).is_err());
}

#[test]
fn render_preserves_canvas_dimensions() {
    let rendered = render_normalized(&line_capture()).unwrap();
    assert_eq!(rendered.width(), 40);
    assert_eq!(rendered.height(), 20);

    let decoded = decode_png(&rendered);
    assert_eq!(decoded.width(), 40);
    assert_eq!(decoded.height(), 20);
}

#[test]
fn stroke_is_opaque_black_on_transparent_background() {
    let decoded = decode_png(&render_normalized(&line_capture()).unwrap());

    // On the stroke path: opaque black
    assert_eq!(decoded.get_pixel(10, 10).0, [0, 0, 0, 255]);

    // Away from the stroke: fully transparent
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    assert_eq!(decoded.get_pixel(39, 19).0[3], 0);

    // Every painted pixel is the fixed pen color, regardless of how the
    // capture surface drew it
    for pixel in decoded.pixels() {
        if pixel.0[3] != 0 {
            assert_eq!(pixel.0, [0, 0, 0, 255]);
        }
    }
}

#[test]
fn empty_capture_renders_fully_transparent() {
    let decoded = decode_png(&render_normalized(&SignatureCapture::new(10, 10)).unwrap());
    assert!(decoded.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn pressure_scales_pen_radius() {
    let ink = |pressure: f32| {
        let mut capture = SignatureCapture::new(50, 50);
        capture.strokes.push(Stroke {
            points: vec![StrokePoint {
                x: 25.0,
                y: 25.0,
                pressure: Some(pressure),
            }],
            width: Some(10.0),
        });
        let decoded = decode_png(&render_normalized(&capture).unwrap());
        decoded.pixels().filter(|p| p.0[3] != 0).count()
    };

    assert!(ink(1.0) > ink(0.2));
}

#[test]
fn data_url_has_png_prefix_and_decodes() {
    let rendered = render_normalized(&line_capture()).unwrap();
    let url = rendered.to_png_data_url().unwrap();

    let payload = url.strip_prefix("data:image/png;base64,").unwrap();
    let png = BASE64.decode(payload).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 40);
    assert_eq!(decoded.height(), 20);
}

#[test]
fn capture_serde_roundtrip() {
    let capture = line_capture();
    let json = serde_json::to_string(&capture).unwrap();

    // Absent pressure and width stay off the wire
    assert!(!json.contains("pressure"));
    assert!(!json.contains("width\":null"));

    let back: SignatureCapture = serde_json::from_str(&json).unwrap();
    assert_eq!(back, capture);
}
