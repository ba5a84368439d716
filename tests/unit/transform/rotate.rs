use super::*;
use crate::foundation::core::Rgba8;

fn marked(w: u32, h: u32) -> PixelBuffer {
    let mut b = PixelBuffer::filled(w, h, Rgba8::rgb(10, 10, 10));
    b.set_pixel(0, 0, [255, 0, 0, 255]);
    b
}

#[test]
fn normalize_wraps_into_range() {
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(720.0), 0.0);
    assert_eq!(normalize_degrees(450.0), 90.0);
    assert!(normalize_degrees(-1e-20) < 360.0);
}

#[test]
fn quarter_turn_detection() {
    assert_eq!(quarter_turns(0.0), Some(0));
    assert_eq!(quarter_turns(90.0), Some(1));
    assert_eq!(quarter_turns(-90.0), Some(3));
    assert_eq!(quarter_turns(450.0), Some(1));
    assert_eq!(quarter_turns(45.0), None);
}

#[test]
fn quarter_turn_swaps_dimensions_losslessly() {
    let src = marked(3, 2);
    let out = rotate(&src, 90.0);
    assert_eq!((out.width(), out.height()), (2, 3));
    assert_eq!(out.pixel(1, 0), Some([255, 0, 0, 255]));

    let back = rotate(&out, -90.0);
    assert_eq!(back, src);
}

#[test]
fn four_quarter_turns_are_identity() {
    let src = marked(5, 3);
    let mut b = src.clone();
    for _ in 0..4 {
        b = rotate(&b, 90.0);
    }
    assert_eq!(b, src);
}

#[test]
fn arbitrary_angle_keeps_canvas_and_fits_content() {
    let src = PixelBuffer::filled(20, 20, Rgba8::rgb(0, 200, 0));
    let out = rotate(&src, 45.0);

    assert_eq!((out.width(), out.height()), (20, 20));
    assert_eq!(out.pixel(10, 10), Some([0, 200, 0, 255]));
    assert_eq!(out.pixel(0, 0).map(|p| p[3]), Some(0));
    assert_eq!(out.pixel(19, 19).map(|p| p[3]), Some(0));
}

#[test]
fn arbitrary_angle_uses_content_bounds() {
    // Small opaque patch in a large canvas fits without shrinking.
    let mut src = PixelBuffer::new(40, 40);
    for y in 18..22 {
        for x in 10..30 {
            src.set_pixel(x, y, [50, 60, 70, 255]);
        }
    }
    let out = rotate(&src, 30.0);
    let bounds = out.opaque_bounds().unwrap();
    let (bw, bh) = rotated_bounds(20.0, 4.0, 30f64.to_radians());
    assert!((f64::from(bounds.width) - bw).abs() <= 3.5, "{bounds:?} vs {bw}");
    assert!((f64::from(bounds.height) - bh).abs() <= 3.5, "{bounds:?} vs {bh}");
}

#[test]
fn transparent_buffer_stays_transparent() {
    let src = PixelBuffer::new(8, 6);
    assert_eq!(rotate(&src, 30.0).opaque_bounds(), None);
}
