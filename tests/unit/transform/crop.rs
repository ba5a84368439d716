use super::*;
use crate::foundation::core::Rgba8;
use proptest::prelude::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn clamp_pulls_rect_inside_canvas() {
    let c = canvas(200, 100);
    assert_eq!(
        clamp_crop_rect(-10.0, -5.0, 80.0, 60.0, c, MIN_CROP_SIZE),
        PixelRect::new(0, 0, 80, 60)
    );
    assert_eq!(
        clamp_crop_rect(190.0, 90.0, 80.0, 60.0, c, MIN_CROP_SIZE),
        PixelRect::new(120, 40, 80, 60)
    );
    assert_eq!(
        clamp_crop_rect(10.0, 10.0, 5.0, 5.0, c, MIN_CROP_SIZE),
        PixelRect::new(10, 10, 50, 50)
    );
    assert_eq!(
        clamp_crop_rect(0.0, 0.0, 999.0, 999.0, c, MIN_CROP_SIZE),
        PixelRect::new(0, 0, 200, 100)
    );
}

#[test]
fn tiny_canvas_uses_canvas_extent_as_minimum() {
    let c = canvas(30, 80);
    let r = clamp_crop_rect(5.0, 5.0, 10.0, 10.0, c, MIN_CROP_SIZE);
    assert_eq!(r, PixelRect::new(0, 5, 30, 50));
}

#[test]
fn crop_extracts_exact_size() {
    let mut b = PixelBuffer::new(100, 100);
    b.set_pixel(60, 70, [1, 2, 3, 255]);
    let out = crop(&b, PixelRect::new(50, 50, 50, 50));
    assert_eq!((out.width(), out.height()), (50, 50));
    assert_eq!(out.pixel(10, 20), Some([1, 2, 3, 255]));
}

#[test]
fn session_starts_centered_on_content() {
    let c = canvas(400, 300);
    let s = CropSession::start(c, PixelRect::new(100, 50, 200, 100), 0.8, MIN_CROP_SIZE);
    assert_eq!(s.rect(), PixelRect::new(160, 60, 80, 80));
    assert!(!s.is_dragging());
}

#[test]
fn handle_drags_resize_from_drag_start() {
    let c = canvas(400, 300);
    let mut s = CropSession::start(c, PixelRect::full(c), 0.5, MIN_CROP_SIZE);
    assert_eq!(s.rect(), PixelRect::new(125, 75, 150, 150));

    s.begin_drag(CropHandle::Se, Point::new(275.0, 225.0));
    s.drag_to(Point::new(285.0, 235.0));
    s.drag_to(Point::new(295.0, 245.0));
    assert_eq!(s.rect(), PixelRect::new(125, 75, 170, 170));
    s.end_drag();

    s.begin_drag(CropHandle::Nw, Point::new(125.0, 75.0));
    s.drag_to(Point::new(105.0, 65.0));
    assert_eq!(s.rect(), PixelRect::new(105, 65, 190, 180));
    s.end_drag();

    // Moves after release are ignored.
    s.drag_to(Point::new(0.0, 0.0));
    assert_eq!(s.rect(), PixelRect::new(105, 65, 190, 180));
}

#[test]
fn body_drag_moves_without_resizing() {
    let c = canvas(400, 300);
    let mut s = CropSession::start(c, PixelRect::full(c), 0.5, MIN_CROP_SIZE);
    s.begin_drag(CropHandle::Body, Point::new(200.0, 150.0));
    s.drag_to(Point::new(1000.0, 1000.0));
    assert_eq!(s.rect(), PixelRect::new(250, 150, 150, 150));
}

#[test]
fn crop_of_filled_buffer_keeps_color() {
    let b = PixelBuffer::filled(80, 60, Rgba8::rgb(3, 4, 5));
    let out = crop(&b, clamp_crop_rect(70.0, 50.0, 60.0, 40.0, b.canvas(), MIN_CROP_SIZE));
    assert_eq!((out.width(), out.height()), (60, 50));
    assert_eq!(out.pixel(59, 49), Some([3, 4, 5, 255]));
}

proptest! {
    #[test]
    fn clamped_rect_is_always_contained(
        x in -1e4f64..1e4,
        y in -1e4f64..1e4,
        w in -1e4f64..1e4,
        h in -1e4f64..1e4,
        cw in 50u32..2000,
        ch in 50u32..2000,
    ) {
        let c = canvas(cw, ch);
        let r = clamp_crop_rect(x, y, w, h, c, MIN_CROP_SIZE);
        prop_assert!(r.right() <= cw);
        prop_assert!(r.bottom() <= ch);
        prop_assert!(r.width >= MIN_CROP_SIZE);
        prop_assert!(r.height >= MIN_CROP_SIZE);
    }
}
