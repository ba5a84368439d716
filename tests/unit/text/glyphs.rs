use super::*;

#[test]
fn stamp_transform_pivots_on_origin() {
    let stamp = GlyphStamp {
        grapheme: "a",
        origin: Point::new(10.0, 20.0),
        angle: std::f64::consts::FRAC_PI_2,
    };
    let t = stamp.transform();

    let pivot = t * Point::ORIGIN;
    assert!((pivot.x - 10.0).abs() < 1e-9);
    assert!((pivot.y - 20.0).abs() < 1e-9);

    // The local +x axis (baseline direction) maps to surface +y for a quarter turn.
    let along = t * Point::new(1.0, 0.0);
    assert!((along.x - 10.0).abs() < 1e-9);
    assert!((along.y - 21.0).abs() < 1e-9);
}

#[test]
fn brush_follows_text_color() {
    let brush = TextBrushRgba8::from(Rgba8::rgb(1, 2, 3));
    assert_eq!(
        brush,
        TextBrushRgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 255
        }
    );
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = ParleyGlyphRasterizer::from_font_bytes(b"not a font".to_vec()).unwrap_err();
    assert!(err.to_string().contains("glyph error:"));
}

fn dejavu() -> ParleyGlyphRasterizer {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    ParleyGlyphRasterizer::from_font_bytes(bytes).unwrap()
}

fn style() -> TextStyle {
    TextStyle {
        font_size: 40.0,
        color: Rgba8::rgb(0, 0, 0),
    }
}

fn ink(glyphs: &mut ParleyGlyphRasterizer, grapheme: &str, angle: f64) -> crate::PixelRect {
    let stamp = GlyphStamp {
        grapheme,
        origin: Point::new(100.0, 100.0),
        angle,
    };
    let layer = glyphs
        .rasterize(Canvas::new(200, 200).unwrap(), &[stamp], &style())
        .unwrap();
    layer.opaque_bounds().expect("glyph left no ink")
}

#[test]
fn real_font_reports_family_and_advance() {
    let mut glyphs = dejavu();
    assert!(!glyphs.family_name().trim().is_empty());

    let one = glyphs.advance("H", &style()).unwrap();
    let two = glyphs.advance("HH", &style()).unwrap();
    assert!(one > 10.0, "advance {one}");
    assert!((two - 2.0 * one).abs() < 0.5, "{two} vs 2 x {one}");
}

#[test]
fn upright_glyph_sits_on_baseline_at_origin() {
    let mut glyphs = dejavu();
    let r = ink(&mut glyphs, "H", 0.0);

    let bottom = r.y + r.height;
    assert!((98..=102).contains(&bottom), "ink bottom {bottom}");
    assert!(r.y < 80, "cap height reaches up to {}", r.y);
    let center = r.x * 2 + r.width;
    assert!((196..=204).contains(&center), "ink center x {}", center / 2);
}

#[test]
fn quarter_turn_glyph_rises_to_the_right_of_origin() {
    let mut glyphs = dejavu();
    let r = ink(&mut glyphs, "H", std::f64::consts::FRAC_PI_2);

    // Baseline runs down the surface; ascenders point at +x.
    assert!((98..=102).contains(&r.x), "ink left {}", r.x);
    assert!(r.x + r.width > 120);
    let center = r.y * 2 + r.height;
    assert!((196..=204).contains(&center), "ink center y {}", center / 2);
}

#[test]
fn multi_glyph_stamp_spreads_over_its_advance() {
    let mut glyphs = dejavu();
    let advance = glyphs.advance("HH", &style()).unwrap();
    let r = ink(&mut glyphs, "HH", 0.0);

    let width = f64::from(r.width);
    assert!(width > advance * 0.75, "ink {width} for advance {advance}");
    assert!(width <= advance + 2.0, "ink {width} for advance {advance}");
    let center = r.x * 2 + r.width;
    assert!((196..=204).contains(&center), "ink center x {}", center / 2);
}
