use crate::foundation::core::{Affine, PixelRect, Point, Vec2};
use crate::foundation::math::clamp_u8;
use crate::raster::buffer::PixelBuffer;

const QUARTER_EPS: f64 = 1e-9;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// Number of clockwise quarter turns when `degrees` is a multiple of 90.
pub fn quarter_turns(degrees: f64) -> Option<u8> {
    let q = degrees / 90.0;
    let rounded = q.round();
    if (q - rounded).abs() > QUARTER_EPS {
        return None;
    }
    Some(rounded.rem_euclid(4.0) as u8)
}

/// Rotate the current buffer clockwise by `degrees`.
///
/// Multiples of 90° permute pixels losslessly and swap width/height on odd quarter turns. Any other
/// angle rotates the opaque content's bounding box (the whole canvas when nothing is opaque),
/// shrinks the rotated box to fit the existing canvas if needed, and centers it; the canvas keeps
/// its dimensions.
pub fn rotate(buf: &PixelBuffer, degrees: f64) -> PixelBuffer {
    match quarter_turns(degrees) {
        Some(0) => buf.clone(),
        Some(1) => PixelBuffer::from_rgba_image(image::imageops::rotate90(&buf.to_rgba_image())),
        Some(2) => PixelBuffer::from_rgba_image(image::imageops::rotate180(&buf.to_rgba_image())),
        Some(_) => PixelBuffer::from_rgba_image(image::imageops::rotate270(&buf.to_rgba_image())),
        None => rotate_fit(buf, degrees.to_radians()),
    }
}

/// Size of the axis-aligned box enclosing a `width × height` box rotated by `theta`.
pub fn rotated_bounds(width: f64, height: f64, theta: f64) -> (f64, f64) {
    let (s, c) = theta.sin_cos();
    (
        (width * c).abs() + (height * s).abs(),
        (width * s).abs() + (height * c).abs(),
    )
}

fn rotate_fit(buf: &PixelBuffer, theta: f64) -> PixelBuffer {
    let canvas = buf.canvas();
    let mut out = PixelBuffer::new(canvas.width, canvas.height);
    let content = buf.opaque_bounds().unwrap_or(PixelRect::full(canvas));
    if content.is_empty() {
        return out;
    }

    let (bw, bh) = rotated_bounds(f64::from(content.width), f64::from(content.height), theta);
    let scale = (f64::from(canvas.width) / bw)
        .min(f64::from(canvas.height) / bh)
        .min(1.0);

    let forward = Affine::translate(PixelRect::full(canvas).center().to_vec2())
        * Affine::rotate(theta)
        * Affine::scale(scale)
        * Affine::translate(-content.center().to_vec2());
    let inverse = forward.inverse();

    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let src = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if let Some(px) = sample_bilinear(buf, content, src - Vec2::new(0.5, 0.5)) {
                out.set_pixel(x, y, px);
            }
        }
    }
    out
}

/// Bilinear sample in premultiplied space, restricted to `bounds`. `p` is in pixel-index space.
fn sample_bilinear(buf: &PixelBuffer, bounds: PixelRect, p: Point) -> Option<[u8; 4]> {
    let x0f = p.x.floor();
    let y0f = p.y.floor();
    let fx = p.x - x0f;
    let fy = p.y - y0f;

    let left = f64::from(bounds.x) - 1.0;
    let top = f64::from(bounds.y) - 1.0;
    if x0f < left || y0f < top || x0f >= f64::from(bounds.right()) || y0f >= f64::from(bounds.bottom())
    {
        return None;
    }

    let fetch = |xi: f64, yi: f64| -> [f64; 4] {
        if xi < f64::from(bounds.x)
            || yi < f64::from(bounds.y)
            || xi >= f64::from(bounds.right())
            || yi >= f64::from(bounds.bottom())
        {
            return [0.0; 4];
        }
        let px = buf.pixel(xi as u32, yi as u32).unwrap_or([0; 4]);
        let a = f64::from(px[3]) / 255.0;
        [
            f64::from(px[0]) * a,
            f64::from(px[1]) * a,
            f64::from(px[2]) * a,
            f64::from(px[3]),
        ]
    };

    let p00 = fetch(x0f, y0f);
    let p10 = fetch(x0f + 1.0, y0f);
    let p01 = fetch(x0f, y0f + 1.0);
    let p11 = fetch(x0f + 1.0, y0f + 1.0);

    let mut acc = [0.0f64; 4];
    for i in 0..4 {
        let top = p00[i] * (1.0 - fx) + p10[i] * fx;
        let bottom = p01[i] * (1.0 - fx) + p11[i] * fx;
        acc[i] = top * (1.0 - fy) + bottom * fy;
    }
    if acc[3] <= 0.0 {
        return None;
    }

    let a = acc[3] / 255.0;
    Some([
        clamp_u8(acc[0] / a),
        clamp_u8(acc[1] / a),
        clamp_u8(acc[2] / a),
        clamp_u8(acc[3]),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
