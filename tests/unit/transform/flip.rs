use super::*;

fn corner_marked() -> PixelBuffer {
    let mut b = PixelBuffer::new(4, 3);
    b.set_pixel(0, 0, [9, 8, 7, 255]);
    b
}

#[test]
fn horizontal_mirrors_columns() {
    let out = flip(&corner_marked(), FlipAxis::Horizontal);
    assert_eq!((out.width(), out.height()), (4, 3));
    assert_eq!(out.pixel(3, 0), Some([9, 8, 7, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn vertical_mirrors_rows() {
    let out = flip(&corner_marked(), FlipAxis::Vertical);
    assert_eq!(out.pixel(0, 2), Some([9, 8, 7, 255]));
}

#[test]
fn flipping_twice_restores_input() {
    let src = corner_marked();
    for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
        assert_eq!(flip(&flip(&src, axis), axis), src, "{}", axis.as_str());
    }
}
