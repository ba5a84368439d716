use super::*;

#[test]
fn clamp_u8_matches_clamped_byte_store() {
    assert_eq!(clamp_u8(-3.0), 0);
    assert_eq!(clamp_u8(300.0), 255);
    assert_eq!(clamp_u8(f64::NAN), 0);
    assert_eq!(clamp_u8(60.0), 60);
    assert_eq!(clamp_u8(0.5), 0);
    assert_eq!(clamp_u8(1.5), 2);
    assert_eq!(clamp_u8(2.5), 2);
    assert_eq!(clamp_u8(2.6), 3);
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 200), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(128, 128), 64);
}

#[test]
fn unpremultiply_edges() {
    assert_eq!(unpremultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(unpremultiply([64, 0, 128, 128]), [128, 0, 255, 128]);
}
