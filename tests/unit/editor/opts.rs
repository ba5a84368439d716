use super::*;

#[test]
fn defaults_match_editor_behavior() {
    let o = EditorOpts::default();
    assert_eq!((o.width, o.height), (800, 600));
    assert_eq!(o.history_cap, 20);
    assert_eq!(o.debounce(), Duration::from_millis(16));
    assert_eq!(o.simplify_tolerance, 5.0);
    assert_eq!(o.min_crop_size, 50);
    assert_eq!(o.initial_crop_fraction, 0.8);
    assert_eq!(o.background, None);
    o.validate().unwrap();
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let o = EditorOpts::from_json(r#"{"width": 320, "background": {"r":1,"g":2,"b":3,"a":255}}"#)
        .unwrap();
    assert_eq!((o.width, o.height), (320, 600));
    assert_eq!(o.background, Some(Rgba8::rgb(1, 2, 3)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = EditorOpts::from_json(r#"{"widht": 320}"#).unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
}

#[test]
fn validate_rejects_bad_values() {
    for o in [
        EditorOpts { width: 0, ..EditorOpts::default() },
        EditorOpts { history_cap: 0, ..EditorOpts::default() },
        EditorOpts { simplify_tolerance: f64::NAN, ..EditorOpts::default() },
        EditorOpts { min_crop_size: 0, ..EditorOpts::default() },
        EditorOpts { initial_crop_fraction: 1.5, ..EditorOpts::default() },
    ] {
        assert!(o.validate().is_err(), "{o:?}");
    }
}

#[test]
fn surface_sides_are_capped_for_the_rasterizer() {
    let edge = EditorOpts {
        width: MAX_SURFACE_SIDE,
        height: 1,
        ..EditorOpts::default()
    };
    edge.validate().unwrap();

    let err = EditorOpts::from_json(r#"{"height": 65536}"#).unwrap_err();
    assert!(err.to_string().contains("exceeds 65535"), "{err}");
}
