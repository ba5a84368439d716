use super::*;
use crate::foundation::core::Rgba8;
use crate::text::testing::BoxGlyphs;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn small_opts() -> EditorOpts {
    EditorOpts {
        width: 120,
        height: 80,
        ..EditorOpts::default()
    }
}

fn editor() -> EditorState {
    EditorState::new(small_opts())
        .unwrap()
        .with_glyphs(Box::new(BoxGlyphs::default()))
}

fn white_png(w: u32, h: u32) -> Vec<u8> {
    encode_png(&PixelBuffer::filled(w, h, Rgba8::rgb(255, 255, 255))).unwrap()
}

fn editor_with_image() -> EditorState {
    let mut ed = editor();
    assert_eq!(
        ed.load_image(&white_png(120, 80)).unwrap(),
        Outcome::Recorded(Action::UploadImage)
    );
    ed
}

fn draw_stroke(ed: &mut EditorState) -> Outcome {
    ed.set_mode(Mode::TextPath);
    ed.pointer_down(Point::new(10.0, 40.0));
    ed.pointer_move(Point::new(60.0, 40.0));
    ed.pointer_move(Point::new(110.0, 40.0));
    ed.pointer_up()
}

fn actions(ed: &EditorState) -> Vec<Action> {
    ed.history().entries().map(|e| e.action).collect()
}

#[test]
fn new_rejects_invalid_options() {
    let bad = EditorOpts {
        history_cap: 0,
        ..EditorOpts::default()
    };
    assert!(EditorState::new(bad).is_err());
}

#[test]
fn upload_records_and_bad_bytes_are_ignored() {
    let mut ed = editor();
    assert_eq!(ed.load_image(b"garbage").unwrap(), Outcome::Ignored);
    assert!(ed.history().is_empty());

    assert_eq!(
        ed.load_image(&white_png(60, 80)).unwrap(),
        Outcome::Recorded(Action::UploadImage)
    );
    assert_eq!(ed.main().pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(ed.main().pixel(60, 40), Some(WHITE));
    assert_eq!(ed.history().cursor(), Some(0));
}

#[test]
fn pointer_is_ignored_outside_text_mode() {
    let mut ed = editor_with_image();
    assert_eq!(ed.pointer_down(Point::new(1.0, 1.0)), Outcome::Ignored);
    assert_eq!(ed.pointer_move(Point::new(2.0, 2.0)), Outcome::Ignored);
    assert_eq!(ed.pointer_up(), Outcome::Ignored);
}

#[test]
fn stroke_stamps_text_and_records() {
    let mut ed = editor_with_image();
    assert_eq!(draw_stroke(&mut ed), Outcome::Recorded(Action::AddPathText));
    assert_eq!(ed.current_path().map(StrokePath::len), Some(3));
    assert_eq!(ed.main().pixel(10, 40), Some(BLACK));
    assert_eq!(ed.main().pixel(30, 40), Some(BLACK));
    assert_eq!(ed.main().pixel(20, 40), Some(WHITE));
    assert_eq!(ed.surface().layer(Layer::Scratch).opaque_bounds(), None);
    assert_eq!(actions(&ed), vec![Action::UploadImage, Action::AddPathText]);
}

#[test]
fn single_point_stroke_does_nothing() {
    let mut ed = editor_with_image();
    ed.set_mode(Mode::TextPath);
    ed.pointer_down(Point::new(10.0, 10.0));
    assert_eq!(ed.pointer_up(), Outcome::Updated);
    assert!(ed.current_path().is_none());
    assert_eq!(ed.history().len(), 1);
}

#[test]
fn preview_is_drawn_on_scratch_while_dragging() {
    let mut ed = editor_with_image();
    ed.set_mode(Mode::TextPath);
    ed.pointer_down(Point::new(10.0, 10.0));
    ed.pointer_move(Point::new(100.0, 10.0));
    assert!(ed.is_drawing());
    assert!(ed.surface().layer(Layer::Scratch).opaque_bounds().is_some());
    assert_eq!(ed.main().pixel(50, 10), Some(WHITE));
}

#[test]
fn text_change_redraws_from_stroke_base_and_records() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);
    assert_eq!(ed.set_text("ab"), Outcome::Recorded(Action::UpdatePathText));
    // ASCII boxes advance by 10: glyphs at 10, 20, 30, ...
    assert_eq!(ed.main().pixel(20, 40), Some(BLACK));
    assert_eq!(ed.set_text(""), Outcome::Recorded(Action::UpdatePathText));
    assert_eq!(ed.params().text, "这是路径文字效果");
    assert_eq!(ed.main().pixel(20, 40), Some(WHITE));
}

#[test]
fn text_change_without_path_only_updates_params() {
    let mut ed = editor_with_image();
    assert_eq!(ed.set_text("hello"), Outcome::Updated);
    assert_eq!(ed.history().len(), 1);
}

#[test]
fn adjust_drag_redraws_on_tick_and_collapses_on_release() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);
    ed.set_text("x");
    ed.set_text("这");

    assert_eq!(ed.begin_adjust(), Outcome::Updated);
    ed.adjust_param(&ParamChange::FontSize("30".into()), Duration::from_millis(0));
    ed.adjust_param(&ParamChange::FontSize("40".into()), Duration::from_millis(10));
    assert_eq!(ed.tick(Duration::from_millis(20)), Outcome::Ignored);
    assert_eq!(ed.tick(Duration::from_millis(26)), Outcome::Updated);
    assert_eq!(ed.params().font_size, 40);
    // Step is now 40: glyphs at 10, 50, 90.
    assert_eq!(ed.main().pixel(50, 40), Some(BLACK));
    assert_eq!(ed.main().pixel(30, 40), Some(WHITE));

    assert_eq!(ed.end_adjust(), Outcome::Recorded(Action::AdjustText));
    assert!(!ed.is_adjusting());
    assert_eq!(
        actions(&ed),
        vec![
            Action::UploadImage,
            Action::AddPathText,
            Action::AdjustTextStart,
            Action::AdjustText
        ]
    );
}

#[test]
fn release_flushes_pending_redraw_before_recording() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);
    ed.begin_adjust();
    ed.adjust_param(&ParamChange::Color("#ff0000".into()), Duration::from_millis(0));
    assert!(ed.redraw_pending());
    ed.end_adjust();
    assert!(!ed.redraw_pending());
    let last = ed.history().current().unwrap();
    assert_eq!(last.snapshot.buffer.pixel(10, 40), Some([255, 0, 0, 255]));
}

#[test]
fn undo_and_redo_restore_pixels_and_path() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);

    assert_eq!(ed.undo(), Outcome::Restored(Action::UploadImage));
    assert_eq!(ed.main().pixel(10, 40), Some(WHITE));
    assert!(ed.current_path().is_none());
    assert!(!ed.can_undo());
    assert_eq!(ed.undo(), Outcome::Ignored);

    assert_eq!(ed.redo(), Outcome::Restored(Action::AddPathText));
    assert_eq!(ed.main().pixel(10, 40), Some(BLACK));
    assert!(ed.current_path().is_some());
    assert_eq!(ed.redo(), Outcome::Ignored);
}

#[test]
fn restored_image_becomes_the_stroke_base() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);
    ed.set_text("ab");
    ed.undo();
    // Redrawing from the restored state starts from the image with the original text baked in.
    ed.set_text("ab");
    assert_eq!(ed.main().pixel(10, 40), Some(BLACK));
    assert_eq!(ed.main().pixel(20, 40), Some(BLACK));
}

#[test]
fn rotation_accumulates_and_quarter_turn_swaps_size() {
    let mut ed = editor_with_image();
    assert_eq!(ed.rotate(90.0), Outcome::Recorded(Action::Rotate));
    assert_eq!((ed.main().width(), ed.main().height()), (80, 120));
    assert_eq!(ed.surface().layer(Layer::Scratch).width(), 80);
    ed.rotate(-180.0);
    assert_eq!(ed.rotation_degrees(), 270.0);
    assert_eq!(ed.rotate(f64::NAN), Outcome::Ignored);
}

#[test]
fn destructive_edits_commit_the_path() {
    let mut ed = editor_with_image();
    draw_stroke(&mut ed);
    assert_eq!(ed.flip(FlipAxis::Horizontal), Outcome::Recorded(Action::Flip));
    assert!(ed.current_path().is_none());
    assert_eq!(ed.main().pixel(109, 40), Some(BLACK));

    assert_eq!(ed.apply_filter(Filter::Dark), Outcome::Recorded(Action::Filter));
    assert_eq!(ed.main().pixel(0, 0), Some([204, 204, 204, 255]));
}

#[test]
fn crop_session_resizes_both_layers() {
    let mut ed = editor_with_image();
    assert_eq!(ed.apply_crop(), Outcome::Ignored);
    assert_eq!(ed.start_crop(), Outcome::Updated);
    // 80% of 80 = 64, centered in 120x80.
    assert_eq!(ed.crop_rect(), Some(PixelRect::new(28, 8, 64, 64)));

    ed.crop_begin(CropHandle::Se, Point::new(92.0, 72.0));
    ed.crop_move(Point::new(80.0, 60.0));
    assert_eq!(ed.crop_end(), Outcome::Updated);
    assert_eq!(ed.crop_rect(), Some(PixelRect::new(28, 8, 52, 52)));

    assert_eq!(ed.apply_crop(), Outcome::Recorded(Action::Crop));
    assert_eq!((ed.main().width(), ed.main().height()), (52, 52));
    assert_eq!(ed.surface().canvas(), ed.main().canvas());
    assert!(ed.crop_rect().is_none());

    ed.undo();
    assert_eq!((ed.main().width(), ed.main().height()), (120, 80));
}

#[test]
fn cancel_crop_discards_the_box() {
    let mut ed = editor_with_image();
    ed.start_crop();
    assert_eq!(ed.cancel_crop(), Outcome::Updated);
    assert_eq!(ed.cancel_crop(), Outcome::Ignored);
    assert_eq!(ed.history().len(), 1);
}

#[test]
fn missing_glyph_backend_skips_text_but_keeps_history_flow() {
    let mut ed = EditorState::new(small_opts()).unwrap();
    ed.load_image(&white_png(120, 80)).unwrap();
    assert_eq!(draw_stroke(&mut ed), Outcome::Recorded(Action::AddPathText));
    assert_eq!(ed.main().pixel(10, 40), Some(WHITE));
}

#[test]
fn export_produces_png() {
    let ed = editor_with_image();
    let Outcome::Exported(bytes) = ed.export().unwrap() else {
        panic!("expected export bytes");
    };
    assert_eq!(&bytes[1..4], b"PNG");
}
