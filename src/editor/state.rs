use std::time::{Duration, SystemTime};

use crate::assets::decode::{decode_image, letterbox_into};
use crate::assets::encode::encode_png;
use crate::editor::debounce::Debouncer;
use crate::editor::opts::EditorOpts;
use crate::effects::filter::Filter;
use crate::foundation::core::{PixelRect, Point};
use crate::foundation::error::EditorResult;
use crate::history::log::{Action, History, HistoryEntry, Snapshot};
use crate::path::preview::render_preview;
use crate::path::stroke::StrokePath;
use crate::raster::buffer::PixelBuffer;
use crate::raster::surface::{Layer, Surface};
use crate::text::compositor::render_path_text;
use crate::text::glyphs::GlyphRasterizer;
use crate::text::params::{ParamChange, PathTextParams};
use crate::transform::crop::{CropHandle, CropSession, crop};
use crate::transform::flip::{FlipAxis, flip};
use crate::transform::rotate::{normalize_degrees, rotate};

/// Which tool the pointer drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Filters and transforms; pointer strokes are ignored.
    #[default]
    Basic,
    /// Pointer strokes lay text along the drawn path.
    TextPath,
}

/// Result of one controller command.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A guard failed (wrong mode, nothing to act on, decode failure); nothing changed.
    Ignored,
    /// State or pixels changed without a history entry.
    Updated,
    /// A history entry was pushed.
    Recorded(Action),
    /// The canvas was reset to a history entry.
    Restored(Action),
    /// PNG bytes of the main buffer.
    Exported(Vec<u8>),
}

/// Everything the editor knows between commands.
///
/// Owns the surface, the history log, the live text parameters and the interaction state
/// (current stroke, crop box, pending debounced redraw).
pub struct EditorState {
    opts: EditorOpts,
    surface: Surface,
    history: History,
    mode: Mode,
    drawing: bool,
    stroke: StrokePath,
    current_path: Option<StrokePath>,
    stroke_base: Option<PixelBuffer>,
    params: PathTextParams,
    rotation_degrees: f64,
    adjusting: bool,
    crop: Option<CropSession>,
    redraw: Debouncer<()>,
    glyphs: Option<Box<dyn GlyphRasterizer>>,
}

impl std::fmt::Debug for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorState")
            .field("canvas", &self.surface.canvas())
            .field("mode", &self.mode)
            .field("history_len", &self.history.len())
            .field("cursor", &self.history.cursor())
            .field("has_path", &self.current_path.is_some())
            .field("rotation_degrees", &self.rotation_degrees)
            .field("cropping", &self.crop.is_some())
            .field("has_glyphs", &self.glyphs.is_some())
            .finish()
    }
}

impl EditorState {
    /// Blank session with a transparent surface of the configured size.
    pub fn new(opts: EditorOpts) -> EditorResult<Self> {
        opts.validate()?;
        let canvas = opts.canvas()?;
        Ok(Self {
            surface: Surface::new(canvas),
            history: History::new(opts.history_cap),
            mode: Mode::Basic,
            drawing: false,
            stroke: StrokePath::default(),
            current_path: None,
            stroke_base: None,
            params: PathTextParams::default(),
            rotation_degrees: 0.0,
            adjusting: false,
            crop: None,
            redraw: Debouncer::new(opts.debounce()),
            glyphs: None,
            opts,
        })
    }

    /// Attach the glyph backend used for path text. Without one, path text is skipped with a
    /// warning.
    pub fn with_glyphs(mut self, glyphs: Box<dyn GlyphRasterizer>) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    pub fn set_glyphs(&mut self, glyphs: Box<dyn GlyphRasterizer>) {
        self.glyphs = Some(glyphs);
    }

    pub fn opts(&self) -> &EditorOpts {
        &self.opts
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The committed image.
    pub fn main(&self) -> &PixelBuffer {
        self.surface.layer(Layer::Main)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn params(&self) -> &PathTextParams {
        &self.params
    }

    /// Frozen stroke the text is laid along.
    pub fn current_path(&self) -> Option<&StrokePath> {
        self.current_path.as_ref()
    }

    /// Running rotation in `[0, 360)`.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn crop_rect(&self) -> Option<PixelRect> {
        self.crop.as_ref().map(CropSession::rect)
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw.is_pending()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self, action: Action) -> Outcome {
        let snapshot = Snapshot::capture(self.main(), self.current_path.as_ref());
        self.history.record(action, snapshot, SystemTime::now());
        Outcome::Recorded(action)
    }

    fn restore(&mut self, entry: HistoryEntry) -> Outcome {
        self.crop = None;
        self.drawing = false;
        self.redraw.cancel();
        self.surface
            .replace_main(PixelBuffer::clone(&entry.snapshot.buffer));
        self.current_path = entry.snapshot.path.clone();
        self.stroke_base = Some(self.main().clone());
        Outcome::Restored(entry.action)
    }

    /// Replace the main buffer after a destructive edit. Text already on the image is committed:
    /// the active path no longer tracks it.
    fn commit_main(&mut self, buffer: PixelBuffer) {
        self.surface.replace_main(buffer);
        self.drop_path();
    }

    fn drop_path(&mut self) {
        self.crop = None;
        self.drawing = false;
        self.redraw.cancel();
        self.current_path = None;
        self.stroke_base = None;
    }

    /// Lay the current text along the current path. Failures are logged and leave the main
    /// buffer untouched.
    fn draw_path_text(&mut self) -> bool {
        let Some(path) = self.current_path.as_ref() else {
            return false;
        };
        let Some(glyphs) = self.glyphs.as_deref_mut() else {
            tracing::warn!("no glyph rasterizer configured; path text skipped");
            self.surface.clear(Layer::Scratch);
            return false;
        };
        match render_path_text(
            &mut self.surface,
            self.stroke_base.as_ref(),
            path,
            &self.params,
            self.opts.simplify_tolerance,
            glyphs,
        ) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "path text draw failed; canvas unchanged");
                self.surface.clear(Layer::Scratch);
                false
            }
        }
    }

    fn redraw_path_text(&mut self, save: bool) -> Outcome {
        if self.current_path.is_none() {
            return Outcome::Ignored;
        }
        self.draw_path_text();
        if save && !self.adjusting {
            self.record(Action::UpdatePathText)
        } else {
            Outcome::Updated
        }
    }

    pub(crate) fn load_image(&mut self, bytes: &[u8]) -> EditorResult<Outcome> {
        let image = match decode_image(bytes) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, "image upload ignored");
                return Ok(Outcome::Ignored);
            }
        };
        self.drop_path();
        self.surface.resize(self.opts.canvas()?);
        let placed = letterbox_into(&mut self.surface, &image, self.opts.background)?;
        tracing::debug!(
            src_w = image.width(),
            src_h = image.height(),
            ?placed,
            "image letterboxed"
        );
        Ok(self.record(Action::UploadImage))
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) -> Outcome {
        if self.drawing {
            self.drawing = false;
            self.surface.clear(Layer::Scratch);
        }
        self.mode = mode;
        Outcome::Updated
    }

    pub(crate) fn pointer_down(&mut self, p: Point) -> Outcome {
        if self.mode != Mode::TextPath || self.crop.is_some() {
            return Outcome::Ignored;
        }
        self.drawing = true;
        self.stroke = StrokePath::begin(p);
        self.surface.clear(Layer::Scratch);
        Outcome::Updated
    }

    pub(crate) fn pointer_move(&mut self, p: Point) -> Outcome {
        if !self.drawing || self.mode != Mode::TextPath {
            return Outcome::Ignored;
        }
        self.stroke.push(p);
        match render_preview(self.surface.canvas(), self.stroke.points()) {
            Ok(layer) => self.surface.put_pixels(Layer::Scratch, &layer, 0, 0),
            Err(e) => tracing::warn!(error = %e, "stroke preview failed"),
        }
        Outcome::Updated
    }

    pub(crate) fn pointer_up(&mut self) -> Outcome {
        if self.mode != Mode::TextPath || !self.drawing {
            return Outcome::Ignored;
        }
        self.drawing = false;
        if !self.stroke.is_drawable() {
            return Outcome::Updated;
        }
        self.current_path = Some(std::mem::take(&mut self.stroke));
        self.stroke_base = Some(self.main().clone());
        self.draw_path_text();
        self.record(Action::AddPathText)
    }

    pub(crate) fn set_text(&mut self, raw: &str) -> Outcome {
        self.params.set_text(raw);
        match self.redraw_path_text(true) {
            Outcome::Ignored => Outcome::Updated,
            other => other,
        }
    }

    pub(crate) fn begin_adjust(&mut self) -> Outcome {
        self.adjusting = true;
        let staged = Snapshot::capture(self.main(), self.current_path.as_ref());
        self.history.stage_initial(staged);
        Outcome::Updated
    }

    pub(crate) fn adjust_param(&mut self, change: &ParamChange, now: Duration) -> Outcome {
        self.params.apply(change);
        self.redraw.schedule(now, ());
        Outcome::Updated
    }

    pub(crate) fn tick(&mut self, now: Duration) -> Outcome {
        if self.redraw.poll(now).is_none() {
            return Outcome::Ignored;
        }
        self.redraw_path_text(false)
    }

    pub(crate) fn end_adjust(&mut self) -> Outcome {
        if !self.adjusting {
            return Outcome::Ignored;
        }
        self.adjusting = false;
        if self.redraw.flush().is_some() {
            self.redraw_path_text(false);
        }
        self.record(Action::AdjustText)
    }

    pub(crate) fn undo(&mut self) -> Outcome {
        match self.history.undo().cloned() {
            Some(entry) => self.restore(entry),
            None => Outcome::Ignored,
        }
    }

    pub(crate) fn redo(&mut self) -> Outcome {
        match self.history.redo().cloned() {
            Some(entry) => self.restore(entry),
            None => Outcome::Ignored,
        }
    }

    pub(crate) fn rotate(&mut self, degrees: f64) -> Outcome {
        if !degrees.is_finite() {
            tracing::warn!(degrees, "non-finite rotation ignored");
            return Outcome::Ignored;
        }
        self.rotation_degrees = normalize_degrees(self.rotation_degrees + degrees);
        let rotated = rotate(self.main(), degrees);
        self.commit_main(rotated);
        self.record(Action::Rotate)
    }

    pub(crate) fn flip(&mut self, axis: FlipAxis) -> Outcome {
        let flipped = flip(self.main(), axis);
        self.commit_main(flipped);
        self.record(Action::Flip)
    }

    pub(crate) fn apply_filter(&mut self, filter: Filter) -> Outcome {
        filter.apply(self.surface.layer_mut(Layer::Main));
        self.drop_path();
        self.record(Action::Filter)
    }

    pub(crate) fn start_crop(&mut self) -> Outcome {
        if self.crop.is_some() {
            return Outcome::Ignored;
        }
        let canvas = self.surface.canvas();
        let content = self
            .main()
            .opaque_bounds()
            .unwrap_or(PixelRect::full(canvas));
        self.crop = Some(CropSession::start(
            canvas,
            content,
            self.opts.initial_crop_fraction,
            self.opts.min_crop_size,
        ));
        Outcome::Updated
    }

    pub(crate) fn crop_begin(&mut self, handle: CropHandle, p: Point) -> Outcome {
        match self.crop.as_mut() {
            Some(session) => {
                session.begin_drag(handle, p);
                Outcome::Updated
            }
            None => Outcome::Ignored,
        }
    }

    pub(crate) fn crop_move(&mut self, p: Point) -> Outcome {
        match self.crop.as_mut() {
            Some(session) if session.is_dragging() => {
                session.drag_to(p);
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    pub(crate) fn crop_end(&mut self) -> Outcome {
        match self.crop.as_mut() {
            Some(session) if session.is_dragging() => {
                session.end_drag();
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    pub(crate) fn apply_crop(&mut self) -> Outcome {
        let Some(session) = self.crop.take() else {
            return Outcome::Ignored;
        };
        let rect = session.rect();
        let cropped = crop(self.main(), rect);
        self.commit_main(cropped);
        tracing::debug!(?rect, "crop applied");
        self.record(Action::Crop)
    }

    pub(crate) fn cancel_crop(&mut self) -> Outcome {
        match self.crop.take() {
            Some(_) => Outcome::Updated,
            None => Outcome::Ignored,
        }
    }

    pub(crate) fn export(&self) -> EditorResult<Outcome> {
        Ok(Outcome::Exported(encode_png(self.main())?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
