use std::time::Duration;

use crate::editor::state::{EditorState, Mode, Outcome};
use crate::effects::filter::Filter;
use crate::foundation::core::Point;
use crate::foundation::error::EditorResult;
use crate::text::params::ParamChange;
use crate::transform::crop::CropHandle;
use crate::transform::flip::FlipAxis;

/// One input event from the shell.
///
/// Times (`at_ms`) are milliseconds since the session started; they drive the debounced
/// parameter redraw.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Raw image file bytes.
    LoadImage { bytes: Vec<u8> },
    /// Switch between plain viewing and stroke drawing.
    SetMode { mode: Mode },
    /// Start a stroke, in surface pixels.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    /// Finish the stroke and lay text along it.
    PointerUp,
    /// Path-text input changed. Redraws and records immediately.
    SetText { text: String },
    /// Pointer pressed on a font size/color/spacing control.
    BeginAdjust,
    /// A font size/color/spacing input changed. Redraw is debounced.
    AdjustParam { change: ParamChange, at_ms: u64 },
    /// Pointer released on a parameter control.
    EndAdjust,
    /// Fire the debounced redraw if its quiet window has elapsed.
    Tick { at_ms: u64 },
    /// Step back one history entry.
    Undo,
    /// Step forward one history entry.
    Redo,
    /// Clockwise, in degrees.
    Rotate { degrees: f64 },
    Flip { axis: FlipAxis },
    ApplyFilter { filter: Filter },
    /// Open the crop box over the image content.
    StartCrop,
    /// Grab a crop handle, or the box body, at a pointer position.
    CropBegin { handle: CropHandle, x: f64, y: f64 },
    /// Drag the grabbed handle.
    CropMove { x: f64, y: f64 },
    /// Release the handle.
    CropEnd,
    /// Cut the surface to the crop box and record it.
    ApplyCrop,
    /// Close the crop box without changes.
    CancelCrop,
    /// Encode the main buffer as PNG.
    Export,
}

impl Command {
    /// Tag used in logs and scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadImage { .. } => "load_image",
            Self::SetMode { .. } => "set_mode",
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::SetText { .. } => "set_text",
            Self::BeginAdjust => "begin_adjust",
            Self::AdjustParam { .. } => "adjust_param",
            Self::EndAdjust => "end_adjust",
            Self::Tick { .. } => "tick",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Rotate { .. } => "rotate",
            Self::Flip { .. } => "flip",
            Self::ApplyFilter { .. } => "apply_filter",
            Self::StartCrop => "start_crop",
            Self::CropBegin { .. } => "crop_begin",
            Self::CropMove { .. } => "crop_move",
            Self::CropEnd => "crop_end",
            Self::ApplyCrop => "apply_crop",
            Self::CancelCrop => "cancel_crop",
            Self::Export => "export",
        }
    }
}

/// Run one command to completion against `state`.
///
/// Guard failures and draw failures never error: they come back as [`Outcome::Ignored`] or are
/// logged. Only export can fail.
#[tracing::instrument(level = "debug", skip_all, fields(cmd = cmd.name()))]
pub fn apply_command(state: &mut EditorState, cmd: Command) -> EditorResult<Outcome> {
    let outcome = match cmd {
        Command::LoadImage { bytes } => state.load_image(&bytes)?,
        Command::SetMode { mode } => state.set_mode(mode),
        Command::PointerDown { x, y } => state.pointer_down(Point::new(x, y)),
        Command::PointerMove { x, y } => state.pointer_move(Point::new(x, y)),
        Command::PointerUp => state.pointer_up(),
        Command::SetText { text } => state.set_text(&text),
        Command::BeginAdjust => state.begin_adjust(),
        Command::AdjustParam { change, at_ms } => {
            state.adjust_param(&change, Duration::from_millis(at_ms))
        }
        Command::EndAdjust => state.end_adjust(),
        Command::Tick { at_ms } => state.tick(Duration::from_millis(at_ms)),
        Command::Undo => state.undo(),
        Command::Redo => state.redo(),
        Command::Rotate { degrees } => state.rotate(degrees),
        Command::Flip { axis } => state.flip(axis),
        Command::ApplyFilter { filter } => state.apply_filter(filter),
        Command::StartCrop => state.start_crop(),
        Command::CropBegin { handle, x, y } => state.crop_begin(handle, Point::new(x, y)),
        Command::CropMove { x, y } => state.crop_move(Point::new(x, y)),
        Command::CropEnd => state.crop_end(),
        Command::ApplyCrop => state.apply_crop(),
        Command::CancelCrop => state.cancel_crop(),
        Command::Export => state.export()?,
    };
    if let Outcome::Recorded(action) | Outcome::Restored(action) = &outcome {
        tracing::debug!(
            action = action.as_str(),
            len = state.history().len(),
            cursor = ?state.history().cursor(),
            "history changed"
        );
    }
    Ok(outcome)
}

/// Run a sequence of commands, stopping at the first error.
pub fn apply_all(
    state: &mut EditorState,
    cmds: impl IntoIterator<Item = Command>,
) -> EditorResult<Vec<Outcome>> {
    cmds.into_iter()
        .map(|cmd| apply_command(state, cmd))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/editor/command.rs"]
mod tests;
