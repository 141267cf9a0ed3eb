//! Shared window-manager helpers used by the desktop reducer.

use crate::model::{DesktopState, Position, ResizeEdge, Size, WindowId, WindowRecord};

/// Hands out the next stacking value. Every call advances the counter by exactly one.
pub fn next_z_index(state: &mut DesktopState) -> u32 {
    state.top_z_index += 1;
    state.top_z_index
}

/// Raises `window_id` above every other window and makes it the active window.
///
/// Returns `false` when the window is not present.
pub fn raise_and_activate(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if !state.is_open(window_id) {
        return false;
    }
    let z_index = next_z_index(state);
    if let Some(window) = window_mut(state, window_id) {
        window.z_index = z_index;
    }
    state.active_window_id = Some(window_id.clone());
    true
}

pub fn window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Clears the active window id if it refers to `window_id`.
pub fn release_focus(state: &mut DesktopState, window_id: &WindowId) {
    if state.active_window_id.as_ref() == Some(window_id) {
        state.active_window_id = None;
    }
}

/// Window position for a drag, clamped so the title bar cannot leave the top-left edge.
pub fn drag_position(pointer: Position, offset: Position) -> Position {
    Position {
        x: (pointer.x - offset.x).max(0),
        y: (pointer.y - offset.y).max(0),
    }
}

/// Applies a resize delta along `edge`, never shrinking below `min_size`.
pub fn resize_size(
    start: Size,
    edge: ResizeEdge,
    pointer_start: Position,
    pointer: Position,
    min_size: Size,
) -> Size {
    let dx = pointer.x - pointer_start.x;
    let dy = pointer.y - pointer_start.y;
    let resized = match edge {
        ResizeEdge::East => Size {
            width: start.width + dx,
            ..start
        },
        ResizeEdge::South => Size {
            height: start.height + dy,
            ..start
        },
        ResizeEdge::SouthEast => Size {
            width: start.width + dx,
            height: start.height + dy,
        },
    };
    resized.clamped_min(min_size)
}
