//! Player input applied to the view state.

use lookout_core::commands::HeldRotation;
use lookout_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use lookout_core::state::ViewState;
use lookout_core::types::ScreenPos;

/// Rotate the view one degree per held key.
pub fn apply_rotation(view: &mut ViewState, held: HeldRotation) {
    view.bearing = view.bearing.rotated(held.delta());
}

pub fn toggle_instrument(view: &mut ViewState) {
    view.instrument_open = !view.instrument_open;
}

/// Replace the aim point, clamped to the screen. No effect while the
/// instrument is closed.
pub fn apply_pointer(view: &mut ViewState, pointer: ScreenPos) {
    if view.instrument_open {
        view.aim_point = pointer.clamp(
            ScreenPos::ZERO,
            ScreenPos::new(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32),
        );
    }
}
