//! Status message rendering.

use crate::state::DisplayState;

/// Render a status message that replaces the whole mount.
pub fn render_state(state: DisplayState) -> String {
    format!(
        "<div class=\"state {}\">{}</div>\n",
        state.kind(),
        state.message()
    )
}
