//! Settings overlay renderer.

use super::search::form_line;
use super::{render_box, BoxLine, LineStyle};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsOverlayInfo;

/// Renders the settings form with its single theme selector.
pub fn render_settings_overlay(settings: &SettingsOverlayInfo, theme: &Theme, cols: usize) {
    let lines = [
        form_line(&settings.theme),
        BoxLine {
            text: String::new(),
            style: LineStyle::Normal,
        },
        BoxLine {
            text: "Enter saves, Esc cancels".to_string(),
            style: LineStyle::Dim,
        },
    ];
    render_box(" Settings ", &lines, theme, cols);
}
