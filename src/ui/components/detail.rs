//! Book detail overlay renderer.

use super::{box_inner_width, render_box, BoxLine, LineStyle};
use crate::ui::helpers::wrap;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailOverlayInfo;

/// Most description lines shown before the overlay is cut off.
const MAX_DESCRIPTION_LINES: usize = 8;

/// Renders the detail overlay: cover source, title, `author (year)`
/// subtitle, and the word-wrapped description.
pub fn render_detail_overlay(detail: &DetailOverlayInfo, theme: &Theme, cols: usize) {
    let width = box_inner_width(cols);
    let mut lines = vec![
        BoxLine {
            text: detail.image.clone(),
            style: LineStyle::Dim,
        },
        BoxLine {
            text: detail.title.clone(),
            style: LineStyle::Bold,
        },
        BoxLine {
            text: detail.subtitle.clone(),
            style: LineStyle::Normal,
        },
        BoxLine {
            text: String::new(),
            style: LineStyle::Normal,
        },
    ];
    lines.extend(
        wrap(&detail.description, width)
            .into_iter()
            .take(MAX_DESCRIPTION_LINES)
            .map(|text| BoxLine {
                text,
                style: LineStyle::Normal,
            }),
    );
    render_box(" Details ", &lines, theme, cols);
}
