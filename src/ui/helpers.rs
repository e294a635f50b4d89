//! Shared rendering utilities.
//!
//! Width calculations operate on characters, not bytes, so titles and author
//! names with non-ASCII letters line up in the grid.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed)
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `width` characters, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use bookgrid::ui::helpers::truncate;
///
/// assert_eq!(truncate("Neuromancer", 6), "Neuro…");
/// assert_eq!(truncate("Dune", 6), "Dune");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates and right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(char_width(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Centers `text` in `width` characters; extra space goes to the right.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = char_width(&cut);
    let left = (width.saturating_sub(len)) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{cut}{}", " ".repeat(left), " ".repeat(right))
}

/// Greedy word wrap to lines of at most `width` characters. Words longer
/// than `width` are truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if line.is_empty() {
            char_width(&word)
        } else {
            char_width(&line) + 1 + char_width(&word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Łódź story", 5), "Łódź…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn fit_and_center_fill_width() {
        assert_eq!(fit("Dune", 6), "Dune  ");
        assert_eq!(char_width(&fit("The Left Hand of Darkness", 10)), 10);
        assert_eq!(center("ab", 7), "  ab   ");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("A stark desert planet and its spice", 12);
        assert_eq!(lines, vec!["A stark", "desert", "planet and", "its spice"]);
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("incomprehensibilities", 5), vec!["inco…"]);
    }
}
