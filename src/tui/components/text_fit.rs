//! Fitting headline and pun text into one terminal row.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Collapses `text` to a single line and shortens it to `max_width` columns.
///
/// Whitespace runs, including newlines, become single spaces. Text that does
/// not fit ends with `…`. Widths are terminal columns, so wide characters
/// count double.
pub(crate) fn fit_to_width(text: &str, max_width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.width() <= max_width {
        return collapsed;
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut fitted = String::new();
    let mut used = 0_usize;
    for ch in collapsed.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > budget {
            break;
        }
        fitted.push(ch);
        used = used.saturating_add(char_width);
    }
    fitted.push(ELLIPSIS);
    fitted
}
