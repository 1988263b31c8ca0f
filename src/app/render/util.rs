use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

pub(super) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let min_width = 10.min(area.width);
    let width = width.max(min_width).min(area.width);

    let min_height = 3.min(area.height);
    let height = height.max(min_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

pub(super) fn inner_rect(popup: Rect) -> Rect {
    Rect::new(
        popup.x.saturating_add(1),
        popup.y.saturating_add(1),
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    )
}

/// Byte window `[start, end)` of `text` that fits `width` display cells and
/// keeps `cursor` inside it. Both ends land on char boundaries.
pub(super) fn text_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let cursor = clamp_to_char_boundary(text, cursor);
    if width == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    // One cell stays free so the cursor can sit past the last character.
    let budget = width.saturating_sub(1).max(1);

    let mut start = cursor;
    let mut used = 0usize;
    for (idx, ch) in text[..cursor].char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    let mut end = cursor;
    let mut remaining = width.saturating_sub(used);
    for (idx, ch) in text[cursor..].char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w > remaining {
            break;
        }
        remaining -= w;
        end = cursor + idx + ch.len_utf8();
    }

    (start, end)
}

fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
