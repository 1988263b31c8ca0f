use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::App;
use super::util::{centered_rect, inner_rect, text_window};

use crate::kernel::AuthoringField;

/// Field labels are padded to a fixed column so the values line up and the
/// cursor x can be computed without measuring the label.
const LABEL_WIDTH: usize = 22;
const FOCUS_PREFIX: &str = "> ";
const FIRST_FIELD_ROW: u16 = 2;

fn authoring_area(area: Rect) -> Rect {
    centered_rect(70, 13, area)
}

fn value_width(inner: Rect) -> usize {
    (inner.width as usize).saturating_sub(FOCUS_PREFIX.len() + LABEL_WIDTH)
}

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let popup = authoring_area(area);
    if popup.width < 40 || popup.height < 12 {
        return;
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_fg)),
        popup,
    );

    let inner = inner_rect(popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let form = &app.store.state().authoring;
    let title_style = Style::default()
        .fg(app.theme.header_fg)
        .add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(app.theme.accent_fg);
    let muted = Style::default().fg(app.theme.muted_fg);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "Create Your Own Quiz Questions",
        title_style,
    )));
    lines.push(Line::raw(""));

    let width = value_width(inner);
    for field_id in AuthoringField::ALL {
        let input = form.field(field_id);
        let focused = form.focus == field_id;
        let cursor = input.cursor.min(input.value.len());
        let (v_start, v_end) = text_window(input.value.as_str(), cursor, width);
        let visible = input.value.get(v_start..v_end).unwrap_or_default();

        let prefix = if focused { FOCUS_PREFIX } else { "  " };
        let label_style = if focused { accent } else { muted };
        lines.push(Line::from(vec![
            Span::styled(prefix, accent),
            Span::styled(
                format!("{:<width$}", field_id.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::raw(visible),
        ]));
    }

    lines.push(Line::raw(""));
    if let Some(err) = form.error.as_deref() {
        lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(app.theme.error_fg),
        )));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter]", accent),
        Span::raw(" Add  "),
        Span::styled("[Tab]", accent),
        Span::raw(" Next Field  "),
        Span::styled("[Ctrl+L]", accent),
        Span::raw(" Clear  "),
        Span::styled("[Esc]", muted),
        Span::raw(" Done"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

pub(super) fn cursor_position(app: &App, area: Rect) -> Option<(u16, u16)> {
    let popup = authoring_area(area);
    if popup.width < 40 || popup.height < 12 {
        return None;
    }

    let inner = inner_rect(popup);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let form = &app.store.state().authoring;
    let input = form.field(form.focus);
    let cursor = input.cursor.min(input.value.len());
    let (start, _end) = text_window(input.value.as_str(), cursor, value_width(inner));
    let before = input.value.get(start..cursor).unwrap_or_default();
    let before_w = before.width() as u16;

    let x = inner
        .x
        .saturating_add((FOCUS_PREFIX.len() + LABEL_WIDTH) as u16)
        .saturating_add(before_w)
        .min(inner.x + inner.width.saturating_sub(1));
    let y = inner
        .y
        .saturating_add(FIRST_FIELD_ROW)
        .saturating_add(form.focus.index() as u16);

    Some((x, y))
}
