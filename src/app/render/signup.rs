use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::App;
use super::util::{centered_rect, inner_rect, text_window};

const PROMPT: &str = "> ";

fn signup_area(area: Rect) -> Rect {
    centered_rect(50, 8, area)
}

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let popup = signup_area(area);
    if popup.width < 20 || popup.height < 5 {
        return;
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.header_fg)),
        popup,
    );

    let inner = inner_rect(popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let field = &app.store.state().signup;
    let title_style = Style::default()
        .fg(app.theme.header_fg)
        .add_modifier(Modifier::BOLD);

    let prompt_w = PROMPT.width() as u16;
    let cursor = field.cursor.min(field.value.len());
    let (v_start, v_end) = text_window(
        field.value.as_str(),
        cursor,
        inner.width.saturating_sub(prompt_w) as usize,
    );
    let visible_value = field.value.get(v_start..v_end).unwrap_or_default();

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled("Start Quiz", title_style)));
    lines.push(Line::raw(""));
    lines.push(Line::raw("Enter Username:"));
    lines.push(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(app.theme.accent_fg)),
        Span::raw(visible_value),
    ]));

    if let Some(err) = field.error.as_deref() {
        lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(app.theme.error_fg),
        )));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(app.theme.accent_fg)),
        Span::raw(" Begin"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

pub(super) fn cursor_position(app: &App, area: Rect) -> Option<(u16, u16)> {
    let popup = signup_area(area);
    if popup.width < 20 || popup.height < 5 {
        return None;
    }

    let inner = inner_rect(popup);
    if inner.width == 0 || inner.height < 4 {
        return None;
    }

    let field = &app.store.state().signup;
    let cursor = field.cursor.min(field.value.len());
    let prompt_w = PROMPT.width() as u16;
    let (start, _end) = text_window(
        field.value.as_str(),
        cursor,
        inner.width.saturating_sub(prompt_w) as usize,
    );
    let before = field.value.get(start..cursor).unwrap_or_default();
    let before_w = before.width() as u16;

    let x = inner
        .x
        .saturating_add(prompt_w)
        .saturating_add(before_w)
        .min(inner.x + inner.width.saturating_sub(1));
    // Title, blank, label, then the input line.
    let y = inner.y.saturating_add(3);

    Some((x, y))
}
