//! Screen renderers. Each screen draws a centered panel; the cursor is only
//! placed while a text field has focus.

mod authoring;
mod quiz;
mod result;
mod signup;
mod util;
mod welcome;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::kernel::Screen;

use super::App;

pub(super) fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    match app.store.state().screen {
        Screen::Welcome => welcome::render(app, frame, area),
        Screen::Signup => signup::render(app, frame, area),
        Screen::Quiz => quiz::render(app, frame, area),
        Screen::Result => result::render(app, frame, area),
        Screen::Authoring => authoring::render(app, frame, area),
    }

    render_notice(app, frame, area);

    let cursor = match app.store.state().screen {
        Screen::Signup => signup::cursor_position(app, area),
        Screen::Authoring => authoring::cursor_position(app, area),
        _ => None,
    };
    if let Some((x, y)) = cursor {
        frame.set_cursor_position((x, y));
    }
}

fn render_notice(app: &App, frame: &mut Frame, area: Rect) {
    let Some(notice) = app.store.state().notice.as_deref() else {
        return;
    };
    if area.height < 2 {
        return;
    }

    let style = if notice.starts_with("Error") {
        Style::default().fg(app.theme.error_fg)
    } else {
        Style::default().fg(app.theme.accent_fg)
    };
    let line = Line::from(Span::styled(notice, style));
    let notice_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(Paragraph::new(line), notice_area);
}

#[cfg(test)]
#[path = "../../../tests/unit/app/render.rs"]
mod tests;
