use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::App;
use super::util::{centered_rect, inner_rect};

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(view) = app.store.state().question_view() else {
        return;
    };

    let popup = centered_rect(70, 14, area);
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

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{}. {}", view.ordinal, view.text),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    for (index, option) in view.options.iter().enumerate() {
        let selected = view.selected == Some(index);
        let marker = if selected { "(x)" } else { "( )" };
        let style = if selected {
            Style::default().fg(app.theme.accent_fg)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}) {option}", index + 1),
            style,
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[1-4]", Style::default().fg(app.theme.accent_fg)),
        Span::raw(" Select  "),
        Span::styled("[Up/Down]", Style::default().fg(app.theme.accent_fg)),
        Span::raw(" Move  "),
        Span::styled("[Enter]", Style::default().fg(app.theme.accent_fg)),
        Span::raw(" Next"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
