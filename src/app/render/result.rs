use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::App;
use super::util::{centered_rect, inner_rect};

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(view) = app.store.state().result_view() else {
        return;
    };

    let popup = centered_rect(60, 8, area);
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

    let title_style = Style::default()
        .fg(app.theme.header_fg)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Quiz Completed!", title_style)),
        Line::raw(""),
        Line::raw(format!(
            "Thank you, {}! Your score: {} out of {}.",
            view.username, view.score, view.total
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[r]", Style::default().fg(app.theme.accent_fg)),
            Span::raw(" Restart  "),
            Span::styled("[q]", Style::default().fg(app.theme.muted_fg)),
            Span::raw(" Quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
