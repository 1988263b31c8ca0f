use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::super::App;
use super::util::{centered_rect, inner_rect};

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 9, area);
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

    let title_style = Style::default()
        .fg(app.theme.header_fg)
        .add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(app.theme.accent_fg);
    let muted = Style::default().fg(app.theme.muted_fg);

    let lines = vec![
        Line::from(Span::styled("Quiz App", title_style)),
        Line::raw(""),
        Line::raw("Take a quiz, or write questions of your own."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[s]", accent),
            Span::raw(" Start Quiz   "),
            Span::styled("[c]", accent),
            Span::raw(" Create Questions   "),
            Span::styled("[q]", muted),
            Span::raw(" Quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
