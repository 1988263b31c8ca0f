//! UI colors, collected in one place instead of scattered through the
//! renderers.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_fg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
    pub border_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Indexed(6), // Cyan
            accent_fg: Color::Indexed(3), // Yellow
            error_fg: Color::Indexed(1),  // Red
            muted_fg: Color::Indexed(8),  // DarkGray
            border_fg: Color::Indexed(8), // DarkGray
        }
    }
}
