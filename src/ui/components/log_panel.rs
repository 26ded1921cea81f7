//! Log panel component

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::LOG_PANEL_TITLE;

/// Log panel component
pub struct LogPanel;

impl LogPanel {
    /// Render the in-memory log, newest first
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(70, 60, f.area());
        f.render_widget(Clear, area);

        let lines: Vec<Line> = app.logger.get_logs().into_iter().map(Line::from).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(LOG_PANEL_TITLE)
            .style(Style::default().fg(Color::Cyan));

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
