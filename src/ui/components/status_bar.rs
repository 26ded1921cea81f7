//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let presenter = &app.presenter;
        let config = presenter.config();

        let status_text = format!(
            "{} shown • {} queued • cap {} • {} • {:?} layout • {:?} expand • size {} • l: logs • q: quit",
            presenter.visible().len(),
            presenter.queued(),
            config.max_visible,
            config.position.name(),
            config.layout.unwrap_or_default(),
            config.expand_description.unwrap_or_default(),
            config.size.unwrap_or_default().name(),
        );

        let status_color = if presenter.queued() > 0 {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
