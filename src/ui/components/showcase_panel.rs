//! Showcase body: key bindings and live presenter state

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use crate::constants::SHOWCASE_TITLE;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("1-5", "add default / success / error / warning / info toast"),
    ("s", "add a sticky toast (never auto-dismisses)"),
    ("x", "dismiss newest toast"),
    ("c", "clear all toasts"),
    ("t", "toggle default layout (default / tab)"),
    ("o", "toggle default description mode (hover / open)"),
    ("p", "cycle anchor corner"),
    ("z", "cycle default size"),
    ("+ / -", "raise / lower the visible cap"),
    ("i", "cycle icon theme"),
    ("l", "toggle log panel"),
    ("mouse", "hover to expand, click to dismiss"),
    ("q", "quit"),
];

pub struct ShowcasePanel;

impl ShowcasePanel {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let mut lines = vec![Line::from("")];
        for (key, description) in KEY_BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{key:>7}  "),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Color::Gray)),
            ]));
        }

        lines.push(Line::from(""));
        for toast in app.presenter.visible() {
            let remaining = app
                .presenter
                .timers()
                .remaining(toast.id())
                .map(|d| format!("{:.1}s", d.as_secs_f32()))
                .unwrap_or_else(|| "sticky".to_string());
            lines.push(Line::styled(
                format!("  {}  {:<24} {:?}  {}", toast.id(), toast.record.title, toast.phase, remaining),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(SHOWCASE_TITLE)
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }
}
