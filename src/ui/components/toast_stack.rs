//! Toast stack component
//!
//! Draws the presenter's visible toasts (and those still exiting) as a stack
//! anchored at the configured corner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::toast::{ExpandDescription, Phase, PresentedToast, ToastId, ToastLayout, ToastPresenter, ToastSize};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{parse_css_color, variant_accent};

/// Rows taken by the title tab of the tab layout
const TAB_HEIGHT: u16 = 3;

/// Toast stack component
pub struct ToastStack;

impl ToastStack {
    /// Render the stack and return the screen area of each visible toast,
    /// used for mouse hit testing.
    pub fn render(f: &mut Frame, area: Rect, presenter: &ToastPresenter, icons: &IconService) -> Vec<(ToastId, Rect)> {
        let toasts: Vec<&PresentedToast> = presenter.visible().iter().chain(presenter.exiting()).collect();
        let sizes: Vec<(u16, u16)> = toasts.iter().map(|t| Self::measure(t, area.width)).collect();
        let rects = LayoutManager::stack_rects(area, presenter.config().position, &sizes);

        let mut hit_areas = Vec::new();
        for (index, (toast, rect)) in toasts.iter().zip(rects).enumerate() {
            match toast.effective.layout {
                ToastLayout::Default => Self::render_default(f, rect, toast, icons, index == 0),
                ToastLayout::Tab => Self::render_tab(f, rect, toast, icons, presenter.config().position.is_left()),
            }
            if toast.phase != Phase::Exiting {
                hit_areas.push((toast.id(), rect));
            }
        }
        hit_areas
    }

    /// Width and height of a toast, in cells
    #[must_use]
    pub fn measure(toast: &PresentedToast, area_width: u16) -> (u16, u16) {
        let width = LayoutManager::toast_width(toast.effective.size, area_width);
        let inner_width = width.saturating_sub(2 + 2 * Self::padding(toast.effective.size));
        let description_rows = match (&toast.record.description, toast.is_expanded()) {
            (Some(description), true) => LayoutManager::wrapped_height(description, inner_width),
            _ => 0,
        };

        let height = match toast.effective.layout {
            ToastLayout::Default => 3 + description_rows,
            ToastLayout::Tab if description_rows > 0 => TAB_HEIGHT + description_rows + 1,
            ToastLayout::Tab => TAB_HEIGHT,
        };
        (width, height)
    }

    fn padding(size: ToastSize) -> u16 {
        match size {
            ToastSize::Small => 0,
            ToastSize::Medium => 1,
            ToastSize::Large => 2,
        }
    }

    fn base_style(toast: &PresentedToast) -> Style {
        let style = &toast.effective.style;
        let mut base = Style::default();
        if let Some(bg) = style.bg.as_deref().and_then(parse_css_color) {
            base = base.bg(bg);
        }
        if let Some(fg) = style.fg.as_deref().and_then(parse_css_color) {
            base = base.fg(fg);
        }
        if toast.phase == Phase::Exiting {
            base = base.add_modifier(Modifier::DIM);
        }
        base
    }

    fn border_style(toast: &PresentedToast) -> Style {
        let color = toast
            .effective
            .style
            .border_color
            .as_deref()
            .and_then(parse_css_color)
            .unwrap_or_else(|| variant_accent(toast.effective.variant));
        let style = Style::default().fg(color);
        if toast.phase == Phase::Entering {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn border_type(toast: &PresentedToast) -> BorderType {
        if toast.effective.border_radius > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    fn title_line(toast: &PresentedToast, icons: &IconService) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(icon) = icons.variant(toast.effective.variant) {
            spans.push(Span::styled(
                format!("{icon} "),
                Style::default().fg(variant_accent(toast.effective.variant)),
            ));
        }

        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if toast.phase == Phase::Exiting {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(toast.record.title.clone(), title_style));

        if toast.record.has_description() && toast.effective.expand_description == ExpandDescription::Hover {
            spans.push(Span::styled(
                format!(" {}", icons.expand_hint(toast.is_expanded())),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if toast.effective.duration.is_none() {
            spans.push(Span::styled(
                format!(" {}", icons.sticky()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn description_lines(toast: &PresentedToast) -> Vec<Line<'static>> {
        match (&toast.record.description, toast.is_expanded()) {
            (Some(description), true) => description
                .lines()
                .map(|line| Line::styled(line.to_string(), Style::default().fg(Color::Gray)))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn render_default(f: &mut Frame, rect: Rect, toast: &PresentedToast, icons: &IconService, is_top: bool) {
        let mut border_style = Self::border_style(toast);
        if is_top && toast.hovered {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Self::border_type(toast))
            .border_style(border_style)
            .padding(Padding::horizontal(Self::padding(toast.effective.size)));

        let mut lines = vec![Self::title_line(toast, icons)];
        lines.extend(Self::description_lines(toast));

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(Self::base_style(toast))
                .wrap(Wrap { trim: true }),
            rect,
        );
    }

    /// Title in a small tab, description in a body block underneath
    fn render_tab(f: &mut Frame, rect: Rect, toast: &PresentedToast, icons: &IconService, tab_on_left: bool) {
        let title = Self::title_line(toast, icons);
        let tab_width = (u16::try_from(title.width()).unwrap_or(u16::MAX) + 4).min(rect.width);
        let tab_x = if tab_on_left {
            rect.x
        } else {
            rect.x + rect.width - tab_width
        };
        let tab_rect = Rect::new(tab_x, rect.y, tab_width, TAB_HEIGHT.min(rect.height));

        let description = Self::description_lines(toast);
        let show_body = !description.is_empty();

        let tab_borders = if show_body {
            Borders::TOP | Borders::LEFT | Borders::RIGHT
        } else {
            Borders::ALL
        };
        let tab = Block::default()
            .borders(tab_borders)
            .border_type(Self::border_type(toast))
            .border_style(Self::border_style(toast))
            .padding(Padding::horizontal(1));

        f.render_widget(Clear, tab_rect);
        f.render_widget(Paragraph::new(title).block(tab).style(Self::base_style(toast)), tab_rect);

        if show_body {
            let body_y = rect.y + TAB_HEIGHT - 1;
            let body_rect = Rect::new(rect.x, body_y, rect.width, rect.height.saturating_sub(TAB_HEIGHT - 1));
            let body = Block::default()
                .borders(Borders::ALL)
                .border_type(Self::border_type(toast))
                .border_style(Self::border_style(toast))
                .padding(Padding::horizontal(Self::padding(toast.effective.size)));

            f.render_widget(Clear, body_rect);
            f.render_widget(
                Paragraph::new(description)
                    .block(body)
                    .style(Self::base_style(toast))
                    .wrap(Wrap { trim: true }),
                body_rect,
            );
        }
    }
}
