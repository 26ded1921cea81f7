//! Layout management and calculations

use crate::constants::{TOAST_WIDTH_LARGE, TOAST_WIDTH_MEDIUM, TOAST_WIDTH_SMALL};
use crate::toast::presenter::Position;
use crate::toast::ToastSize;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns kept free between the toast stack and the screen edge
const EDGE_MARGIN_X: u16 = 2;
const EDGE_MARGIN_Y: u16 = 1;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Width of a toast of `size`, shrunk to fit `area_width`
    #[must_use]
    pub fn toast_width(size: ToastSize, area_width: u16) -> u16 {
        let preferred = match size {
            ToastSize::Small => TOAST_WIDTH_SMALL,
            ToastSize::Medium => TOAST_WIDTH_MEDIUM,
            ToastSize::Large => TOAST_WIDTH_LARGE,
        };
        preferred.min(area_width.saturating_sub(EDGE_MARGIN_X * 2))
    }

    /// Place boxes of the given (width, height) as a stack anchored at `position`.
    ///
    /// The first box is the top of the stack for every corner. Boxes that no
    /// longer fit in `area` are dropped.
    #[must_use]
    pub fn stack_rects(area: Rect, position: Position, sizes: &[(u16, u16)]) -> Vec<Rect> {
        let usable_height = area.height.saturating_sub(EDGE_MARGIN_Y * 2);
        let mut fitting = Vec::new();
        let mut total_height: u16 = 0;
        for &(width, height) in sizes {
            if total_height.saturating_add(height) > usable_height {
                break;
            }
            total_height += height;
            fitting.push((width, height));
        }

        let mut y = if position.is_top() {
            area.y + EDGE_MARGIN_Y
        } else {
            (area.y + area.height).saturating_sub(EDGE_MARGIN_Y + total_height)
        };

        fitting
            .into_iter()
            .map(|(width, height)| {
                let x = if position.is_left() {
                    area.x + EDGE_MARGIN_X
                } else {
                    (area.x + area.width).saturating_sub(EDGE_MARGIN_X + width)
                };
                let rect = Rect::new(x, y, width, height);
                y += height;
                rect
            })
            .collect()
    }

    /// Number of rows `text` takes when wrapped at `width` columns
    #[must_use]
    pub fn wrapped_height(text: &str, width: u16) -> u16 {
        let width = usize::from(width.max(1));
        let rows: usize = text
            .lines()
            .map(|line| line.chars().count().div_ceil(width).max(1))
            .sum();
        u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
    }
}
