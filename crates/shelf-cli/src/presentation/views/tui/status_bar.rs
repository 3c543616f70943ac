//! Status Bar View Component
//!
//! Renders the bottom bar with the product count, store status and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::InventoryScreenViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a InventoryScreenViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a InventoryScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = &self.model.status_bar;
        let color = status_level_to_color(status.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("Products: {} ", status.product_count)),
            Span::raw("| "),
            Span::styled(status.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[s]", key),
            Span::raw(format!(" {} ", self.model.scan_action_label)),
            Span::styled("[r]", key),
            Span::raw("efresh "),
            Span::styled("[⏎]", key),
            Span::raw("expand "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
