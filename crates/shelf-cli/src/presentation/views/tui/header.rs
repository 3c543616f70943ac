//! Header View Component
//!
//! Centered screen title with the refresh indicator on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::InventoryScreenViewModel;

pub struct HeaderView<'a> {
    model: &'a InventoryScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a InventoryScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Paragraph::new(Line::from(Span::styled(
            self.model.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(inner, buf);

        if self.model.refresh.visible {
            let indicator = Paragraph::new(Line::from(Span::styled(
                "⟳ refreshing ",
                Style::default().fg(Color::Cyan),
            )))
            .alignment(Alignment::Right);
            indicator.render(inner, buf);
        }
    }
}
