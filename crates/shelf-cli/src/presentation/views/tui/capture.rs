//! Capture View Component
//!
//! Stand-in for the product capture screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CaptureScreenViewModel;

pub struct CaptureView<'a> {
    model: &'a CaptureScreenViewModel,
}

impl<'a> CaptureView<'a> {
    pub fn new(model: &'a CaptureScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CaptureView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);

        let lines = vec![
            Line::default(),
            Line::from(self.model.message.as_str()),
            Line::default(),
            Line::styled(
                self.model.hint.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
