//! Product Item View
//!
//! Turns one `ProductRowViewModel` into the lines of a list entry:
//!
//! ```text
//! ▣ Cordless Drill                              NEW  ▾
//!   05.01.2024
//! ```
//!
//! Expanded rows add the image reference and the category tags.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::presentation::formatters::{truncate_with_ellipsis, wrap_tags};
use crate::presentation::view_models::{ImageViewModel, ProductRowViewModel};

const NEW_BADGE: &str = " NEW ";
const COLLAPSED_GLYPH: &str = "▾";
const EXPANDED_GLYPH: &str = "▴";
const INDENT: &str = "  ";

pub struct ProductItemView<'a> {
    model: &'a ProductRowViewModel,
}

impl<'a> ProductItemView<'a> {
    pub fn new(model: &'a ProductRowViewModel) -> Self {
        Self { model }
    }

    /// Lines for a row rendered `width` columns wide.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let row = self.model;
        let mut lines = vec![self.title_line(width)];

        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                row.posted.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));

        if row.expanded {
            let image = match &row.image {
                ImageViewModel::Remote { uri } => uri.clone(),
                ImageViewModel::Placeholder => "placeholder image".to_string(),
            };
            let image_width = width.saturating_sub(INDENT.len());
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    truncate_with_ellipsis(&image, image_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            let tag_style = Style::default().fg(Color::Black).bg(Color::LightBlue);
            for tag_line in wrap_tags(&row.categories, width.saturating_sub(INDENT.len())) {
                let mut spans = vec![Span::raw(INDENT)];
                for (i, cell) in tag_line.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::styled(cell, tag_style));
                }
                lines.push(Line::from(spans));
            }
        }

        lines.push(Line::default());
        lines
    }

    pub fn list_item(&self, width: usize) -> ListItem<'static> {
        ListItem::new(self.lines(width))
    }

    fn title_line(&self, width: usize) -> Line<'static> {
        let row = self.model;

        let marker = match row.image {
            ImageViewModel::Remote { .. } => "▣ ",
            ImageViewModel::Placeholder => "□ ",
        };
        let glyph = if row.expanded {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        };

        // badge, one space, glyph
        let right_width = if row.is_new {
            NEW_BADGE.chars().count() + 2
        } else {
            1
        };

        let name_width = width.saturating_sub(2 + right_width + 1);
        let name = truncate_with_ellipsis(&row.name, name_width);
        let padding = width
            .saturating_sub(2 + name.chars().count() + right_width)
            .max(1);

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
        ];
        if row.is_new {
            spans.push(Span::styled(
                NEW_BADGE,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(glyph));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(is_new: bool, expanded: bool) -> ProductRowViewModel {
        ProductRowViewModel {
            id: "p1".to_string(),
            name: "Cordless Drill".to_string(),
            image: ImageViewModel::Placeholder,
            posted: "05.01.2024".to_string(),
            is_new,
            categories: vec!["Tools".to_string(), "Power Tools".to_string()],
            expanded,
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_collapsed_row_has_title_date_and_spacer() {
        let model = row(false, false);
        let lines = ProductItemView::new(&model).lines(40);

        assert_eq!(lines.len(), 3);
        assert!(text(&lines[0]).starts_with("□ Cordless Drill"));
        assert!(text(&lines[0]).ends_with("▾"));
        assert!(!text(&lines[0]).contains("NEW"));
        assert_eq!(text(&lines[1]), "  05.01.2024");
        assert_eq!(text(&lines[2]), "");
    }

    #[test]
    fn test_title_line_fills_width() {
        let model = row(true, false);
        let lines = ProductItemView::new(&model).lines(40);

        let title = text(&lines[0]);
        assert_eq!(title.chars().count(), 40);
        assert!(title.ends_with(" NEW  ▾"));
    }

    #[test]
    fn test_expanded_row_shows_image_and_tags() {
        let model = row(false, true);
        let lines = ProductItemView::new(&model).lines(40);

        assert!(text(&lines[0]).ends_with("▴"));
        assert_eq!(text(&lines[2]), "  placeholder image");
        assert_eq!(text(&lines[3]), "   Tools   Power Tools ");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let mut model = row(true, false);
        model.name = "Extremely Long Product Name For A Narrow Terminal".to_string();
        let lines = ProductItemView::new(&model).lines(30);

        let title = text(&lines[0]);
        assert!(title.contains('…'));
        assert_eq!(title.chars().count(), 30);
    }
}
