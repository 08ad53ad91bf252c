use crate::app::page::TerminalPage;
use crate::domain::models::{Element, ElementKind};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct PageView<'a> {
    pub page: &'a TerminalPage,
    pub highlight_class: &'a str,
    pub theme: &'a Theme,
}

impl<'a> PageView<'a> {
    fn base_style(&self, element: &Element) -> Style {
        match element.kind {
            ElementKind::Heading => self.theme.heading,
            ElementKind::Code => self.theme.code,
            ElementKind::Text | ElementKind::Marker => self.theme.text,
        }
    }

    /// One entry per layout line, in the same order the page computes offsets.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let page = self.page;
        let mut lines = Vec::new();
        for (idx, element) in page.document.elements.iter().enumerate() {
            if element.line_count() == 0 {
                continue;
            }
            let mut style = self.base_style(element);
            if element.has_class(self.highlight_class) {
                style = style.patch(self.theme.highlight);
            }

            let mut text_lines = element.text.lines();
            let first = text_lines.next().unwrap_or_default();
            let mut spans = vec![Span::styled(first, style)];
            if element.is_collapsed() {
                spans.push(Span::styled(" ▸", self.theme.collapsed));
            }
            if let Some(ago) = page.relative_times.get(&idx) {
                spans.push(Span::styled(format!("  {ago}"), self.theme.timestamp));
            }
            lines.push(Line::from(spans));

            if !element.is_collapsed() {
                lines.extend(text_lines.map(|text| Line::from(Span::styled(text, style))));
            }
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .lines()
            .into_iter()
            .skip(self.page.scroll as usize)
            .take(area.height as usize)
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}
