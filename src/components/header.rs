use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub title: &'a str,
    pub fragment: &'a str,
    /// First key of a chord still waiting for its second key.
    pub pending_chord: Option<char>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" DOCNAV ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(base_bg)),
            Span::styled(format!(" {} ", self.title), self.theme.header),
        ];

        if !self.fragment.is_empty() {
            spans.push(Span::styled(format!("#{} ", self.fragment), self.theme.header_item));
        }

        if let Some(key) = self.pending_chord {
            spans.push(Span::styled(format!(" {key}… "), self.theme.header_active));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
