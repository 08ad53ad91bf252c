use crate::app::page::JumpDialogState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::{centered_rect, dialog_block, draw_drop_shadow};

pub struct JumpModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a JumpDialogState,
}

impl Widget for JumpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 50, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = dialog_block(" JUMP TO IDENTIFIER ", self.theme);
        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Matches
            ])
            .split(inner_area);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(self.state.query(), self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        if self.state.matches.is_empty() {
            let hint = if self.state.query().trim().is_empty() {
                "  No identifiers on this page."
            } else {
                "  No match. Enter jumps to the typed name."
            };
            let line = Line::from(Span::styled(
                hint,
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            if layout[2].height > 1 {
                buf.set_line(layout[2].x, layout[2].y + 1, &line, layout[2].width);
            }
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .map(|name| ListItem::new(Line::from(format!("  {name}"))))
            .collect();
        let list = List::new(items)
            .style(self.theme.list_item)
            .highlight_style(self.theme.list_selected);
        let mut list_state = ListState::default().with_selected(Some(self.state.selected));
        StatefulWidget::render(list, layout[2], buf, &mut list_state);
    }
}
