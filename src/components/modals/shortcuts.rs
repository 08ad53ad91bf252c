use crate::app::chord::{Binding, CHORD_BINDINGS, KEY_BINDINGS};
use crate::domain::page::Landmark;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Span,
    widgets::{Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, dialog_block, draw_drop_shadow};

const PAGE_KEYS: &[(&str, &str)] = &[
    (" j / k", "Scroll line down / up"),
    (" Space / PgUp", "Scroll page down / up"),
    (" Home / End", "Top / bottom, no animation"),
    (" q", "Quit"),
];

pub struct ShortcutsModal<'a, F: Fn(Landmark) -> bool> {
    pub theme: &'a Theme,
    /// Bindings whose landmark is missing from the page are shown dimmed.
    pub has_landmark: F,
}

impl<F: Fn(Landmark) -> bool> ShortcutsModal<'_, F> {
    fn category(&self, name: &'static str) -> Row<'static> {
        Row::new(vec![
            Cell::from(Span::styled(name, self.theme.header_item)),
            Cell::from(""),
        ])
    }

    fn binding_row(&self, binding: &Binding) -> Row<'static> {
        let available = binding.requires.map_or(true, &self.has_landmark);
        let (key_style, desc_style) = if available {
            (self.theme.footer_segment_key, self.theme.list_item)
        } else {
            (
                self.theme.list_item.add_modifier(Modifier::DIM),
                self.theme.list_item.add_modifier(Modifier::DIM),
            )
        };
        let keys = binding
            .keys
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        Row::new(vec![
            Cell::from(Span::styled(format!(" {keys}"), key_style)),
            Cell::from(Span::styled(binding.description, desc_style)),
        ])
    }
}

impl<F: Fn(Landmark) -> bool> Widget for ShortcutsModal<'_, F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 70, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let mut rows = vec![self.category("Go to")];
        rows.extend(CHORD_BINDINGS.iter().map(|b| self.binding_row(b)));
        rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));

        rows.push(self.category("Page"));
        rows.extend(KEY_BINDINGS.iter().map(|b| self.binding_row(b)));
        rows.extend(PAGE_KEYS.iter().map(|(keys, desc)| {
            Row::new(vec![
                Cell::from(Span::styled(*keys, self.theme.footer_segment_key)),
                Cell::from(Span::styled(*desc, self.theme.list_item)),
            ])
        }));
        rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        rows.push(Row::new(vec![
            Cell::from(Span::styled(" Esc", self.theme.footer_segment_key)),
            Cell::from(Span::styled("Close this dialog", self.theme.list_item)),
        ]));

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(dialog_block(" KEYBOARD SHORTCUTS ", self.theme))
            .render(modal_area, buf);
    }
}
