use crate::app::page::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use super::helpers::{dialog_block, draw_drop_shadow, top_rect_fixed_height};

/// The page's search box. Not a dialog: it takes focus without making the
/// page modal.
pub struct SearchInput<'a> {
    pub theme: &'a Theme,
    pub text_area: &'a AppTextArea,
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input_area = top_rect_fixed_height(60, 3, area);
        if input_area.width == 0 || input_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, input_area, area);
        Clear.render(input_area, buf);

        let block = dialog_block(" SEARCH ", self.theme);
        let inner_area = block.inner(input_area);
        block.render(input_area, buf);

        if inner_area.width > 0 && inner_area.height > 0 {
            Widget::render(self.text_area, inner_area, buf);
        }
    }
}
