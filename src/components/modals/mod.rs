pub mod helpers;
pub mod jump;
pub mod search;
pub mod shortcuts;

use crate::app::page::Focus;
use crate::app::state::AppState;
use crate::domain::page::{Dialog, Landmark, PageHost};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use helpers::dim_area;
use jump::JumpModal;
use search::SearchInput;
use shortcuts::ShortcutsModal;

pub struct ModalManager<'a> {
    pub app_state: &'a AppState,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;
        let theme = &state.theme;

        match state.page.dialog {
            Some(Dialog::Shortcuts) => {
                dim_area(buf, area);
                ShortcutsModal {
                    theme,
                    has_landmark: |landmark: Landmark| state.page.has_landmark(landmark),
                }
                .render(area, buf);
            }
            Some(Dialog::Jump) => {
                dim_area(buf, area);
                JumpModal {
                    theme,
                    state: &state.page.jump,
                }
                .render(area, buf);
            }
            None if state.page.focus == Focus::Search => {
                SearchInput {
                    theme,
                    text_area: &state.page.search,
                }
                .render(area, buf);
            }
            None => {}
        }
    }
}
