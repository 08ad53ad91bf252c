use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;
use crate::components::page_view::PageView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let now = app_state.now_ms();

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        let header = Header {
            title: &app_state.page.document.title,
            fragment: &app_state.fragment,
            pending_chord: app_state.controller.pending_chord(now),
            theme: &app_state.theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Body: the page ---
    let theme = &app_state.theme;
    let percent = if app_state.page.max_scroll() == 0 {
        100
    } else {
        u64::from(app_state.page.scroll) * 100 / u64::from(app_state.page.max_scroll())
    };
    let page_block = Block::default()
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{percent}%"), theme.header_item),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border);
    let inner = page_block.inner(layout.body);

    // The page scrolls in units of the visible body.
    app_state.page.viewport = inner.height;
    if app_state.page.scroll > app_state.page.max_scroll() && !app_state.page.is_animating() {
        app_state.page.scroll = app_state.page.max_scroll();
    }

    let theme = &app_state.theme;
    if layout.body.width > 0 && layout.body.height > 0 {
        f.render_widget(page_block, layout.body);
        f.render_widget(
            PageView {
                page: &app_state.page,
                highlight_class: &app_state.highlight_class,
                theme,
            },
            inner,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(Footer { state: app_state }, layout.footer);
    }

    // --- Dialogs ---
    f.render_widget(ModalManager { app_state }, f.area());
}
