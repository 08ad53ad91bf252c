use crate::app::{
    action::Action,
    chord::KeyEvent,
    dispatcher::Deferred,
    features::jump,
    page::Focus,
    state::AppState,
    task::Task,
};
use crate::domain::page::{Dialog, PageHost};
use crossterm::event::{KeyCode, KeyEvent as TermKey};
use std::time::Duration;

const LINE_STEP: i64 = 1;

/// A printable keystroke: the chord interpreter sees it first, the focused
/// control gets it only when the interpreter leaves it alone.
pub fn handle_keypress(state: &mut AppState, key: TermKey, timestamp: u64) -> Option<Task> {
    let KeyCode::Char(character) = key.code else {
        return handle_key(state, key);
    };

    let mut event = KeyEvent::new(character, timestamp);
    if state.page.focus != Focus::Page {
        event = event.in_text_entry();
    }

    let outcome = state.controller.handle_key(&event, &mut state.page);
    let task = outcome.deferred.map(|deferred| match deferred {
        Deferred::InitJumpDialog => Task::Defer(Action::InitJumpDialog),
    });

    if outcome.disposition.suppresses_default() {
        return task;
    }
    handle_key(state, key).or(task)
}

/// Default handling of a key, by whatever currently owns it.
pub fn handle_key(state: &mut AppState, key: TermKey) -> Option<Task> {
    match (state.page.dialog, state.page.focus) {
        (Some(Dialog::Jump), _) => jump::handle_input(state, key),
        (Some(Dialog::Shortcuts), _) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                state.page.close_dialog();
            }
            None
        }
        (None, Focus::Search) => {
            handle_search_input(state, key);
            None
        }
        _ => {
            handle_page_key(state, key);
            None
        }
    }
}

fn handle_search_input(state: &mut AppState, key: TermKey) {
    match key.code {
        KeyCode::Esc => state.page.blur(),
        KeyCode::Enter => {
            let query = state.page.search.text();
            let query = query.trim();
            if query.is_empty() {
                state.page.blur();
                return;
            }
            match state.page.find_text(query) {
                Some(offset) => {
                    state.page.scroll_to(offset, Duration::ZERO);
                    state.status_message = Some(format!("Found \"{query}\""));
                    state.last_error = None;
                }
                None => state.last_error = Some(format!("No match for \"{query}\"")),
            }
            state.page.blur();
        }
        _ => {
            state.page.search.input(key);
        }
    }
}

fn handle_page_key(state: &mut AppState, key: TermKey) {
    let page_step = i64::from(state.page.viewport.max(1));
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Esc => {
            state.status_message = None;
            state.last_error = None;
        }
        KeyCode::Char('j') | KeyCode::Down => state.page.scroll_by(LINE_STEP),
        KeyCode::Char('k') | KeyCode::Up => state.page.scroll_by(-LINE_STEP),
        KeyCode::PageDown | KeyCode::Char(' ') => state.page.scroll_by(page_step),
        KeyCode::PageUp => state.page.scroll_by(-page_step),
        KeyCode::Home => state.page.scroll_by(-i64::from(state.page.document_height())),
        KeyCode::End => state.page.scroll_by(i64::from(state.page.document_height())),
        _ => {}
    }
}

/// Moves the location fragment, re-highlighting and scrolling to the target.
pub fn navigate(state: &mut AppState, fragment: &str) {
    let id = fragment.trim_start_matches('#');
    state.fragment = id.to_string();
    state.controller.on_fragment_change(fragment, &mut state.page);
    match state.page.element_offset(id) {
        Some(offset) => {
            state.page.scroll_to(offset, Duration::ZERO);
            state.last_error = None;
        }
        None => state.last_error = Some(format!("No such identifier: {id}")),
    }
}
