use crate::app::{features::navigation, state::AppState, task::Task};
use crate::domain::page::{Dialog, PageHost};
use crossterm::event::{KeyCode, KeyEvent};

/// `InitJumpDialog` arrived: fetch the candidates, the dialog opens once
/// they are in.
pub fn init(state: &mut AppState) -> Option<Task> {
    state.status_message = Some("Loading identifiers...".to_string());
    Some(Task::LoadSymbols {
        query: state.page.jump.query(),
        open_dialog: true,
    })
}

pub fn symbols_loaded(
    state: &mut AppState,
    query: &str,
    candidates: Result<Vec<String>, String>,
    open_dialog: bool,
) {
    let candidates = match candidates {
        Ok(candidates) => {
            state.status_message = None;
            state.last_error = None;
            candidates
        }
        Err(e) => {
            tracing::warn!(query, "identifier lookup failed: {e}");
            state.status_message = None;
            state.last_error = Some(format!("Identifier lookup failed: {e}"));
            Vec::new()
        }
    };

    if open_dialog {
        state.controller.open_jump_dialog(&mut state.page, candidates);
    } else if state.page.dialog == Some(Dialog::Jump) {
        state.page.set_jump_candidates(candidates);
    }
}

pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Option<Task> {
    match key.code {
        KeyCode::Esc => {
            state.page.close_dialog();
            None
        }
        KeyCode::Enter => {
            let target = state.page.jump.target();
            state.page.close_dialog();
            if !target.is_empty() {
                navigation::navigate(state, &format!("#{target}"));
            }
            None
        }
        KeyCode::Down | KeyCode::Tab => {
            state.page.jump.select_next();
            None
        }
        KeyCode::Up | KeyCode::BackTab => {
            state.page.jump.select_prev();
            None
        }
        _ => {
            if !state.page.jump.input.input(key) {
                return None;
            }
            state.page.jump.selected = 0;
            state.page.jump.refresh_matches();
            // An earlier lookup failed; typing retries it.
            state.page.jump.candidates.is_empty().then(|| Task::LoadSymbols {
                query: state.page.jump.query(),
                open_dialog: false,
            })
        }
    }
}
