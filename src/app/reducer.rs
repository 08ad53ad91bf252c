use super::{
    action::Action,
    features::{jump, navigation},
    state::AppState,
    task::Task,
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Task> {
    let task = match action {
        // --- System ---
        Action::Tick => {
            state.page.advance(Instant::now());
            None
        }
        Action::Resize(_, _) => None, // Viewport is re-measured on the next draw
        Action::Quit => {
            state.should_quit = true;
            None
        }

        // --- Input ---
        Action::KeyPress(key, timestamp) => navigation::handle_keypress(state, key, timestamp),
        Action::Key(key) => navigation::handle_key(state, key),
        Action::ScrollBy(delta) => {
            if state.page.dialog.is_none() {
                state.page.scroll_by(delta);
            }
            None
        }

        // --- Jump dialog ---
        Action::InitJumpDialog => jump::init(state),
        Action::SymbolsLoaded {
            query,
            candidates,
            open_dialog,
        } => {
            jump::symbols_loaded(state, &query, candidates, open_dialog);
            None
        }

        Action::FragmentChanged(fragment) => {
            navigation::navigate(state, &fragment);
            None
        }
    };

    // Dialog lifecycle notifications reach the interaction layer after the
    // host has settled.
    for event in state.page.take_dialog_events() {
        state.controller.on_dialog_event(event);
    }

    task
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::app::highlight::HighlightState;
    use crate::app::page::Focus;
    use crate::domain::models::{Element, ElementId, PageDocument};
    use crate::domain::page::Dialog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state() -> AppState {
        let element = |id: &str, parent: Option<&str>| Element {
            id: Some(ElementId::new(id)),
            parent: parent.map(ElementId::new),
            text: id.to_string(),
            ..Default::default()
        };
        let document = PageDocument {
            title: "package io".to_string(),
            elements: vec![
                element("pkg-index", None),
                element("x-jump", None),
                element("x-jump-text", None),
                element("x-shortcuts", None),
                element("x-file", None),
                element("Reader", Some("x-file")),
            ],
        };
        AppState::new(&Config::default(), document, "")
    }

    fn press(c: char, at: u64) -> Action {
        Action::KeyPress(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), at)
    }

    #[test]
    fn test_dialog_events_reach_modal_tracker() {
        let mut state = state();
        update(&mut state, press('?', 100));
        assert_eq!(state.page.dialog, Some(Dialog::Shortcuts));
        assert!(state.controller.is_modal_open());

        // Chords are ignored while the dialog is up.
        update(&mut state, press('g', 200));
        update(&mut state, press('i', 300));
        assert_eq!(state.controller.pending_chord(300), None);

        update(
            &mut state,
            Action::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        );
        assert_eq!(state.page.dialog, None);
        assert!(!state.controller.is_modal_open());
    }

    #[test]
    fn test_jump_dialog_flow() {
        let mut state = state();
        let task = update(&mut state, press('.', 100));
        assert_eq!(task, Some(Task::Defer(Action::InitJumpDialog)));

        let task = update(&mut state, Action::InitJumpDialog);
        assert!(matches!(
            task,
            Some(Task::LoadSymbols {
                open_dialog: true,
                ..
            })
        ));

        update(
            &mut state,
            Action::SymbolsLoaded {
                query: String::new(),
                candidates: Ok(vec!["Reader".to_string()]),
                open_dialog: true,
            },
        );
        assert_eq!(state.page.dialog, Some(Dialog::Jump));
        assert!(state.controller.is_modal_open());
        // The '.' that opened the dialog never reaches its input.
        assert_eq!(state.page.jump.query(), "");
    }

    #[test]
    fn test_shortcut_keys_without_landmarks_do_nothing() {
        let document = PageDocument {
            title: "package io".to_string(),
            elements: vec![Element {
                id: Some(ElementId::new("Reader")),
                text: "type Reader interface".to_string(),
                ..Default::default()
            }],
        };
        let mut state = AppState::new(&Config::default(), document, "");

        update(&mut state, press('?', 100));
        assert_eq!(state.page.dialog, None);
        assert!(!state.controller.is_modal_open());

        update(&mut state, press('/', 200));
        assert_eq!(state.page.focus, Focus::Page);
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_fragment_change_highlights() {
        let mut state = state();
        update(&mut state, Action::FragmentChanged("#Reader".to_string()));
        assert_eq!(state.fragment, "Reader");
        assert_eq!(
            state.controller.highlight(),
            &HighlightState::Highlighted(ElementId::new("Reader"))
        );
        assert!(state
            .page
            .document
            .elements
            .iter()
            .any(|e| e.id == Some(ElementId::new("Reader")) && e.has_class("highlight")));

        update(&mut state, Action::FragmentChanged("#nowhere".to_string()));
        assert_eq!(state.controller.highlight(), &HighlightState::NoHighlight);
    }
}
