use super::*;
use crate::app::action::Action;
use crate::app::config::Config;
use crate::app::page::Focus;
use crate::app::state::AppState;
use crate::app::symbols::MockSymbolSource;
use crate::domain::models::{Element, ElementId, ElementKind, PageDocument};
use crate::domain::page::Dialog;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn sample_document() -> PageDocument {
    let element = |id: &str, parent: Option<&str>, kind: ElementKind, text: &str| Element {
        id: Some(ElementId::new(id)),
        parent: parent.map(ElementId::new),
        kind,
        text: text.to_string(),
        ..Default::default()
    };
    let mut example = element(
        "ex-Copy",
        Some("x-file"),
        ElementKind::Code,
        "Example\nio.Copy(os.Stdout, r)",
    );
    example.classes = vec!["collapse".to_string()];

    PageDocument {
        title: "package io".to_string(),
        elements: vec![
            element("pkg-overview", None, ElementKind::Heading, "Overview"),
            Element {
                text: "Package io provides basic interfaces to I/O primitives.".to_string(),
                ..Default::default()
            },
            element("pkg-index", None, ElementKind::Heading, "Index"),
            element("pkg-examples", None, ElementKind::Heading, "Examples"),
            element("x-jump", None, ElementKind::Marker, ""),
            element("x-jump-text", None, ElementKind::Marker, ""),
            element("x-shortcuts", None, ElementKind::Marker, ""),
            element("x-search-query", None, ElementKind::Marker, ""),
            element("x-file", None, ElementKind::Heading, "Documentation"),
            element(
                "Copy",
                Some("x-file"),
                ElementKind::Code,
                "func Copy(dst Writer, src Reader) (written int64, err error)",
            ),
            example,
            element(
                "Reader",
                Some("x-file"),
                ElementKind::Code,
                "type Reader interface {\n    Read(p []byte) (n int, err error)\n}",
            ),
            element("_internal", Some("x-file"), ElementKind::Text, "unexported"),
        ],
    }
}

#[tokio::test]
async fn test_load_symbols_success() {
    let mut mock = MockSymbolSource::new();
    mock.expect_candidates()
        .with(mockall::predicate::eq(""))
        .times(1)
        .returning(|_| Ok(vec!["Copy".to_string(), "Reader".to_string()]));

    let symbols = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_task(
        Task::LoadSymbols {
            query: String::new(),
            open_dialog: true,
        },
        symbols,
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::SymbolsLoaded {
            query: String::new(),
            candidates: Ok(vec!["Copy".to_string(), "Reader".to_string()]),
            open_dialog: true,
        }
    );
}

#[tokio::test]
async fn test_load_symbols_error_propagation() {
    let mut mock = MockSymbolSource::new();
    mock.expect_candidates()
        .returning(|_| Err(anyhow::anyhow!("typeahead returned HTTP 503")));

    let symbols = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_task(
        Task::LoadSymbols {
            query: "co".to_string(),
            open_dialog: false,
        },
        symbols,
        tx,
    );

    let action = rx.recv().await.unwrap();
    if let Action::SymbolsLoaded { candidates, .. } = action {
        assert!(candidates.unwrap_err().contains("HTTP 503"));
    } else {
        panic!("Expected Action::SymbolsLoaded, got {action:?}");
    }
}

#[tokio::test]
async fn test_deferred_action_is_reposted() {
    let symbols = Arc::new(MockSymbolSource::new());
    let (tx, mut rx) = mpsc::channel(1);

    handle_task(Task::Defer(Action::InitJumpDialog), symbols, tx);

    assert_eq!(rx.recv().await.unwrap(), Action::InitJumpDialog);
}

#[tokio::test]
async fn test_full_jump_flow_to_state() {
    let mut mock = MockSymbolSource::new();
    mock.expect_candidates()
        .returning(|_| Ok(vec!["Copy".to_string(), "Reader".to_string()]));

    let symbols: Arc<dyn SymbolSource> = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(4);
    let mut state = AppState::new(&Config::default(), sample_document(), "");

    // 1. '.' is swallowed and leaves a deferred init behind.
    let task = reducer::update(
        &mut state,
        Action::KeyPress(
            crossterm::event::KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE),
            10,
        ),
    )
    .unwrap();
    assert_eq!(state.page.dialog, None);
    handle_task(task, symbols.clone(), tx.clone());

    // 2. Next tick: the init asks for candidates.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::InitJumpDialog);
    let task = reducer::update(&mut state, action).unwrap();
    handle_task(task, symbols.clone(), tx.clone());

    // 3. Candidates arrive and the dialog opens, focused and empty.
    let action = rx.recv().await.unwrap();
    assert!(reducer::update(&mut state, action).is_none());
    assert_eq!(state.page.dialog, Some(Dialog::Jump));
    assert_eq!(state.page.focus, Focus::JumpText);
    assert_eq!(state.page.jump.matches, vec!["Copy", "Reader"]);
    assert_eq!(state.page.jump.query(), "");
    assert!(state.controller.is_modal_open());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockSymbolSource::new();
    // Setup mock to return some data to avoid crashes in UI
    mock.expect_candidates().returning(|_| {
        Ok(vec![
            "Copy".to_string(),
            "Reader".to_string(),
            "Reader.Read".to_string(),
        ])
    });

    let symbols = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::new(&Config::default(), sample_document(), "#example-Copy");

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl+C quits from any focus; a plain 'q' could land in an input.
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, symbols, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        // Chord and shortcut keys, often enough to open every dialog
        14 => KeyCode::Char(['g', 'b', 'i', 'e', '.', '/', '?'][rng.gen_range(0..7)]),
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl+C is the quit key; keep it out of the stream.
    if rng.gen_bool(0.1) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
