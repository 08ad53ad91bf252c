use crate::app::{
    action::Action, input::map_event_to_action, reducer, state::AppState, task::Task, ui,
};
use crate::app::symbols::SymbolSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

// Fast enough for smooth scroll animation.
const TICK_RATE: Duration = Duration::from_millis(16);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    symbols: Arc<dyn SymbolSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, symbols, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    symbols: Arc<dyn SymbolSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, app_state.now_ms())
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let task = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(task) = task {
                handle_task(task, symbols.clone(), action_tx.clone());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_task(task: Task, symbols: Arc<dyn SymbolSource>, tx: mpsc::Sender<Action>) {
    crate::app::features::handler::handle_task(task, symbols, tx);
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
