use crate::app::{action::Action, symbols::SymbolSource, task::Task};
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_task(task: Task, symbols: Arc<dyn SymbolSource>, tx: mpsc::Sender<Action>) {
    match task {
        Task::Defer(action) => {
            // Goes behind whatever is already queued.
            tokio::spawn(async move {
                let _ = tx.send(action).await;
            });
        }
        Task::LoadSymbols { query, open_dialog } => {
            tokio::spawn(async move {
                let candidates = match symbols.candidates(&query).await {
                    Ok(candidates) => Ok(candidates),
                    Err(e) => Err(format!("{e:#}")),
                };
                let _ = tx
                    .send(Action::SymbolsLoaded {
                        query,
                        candidates,
                        open_dialog,
                    })
                    .await;
            });
        }
    }
}
