use super::command::Command;
use crate::domain::page::{Dialog, Landmark, PageHost};
use std::time::Duration;

/// "fast" in the animation vocabulary of the page.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(200);

/// Work a command leaves for the next scheduling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    InitJumpDialog,
}

#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    scroll_duration: Duration,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DURATION)
    }
}

impl CommandDispatcher {
    pub fn new(scroll_duration: Duration) -> Self {
        Self { scroll_duration }
    }

    pub fn dispatch(&self, command: Command, host: &mut dyn PageHost) -> Option<Deferred> {
        tracing::debug!(?command, "dispatching");
        match command {
            Command::ScrollToTop => host.scroll_to(0, self.scroll_duration),
            Command::ScrollToBottom => {
                let height = host.document_height();
                host.scroll_to(height, self.scroll_duration);
            }
            Command::ScrollToIndex => self.scroll_to_landmark(Landmark::Index, host),
            Command::ScrollToExamples => self.scroll_to_landmark(Landmark::Examples, host),
            Command::FocusSearch => host.focus(Landmark::SearchInput),
            Command::ShowShortcutsDialog => host.open_dialog(Dialog::Shortcuts),
            // The keystroke must finish (and be suppressed) before the input opens.
            Command::ShowJumpDialog => return Some(Deferred::InitJumpDialog),
        }
        None
    }

    /// Second half of `ShowJumpDialog`, run once the candidates are known.
    pub fn open_jump_dialog(&self, host: &mut dyn PageHost, candidates: Vec<String>) {
        host.set_jump_candidates(candidates);
        host.open_dialog(Dialog::Jump);
        host.clear_jump_input();
        host.focus(Landmark::JumpText);
    }

    fn scroll_to_landmark(&self, landmark: Landmark, host: &mut dyn PageHost) {
        match host.landmark_offset(landmark) {
            Some(offset) => host.scroll_to(offset, self.scroll_duration),
            None => tracing::debug!(?landmark, "landmark absent, nothing to scroll to"),
        }
    }
}
