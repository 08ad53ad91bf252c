//! Keystroke interpretation: single-key commands plus two-key chords that
//! must land inside a timing window.
//!
//! Chords are strictly pairwise. Every candidate keystroke consumes the armed
//! key, so a third fast key never extends a chord; it can only start a new one
//! if it did not itself fire a command.

use super::command::Command;
use crate::domain::page::Landmark;
use std::time::Duration;

pub const DEFAULT_CHORD_WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub character: char,
    /// Monotonic event time in milliseconds.
    pub timestamp: u64,
    pub target_is_text_entry: bool,
    pub target_is_editable: bool,
}

impl KeyEvent {
    pub fn new(character: char, timestamp: u64) -> Self {
        Self {
            character,
            timestamp,
            target_is_text_entry: false,
            target_is_editable: false,
        }
    }

    #[must_use]
    pub fn in_text_entry(mut self) -> Self {
        self.target_is_text_entry = true;
        self
    }

    #[must_use]
    pub fn in_editable(mut self) -> Self {
        self.target_is_editable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordState {
    pub last_character: Option<char>,
    pub last_timestamp: u64,
}

impl ChordState {
    fn arm(&mut self, character: char, timestamp: u64) {
        self.last_character = Some(character);
        self.last_timestamp = timestamp;
    }

    fn take(&mut self) -> Option<(char, u64)> {
        let armed = self.last_character.map(|c| (c, self.last_timestamp));
        *self = Self::default();
        armed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not a command candidate (dialog open or focus in a text control).
    Ignored,
    /// Candidate that produced no command.
    Passed,
    Handled(Command),
}

impl KeyDisposition {
    pub fn command(&self) -> Option<Command> {
        match self {
            KeyDisposition::Handled(command) => Some(*command),
            _ => None,
        }
    }

    /// Only a fired command keeps the keystroke from its default handling.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, KeyDisposition::Handled(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub keys: &'static str,
    pub command: Command,
    pub requires: Option<Landmark>,
    pub description: &'static str,
}

pub const CHORD_BINDINGS: &[Binding] = &[
    Binding {
        keys: "gg",
        command: Command::ScrollToTop,
        requires: None,
        description: "Go to top of page",
    },
    Binding {
        keys: "gb",
        command: Command::ScrollToBottom,
        requires: None,
        description: "Go to bottom of page",
    },
    Binding {
        keys: "gi",
        command: Command::ScrollToIndex,
        requires: Some(Landmark::Index),
        description: "Go to index",
    },
    Binding {
        keys: "ge",
        command: Command::ScrollToExamples,
        requires: Some(Landmark::Examples),
        description: "Go to examples",
    },
];

pub const KEY_BINDINGS: &[Binding] = &[
    Binding {
        keys: "/",
        command: Command::FocusSearch,
        requires: None,
        description: "Search",
    },
    Binding {
        keys: "?",
        command: Command::ShowShortcutsDialog,
        requires: None,
        description: "Show keyboard shortcuts",
    },
    Binding {
        keys: ".",
        command: Command::ShowJumpDialog,
        requires: Some(Landmark::JumpDialog),
        description: "Jump to identifier",
    },
];

// First textual match wins; a missing landmark ends the search without a command.
fn first_match(
    bindings: &[Binding],
    matches: impl Fn(&str) -> bool,
    has_landmark: &impl Fn(Landmark) -> bool,
) -> Option<Command> {
    bindings
        .iter()
        .find(|binding| matches(binding.keys))
        .filter(|binding| binding.requires.map_or(true, has_landmark))
        .map(|binding| binding.command)
}

#[derive(Debug, Clone)]
pub struct KeyChordInterpreter {
    state: ChordState,
    window_ms: u64,
}

impl Default for KeyChordInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_CHORD_WINDOW)
    }
}

impl KeyChordInterpreter {
    pub fn new(window: Duration) -> Self {
        Self {
            state: ChordState::default(),
            window_ms: window.as_millis() as u64,
        }
    }

    pub fn state(&self) -> ChordState {
        self.state
    }

    /// The armed key if it can still open a chord at `now`.
    pub fn pending_prefix(&self, now: u64) -> Option<char> {
        let c = self.state.last_character?;
        let in_window = now.saturating_sub(self.state.last_timestamp) <= self.window_ms;
        let opens_chord = CHORD_BINDINGS
            .iter()
            .any(|b| b.keys.starts_with(c));
        (in_window && opens_chord).then_some(c)
    }

    pub fn interpret(
        &mut self,
        event: &KeyEvent,
        modal_open: bool,
        has_landmark: impl Fn(Landmark) -> bool,
    ) -> KeyDisposition {
        if modal_open || event.target_is_text_entry || event.target_is_editable {
            return KeyDisposition::Ignored;
        }

        let current = event.character;
        let combo_with = self
            .state
            .take()
            .filter(|&(_, at)| event.timestamp.saturating_sub(at) <= self.window_ms)
            .map(|(previous, _)| previous);

        let chord = combo_with.and_then(|previous| {
            first_match(
                CHORD_BINDINGS,
                |keys| keys.chars().eq([previous, current]),
                &has_landmark,
            )
        });

        let command = chord.or_else(|| {
            first_match(
                KEY_BINDINGS,
                |keys| keys.chars().eq([current]),
                &has_landmark,
            )
        });

        match command {
            Some(command) => {
                tracing::debug!(key = %current, ?command, "key interpreted");
                KeyDisposition::Handled(command)
            }
            None => {
                self.state.arm(current, event.timestamp);
                KeyDisposition::Passed
            }
        }
    }
}
