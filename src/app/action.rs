use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Input ---
    KeyPress(KeyEvent, u64), // Printable key and its monotonic timestamp (ms)
    Key(KeyEvent),           // Non-printable key, host handling only
    ScrollBy(i64),

    // --- Deferred / Async Results ---
    InitJumpDialog, // Posted one tick after the `.` keystroke
    SymbolsLoaded {
        query: String,
        candidates: Result<Vec<String>, String>,
        open_dialog: bool,
    },

    // --- Location ---
    FragmentChanged(String),
}
