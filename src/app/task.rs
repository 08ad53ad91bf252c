use super::action::Action;

/// Side effects the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Re-post an action on a later loop iteration.
    Defer(Action),
    LoadSymbols { query: String, open_dialog: bool },
}
