#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ScrollToTop,
    ScrollToBottom,
    ScrollToIndex,
    ScrollToExamples,
    FocusSearch,
    ShowShortcutsDialog,
    ShowJumpDialog,
}
