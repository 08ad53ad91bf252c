/// Tracks whether a dialog overlay is open, fed by the host's dialog
/// lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalTracker {
    is_open: bool,
}

impl ModalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_dialog_show(&mut self) {
        self.is_open = true;
    }

    pub fn on_dialog_hidden(&mut self) {
        self.is_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_open
    }
}
