use crate::domain::models::ElementId;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Optional page elements whose presence gates commands or scopes lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Index,
    Examples,
    JumpDialog,
    JumpText,
    ShortcutsDialog,
    SearchInput,
    ContentFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Shortcuts,
    Jump,
}

/// Lifecycle notifications a host emits after it shows or hides a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Shown(Dialog),
    Hidden(Dialog),
}

/// Everything the interaction core needs from the page it drives.
#[cfg_attr(test, mockall::automock)]
pub trait PageHost {
    fn has_landmark(&self, landmark: Landmark) -> bool;

    /// Vertical offset of a landmark element, `None` when it is absent.
    fn landmark_offset(&self, landmark: Landmark) -> Option<u32>;

    fn document_height(&self) -> u32;

    fn scroll_to(&mut self, offset: u32, duration: Duration);

    fn focus(&mut self, landmark: Landmark);

    fn open_dialog(&mut self, dialog: Dialog);

    /// Replaces the autocomplete data of the jump dialog input.
    fn set_jump_candidates(&mut self, candidates: Vec<String>);

    fn clear_jump_input(&mut self);

    fn element_ids(&self) -> Vec<ElementId>;

    fn descendant_ids(&self, ancestor: Landmark) -> Vec<ElementId>;

    /// Returns false when no element carries `id`.
    fn add_class(&mut self, id: &ElementId, class: &str) -> bool;

    fn remove_class(&mut self, id: &ElementId, class: &str);

    fn set_natural_height(&mut self, id: &ElementId);

    fn render_relative_times(&mut self, marker_class: &str, now: DateTime<Utc>);
}
