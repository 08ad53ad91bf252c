//! Keeps the element named by the location fragment highlighted.
//!
//! Lookups go through an identifier index built once from the content
//! container, so fragments with dots or other selector syntax need no escaping.

use crate::domain::models::ElementId;
use crate::domain::page::PageHost;
use std::collections::HashSet;

pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightState {
    #[default]
    NoHighlight,
    Highlighted(ElementId),
}

#[derive(Debug, Clone)]
pub struct AnchorHighlighter {
    index: HashSet<ElementId>,
    class: String,
    state: HighlightState,
}

/// Strips the leading `#` a location fragment may carry.
pub fn fragment_id(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

impl AnchorHighlighter {
    pub fn new(ids: impl IntoIterator<Item = ElementId>, class: impl Into<String>) -> Self {
        Self {
            index: ids.into_iter().collect(),
            class: class.into(),
            state: HighlightState::NoHighlight,
        }
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn on_fragment_change(
        &mut self,
        fragment: &str,
        host: &mut dyn PageHost,
    ) -> &HighlightState {
        if let HighlightState::Highlighted(previous) = std::mem::take(&mut self.state) {
            host.remove_class(&previous, &self.class);
        }

        let id = fragment_id(fragment);
        if id.is_empty() {
            return &self.state;
        }

        let target = ElementId::new(id);
        if self.index.contains(&target) && host.add_class(&target, &self.class) {
            tracing::info!(id = %target, "highlighted");
            self.state = HighlightState::Highlighted(target);
        } else {
            tracing::debug!(id, "fragment names no content element");
        }
        &self.state
    }
}

/// One-shot reveal of the collapsed example panel named by the fragment at
/// page load. Returns the expanded panel.
pub fn reveal_example(
    fragment: &str,
    fragment_prefix: &str,
    panel_prefix: &str,
    host: &mut dyn PageHost,
) -> Option<ElementId> {
    let name = fragment_id(fragment).strip_prefix(fragment_prefix)?;
    if name.is_empty() {
        return None;
    }

    let panel = ElementId::new(format!("{panel_prefix}{name}"));
    if !host.add_class(&panel, "in") {
        return None;
    }
    host.remove_class(&panel, "collapse");
    host.set_natural_height(&panel);
    tracing::info!(panel = %panel, "example expanded");
    Some(panel)
}
