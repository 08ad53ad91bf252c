//! The terminal page: renders a `PageDocument` and plays the host role for
//! the interaction core.

use super::config::LandmarkIds;
use super::symbols::rank_candidates;
use super::timeago::humanize;
use crate::domain::models::{ElementId, PageDocument};
use crate::domain::page::{Dialog, DialogEvent, Landmark, PageHost};
use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

const MAX_JUMP_MATCHES: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Page,
    Search,
    JumpText,
}

#[derive(Default)]
pub struct AppTextArea(pub TextArea<'static>);

impl AppTextArea {
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }
}

impl std::fmt::Debug for AppTextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl Deref for AppTextArea {
    type Target = TextArea<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[derive(Debug, Default)]
pub struct JumpDialogState {
    pub input: AppTextArea,
    pub candidates: Vec<String>,
    pub matches: Vec<String>,
    pub selected: usize,
}

impl JumpDialogState {
    pub fn query(&self) -> String {
        self.input.text()
    }

    pub fn refresh_matches(&mut self) {
        let mut matches = rank_candidates(&self.query(), &self.candidates);
        matches.truncate(MAX_JUMP_MATCHES);
        self.matches = matches;
        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected = (self.selected + 1) % self.matches.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.matches.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.matches.len() - 1);
        }
    }

    /// The highlighted match, or the typed text when nothing matches.
    pub fn target(&self) -> String {
        self.matches
            .get(self.selected)
            .cloned()
            .unwrap_or_else(|| self.query().trim().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    fn position(&self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return None;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        // jQuery's "swing" easing
        let eased = 0.5 - (t * std::f64::consts::PI).cos() / 2.0;
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        Some((from + (to - from) * eased).round() as u32)
    }
}

#[derive(Debug)]
pub struct TerminalPage {
    pub document: PageDocument,
    landmarks: LandmarkIds,
    offsets: Vec<u32>,
    height: u32,
    pub scroll: u32,
    animation: Option<ScrollAnimation>,
    pub viewport: u16,
    pub focus: Focus,
    pub dialog: Option<Dialog>,
    pub search: AppTextArea,
    pub jump: JumpDialogState,
    pub relative_times: HashMap<usize, String>,
    dialog_events: Vec<DialogEvent>,
}

impl TerminalPage {
    pub fn new(document: PageDocument, landmarks: LandmarkIds) -> Self {
        let mut page = Self {
            document,
            landmarks,
            offsets: Vec::new(),
            height: 0,
            scroll: 0,
            animation: None,
            viewport: 0,
            focus: Focus::Page,
            dialog: None,
            search: AppTextArea::default(),
            jump: JumpDialogState::default(),
            relative_times: HashMap::new(),
            dialog_events: Vec::new(),
        };
        page.relayout();
        page
    }

    fn relayout(&mut self) {
        let mut offset = 0;
        self.offsets = self
            .document
            .elements
            .iter()
            .map(|element| {
                let start = offset;
                offset += element.line_count();
                start
            })
            .collect();
        self.height = offset;
    }

    pub fn element_offset(&self, id: &str) -> Option<u32> {
        self.document.position(id).map(|idx| self.offsets[idx])
    }

    pub fn max_scroll(&self) -> u32 {
        self.height.saturating_sub(u32::from(self.viewport))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn advance(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            match animation.position(now) {
                Some(position) => self.scroll = position,
                None => {
                    self.scroll = animation.to;
                    self.animation = None;
                }
            }
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.animation = None;
        let target = (i64::from(self.scroll) + delta).clamp(0, i64::from(self.max_scroll()));
        self.scroll = target as u32;
    }

    pub fn blur(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn close_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            self.dialog_events.push(DialogEvent::Hidden(dialog));
            self.blur();
        }
    }

    pub fn take_dialog_events(&mut self) -> Vec<DialogEvent> {
        std::mem::take(&mut self.dialog_events)
    }

    /// Offset of the first rendered element whose text contains `query`.
    pub fn find_text(&self, query: &str) -> Option<u32> {
        let query = query.to_lowercase();
        self.document
            .elements
            .iter()
            .zip(&self.offsets)
            .find(|(element, _)| {
                element.line_count() > 0 && element.text.to_lowercase().contains(&query)
            })
            .map(|(_, offset)| *offset)
    }
}

impl PageHost for TerminalPage {
    fn has_landmark(&self, landmark: Landmark) -> bool {
        self.document.position(self.landmarks.id(landmark)).is_some()
    }

    fn landmark_offset(&self, landmark: Landmark) -> Option<u32> {
        self.element_offset(self.landmarks.id(landmark))
    }

    fn document_height(&self) -> u32 {
        self.height
    }

    fn scroll_to(&mut self, offset: u32, duration: Duration) {
        let target = offset.min(self.max_scroll());
        if duration.is_zero() || target == self.scroll {
            self.scroll = target;
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.scroll,
            to: target,
            started: Instant::now(),
            duration,
        });
    }

    fn focus(&mut self, landmark: Landmark) {
        if !self.has_landmark(landmark) {
            return;
        }
        match landmark {
            Landmark::SearchInput => self.focus = Focus::Search,
            Landmark::JumpText => self.focus = Focus::JumpText,
            other => tracing::debug!(landmark = ?other, "landmark cannot take focus"),
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        let landmark = match dialog {
            Dialog::Shortcuts => Landmark::ShortcutsDialog,
            Dialog::Jump => Landmark::JumpDialog,
        };
        if self.dialog == Some(dialog) || !self.has_landmark(landmark) {
            return;
        }
        self.close_dialog();
        self.blur();
        self.dialog = Some(dialog);
        self.dialog_events.push(DialogEvent::Shown(dialog));
    }

    fn set_jump_candidates(&mut self, candidates: Vec<String>) {
        self.jump.candidates = candidates;
        self.jump.refresh_matches();
    }

    fn clear_jump_input(&mut self) {
        self.jump.input = AppTextArea::default();
        self.jump.selected = 0;
        self.jump.refresh_matches();
    }

    fn element_ids(&self) -> Vec<ElementId> {
        self.document.ids().cloned().collect()
    }

    fn descendant_ids(&self, ancestor: Landmark) -> Vec<ElementId> {
        let container = self.landmarks.id(ancestor);
        self.document
            .elements
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.document.is_descendant_of(*idx, container))
            .filter_map(|(_, element)| element.id.clone())
            .collect()
    }

    fn add_class(&mut self, id: &ElementId, class: &str) -> bool {
        let Some(element) = self.document.get_mut(id.as_str()) else {
            return false;
        };
        element.add_class(class);
        self.relayout();
        true
    }

    fn remove_class(&mut self, id: &ElementId, class: &str) {
        if let Some(element) = self.document.get_mut(id.as_str()) {
            element.remove_class(class);
            self.relayout();
        }
    }

    fn set_natural_height(&mut self, _id: &ElementId) {
        // Heights follow the collapse classes; recompute offsets.
        self.relayout();
    }

    fn render_relative_times(&mut self, marker_class: &str, now: DateTime<Utc>) {
        self.relative_times = self
            .document
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_class(marker_class))
            .filter_map(|(idx, element)| element.timestamp.map(|ts| (idx, humanize(ts, now))))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Element, ElementKind};
    use chrono::TimeZone;

    fn element(id: &str, parent: Option<&str>, text: &str) -> Element {
        Element {
            id: Some(ElementId::new(id)),
            parent: parent.map(ElementId::new),
            text: text.to_string(),
            ..Default::default()
        }
    }

    fn marker(id: &str) -> Element {
        Element {
            kind: ElementKind::Marker,
            ..element(id, None, "")
        }
    }

    fn page() -> TerminalPage {
        let mut jump = element("x-jump", None, "");
        jump.kind = ElementKind::Marker;
        let mut example = element("ex-Reader", Some("x-file"), "Example\nline\nline");
        example.classes = vec!["collapse".to_string()];
        let document = PageDocument {
            title: "package io".to_string(),
            elements: vec![
                element("pkg-overview", None, "Overview\nPackage io provides I/O."),
                element("pkg-index", None, "Index\nfunc Copy\ntype Reader"),
                jump,
                marker("x-jump-text"),
                marker("x-shortcuts"),
                marker("x-search-query"),
                element("x-file", None, "Documentation"),
                element("Reader", Some("x-file"), "type Reader interface"),
                example,
                element("Reader.Read", Some("Reader"), "func (Reader) Read"),
            ],
        };
        let mut page = TerminalPage::new(document, LandmarkIds::default());
        page.viewport = 3;
        page
    }

    #[test]
    fn test_layout_offsets() {
        let page = page();
        assert_eq!(page.landmark_offset(Landmark::Index), Some(2));
        assert_eq!(page.landmark_offset(Landmark::Examples), None);
        assert_eq!(page.element_offset("Reader"), Some(6));
        assert_eq!(page.document_height(), 9);
    }

    #[test]
    fn test_landmarks_follow_document() {
        let page = page();
        assert!(page.has_landmark(Landmark::Index));
        assert!(page.has_landmark(Landmark::JumpDialog));
        assert!(!page.has_landmark(Landmark::Examples));
    }

    #[test]
    fn test_descendants_of_content() {
        let page = page();
        assert_eq!(
            page.descendant_ids(Landmark::ContentFile),
            vec![
                ElementId::new("Reader"),
                ElementId::new("ex-Reader"),
                ElementId::new("Reader.Read")
            ]
        );
    }

    #[test]
    fn test_expanding_panel_grows_document() {
        let mut page = page();
        let panel = ElementId::new("ex-Reader");
        assert!(page.add_class(&panel, "in"));
        page.remove_class(&panel, "collapse");
        page.set_natural_height(&panel);
        assert_eq!(page.document_height(), 11);
        assert!(!page.add_class(&ElementId::new("missing"), "in"));
    }

    #[test]
    fn test_scroll_clamps_and_animates() {
        let mut page = page();
        page.scroll_to(1_000, Duration::ZERO);
        assert_eq!(page.scroll, page.max_scroll());

        page.scroll_to(0, Duration::from_millis(200));
        assert!(page.is_animating());
        page.advance(Instant::now() + Duration::from_secs(1));
        assert_eq!(page.scroll, 0);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_dialog_lifecycle_events() {
        let mut page = page();
        page.focus(Landmark::SearchInput);
        page.open_dialog(Dialog::Shortcuts);
        assert_eq!(page.focus, Focus::Page);
        page.open_dialog(Dialog::Jump);
        page.close_dialog();
        assert_eq!(
            page.take_dialog_events(),
            vec![
                DialogEvent::Shown(Dialog::Shortcuts),
                DialogEvent::Hidden(Dialog::Shortcuts),
                DialogEvent::Shown(Dialog::Jump),
                DialogEvent::Hidden(Dialog::Jump),
            ]
        );
        assert!(page.take_dialog_events().is_empty());
    }

    #[test]
    fn test_missing_landmarks_ignore_dialog_and_focus() {
        let mut page = TerminalPage::new(
            PageDocument {
                title: "package io".to_string(),
                elements: vec![element("Reader", None, "type Reader interface")],
            },
            LandmarkIds::default(),
        );
        page.open_dialog(Dialog::Shortcuts);
        page.open_dialog(Dialog::Jump);
        assert_eq!(page.dialog, None);
        assert!(page.take_dialog_events().is_empty());

        page.focus(Landmark::SearchInput);
        assert_eq!(page.focus, Focus::Page);
        page.focus(Landmark::JumpText);
        assert_eq!(page.focus, Focus::Page);
    }

    #[test]
    fn test_jump_matches_follow_query() {
        let mut page = page();
        page.set_jump_candidates(vec![
            "Reader".to_string(),
            "Reader.Read".to_string(),
            "Copy".to_string(),
        ]);
        assert_eq!(page.jump.matches.len(), 3);

        page.jump.input.insert_str("read");
        page.jump.refresh_matches();
        assert_eq!(page.jump.matches, vec!["Reader", "Reader.Read"]);
        page.jump.select_prev();
        assert_eq!(page.jump.target(), "Reader.Read");

        page.clear_jump_input();
        assert_eq!(page.jump.query(), "");
        assert_eq!(page.jump.selected, 0);
    }

    #[test]
    fn test_relative_times() {
        let mut page = page();
        page.document.elements[0].classes.push("timeago".to_string());
        page.document.elements[0].timestamp =
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let now = Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap();
        page.render_relative_times("timeago", now);
        assert_eq!(page.relative_times.get(&0).map(String::as_str), Some("3 days ago"));
    }

    #[test]
    fn test_find_text() {
        let page = page();
        assert_eq!(page.find_text("TYPE READER"), Some(2));
        assert_eq!(page.find_text("nothing like this"), None);
    }
}
