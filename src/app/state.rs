use super::config::Config;
use super::controller::PageController;
use super::page::TerminalPage;
use crate::domain::models::PageDocument;
use crate::domain::page::PageHost;
use crate::theme::Theme;
use chrono::Utc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub last_error: Option<String>,

    // --- Page (host side) and its interaction layer ---
    pub page: TerminalPage,
    pub controller: PageController,
    pub fragment: String,
    pub highlight_class: String,

    pub theme: Theme,
    pub started: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config, document: PageDocument, fragment: &str) -> Self {
        let mut page = TerminalPage::new(document, config.landmarks.resolve());
        let controller = PageController::init(config, &mut page, fragment, Utc::now());
        // Initial scroll to the fragment target, as on page load.
        if let Some(offset) = page.element_offset(fragment.trim_start_matches('#')) {
            page.scroll_to(offset, Duration::ZERO);
        }
        Self {
            should_quit: false,
            status_message: None,
            last_error: None,
            page,
            controller,
            fragment: fragment.trim_start_matches('#').to_string(),
            highlight_class: config.highlight_class.clone(),
            theme: Theme::default(),
            started: Instant::now(),
        }
    }

    /// Monotonic milliseconds since the page was opened.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default(), PageDocument::default(), "")
    }
}
