use super::chord::{KeyChordInterpreter, KeyDisposition, KeyEvent};
use super::config::Config;
use super::dispatcher::{CommandDispatcher, Deferred};
use super::highlight::{reveal_example, AnchorHighlighter, HighlightState};
use super::modal::ModalTracker;
use crate::domain::models::ElementId;
use crate::domain::page::{DialogEvent, Landmark, PageHost};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub disposition: KeyDisposition,
    pub deferred: Option<Deferred>,
}

/// Interaction layer of one page life: modal awareness, chord interpretation,
/// command dispatch and fragment highlighting.
#[derive(Debug, Clone)]
pub struct PageController {
    modal: ModalTracker,
    interpreter: KeyChordInterpreter,
    dispatcher: CommandDispatcher,
    highlighter: AnchorHighlighter,
    revealed_example: Option<ElementId>,
}

impl PageController {
    /// Entry point, invoked once the page's interactive elements exist.
    pub fn init(
        config: &Config,
        host: &mut dyn PageHost,
        fragment: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let landmarks = config.landmarks.resolve();
        host.render_relative_times(&config.timeago_class, now);

        let revealed_example = reveal_example(
            fragment,
            &landmarks.example_fragment_prefix,
            &landmarks.example_panel_prefix,
            host,
        );

        let mut controller = Self {
            modal: ModalTracker::new(),
            interpreter: KeyChordInterpreter::new(config.chord_window()),
            dispatcher: CommandDispatcher::new(config.scroll_duration()),
            highlighter: AnchorHighlighter::new(
                host.descendant_ids(Landmark::ContentFile),
                config.highlight_class.clone(),
            ),
            revealed_example,
        };
        controller.on_fragment_change(fragment, host);
        controller
    }

    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut dyn PageHost) -> KeyOutcome {
        let disposition =
            self.interpreter
                .interpret(event, self.modal.is_modal_open(), |landmark| {
                    host.has_landmark(landmark)
                });
        let deferred = disposition
            .command()
            .and_then(|command| self.dispatcher.dispatch(command, host));
        KeyOutcome {
            disposition,
            deferred,
        }
    }

    pub fn on_dialog_event(&mut self, event: DialogEvent) {
        match event {
            DialogEvent::Shown(_) => self.modal.on_dialog_show(),
            DialogEvent::Hidden(_) => self.modal.on_dialog_hidden(),
        }
    }

    pub fn on_fragment_change(
        &mut self,
        fragment: &str,
        host: &mut dyn PageHost,
    ) -> &HighlightState {
        self.highlighter.on_fragment_change(fragment, host)
    }

    pub fn open_jump_dialog(&self, host: &mut dyn PageHost, candidates: Vec<String>) {
        self.dispatcher.open_jump_dialog(host, candidates);
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_modal_open()
    }

    pub fn highlight(&self) -> &HighlightState {
        self.highlighter.state()
    }

    pub fn pending_chord(&self, now: u64) -> Option<char> {
        self.interpreter.pending_prefix(now)
    }

    pub fn revealed_example(&self) -> Option<&ElementId> {
        self.revealed_example.as_ref()
    }
}
