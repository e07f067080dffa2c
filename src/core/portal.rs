//! The portal controller.
//!
//! One `Portal` owns the application state and handles one intent at a time.
//! Handlers live in `crate::handlers` as `impl Portal` blocks.

use crate::core::config::Config;
use crate::core::error::IntentError;
use crate::core::startup::seed_state;
use crate::core::state::AppState;
use crate::metrics::collector::MetricsSnapshot;
use crate::models::event::PortalEvent;
use crate::models::notice::{Notice, Severity};
use crate::notify::sink::EventSink;
use tracing::{debug, warn};

/// Yes/no prompt owned by the view layer, asked before destructive actions
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer, for hosts that collect the confirmation up front
#[derive(Debug, Clone, Copy)]
pub struct Preconfirmed(pub bool);

impl Confirm for Preconfirmed {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

pub const MALFORMED_INTENT_MESSAGE: &str = "Unrecognized request";

pub struct Portal {
    pub(crate) state: AppState,
    sink: Box<dyn EventSink>,
}

impl Portal {
    /// Build a portal with seeded state, emitting through `sink`
    pub fn new(config: Config, sink: Box<dyn EventSink>) -> Self {
        let state = AppState::new(config);
        seed_state(&state);

        Self { state, sink }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.state.metrics.get_snapshot(
            &self.state.attendance,
            &self.state.leaves,
            &self.state.materials,
        )
    }

    pub(crate) fn emit(&self, event: PortalEvent) {
        debug!(event = event.name(), "Emitting event");
        self.sink.emit(&event);
    }

    pub(crate) fn notify(&self, message: impl Into<String>, severity: Severity) {
        let notice = Notice::new(message, severity);
        debug!(severity = %notice.severity, text = %notice.message, "Notification");
        self.emit(PortalEvent::Notify(notice));
    }

    /// Start of every intent
    pub(crate) fn begin(&self, intent: &'static str) {
        debug!(intent, "Handling intent");
        self.state.metrics.increment_intents();
    }

    /// Record a successful intent that has nothing to tell the user
    pub(crate) fn accepted(&self) {
        self.state.metrics.increment_accepted();
    }

    /// Record a successful intent and show its message
    pub(crate) fn accept(&self, message: impl Into<String>) {
        self.accepted();
        self.notify(message, Severity::Success);
    }

    /// Record a failed intent, surface it to the user and hand it back
    pub(crate) fn reject<T>(
        &self,
        intent: &'static str,
        err: impl Into<IntentError>,
    ) -> Result<T, IntentError> {
        let err = err.into();
        warn!(intent, error = %err, "Intent rejected");
        self.state.metrics.increment_rejected();
        self.notify(err.user_message(), Severity::Error);
        Err(err)
    }

    /// A request line that could not be decoded into an intent
    pub(crate) fn reject_malformed(&self) {
        self.state.metrics.increment_intents();
        self.state.metrics.increment_rejected();
        self.notify(MALFORMED_INTENT_MESSAGE, Severity::Error);
    }

    /// The user answered "no" to a confirmation prompt
    pub(crate) fn declined(&self, intent: &'static str) {
        debug!(intent, "Confirmation declined");
        self.state.metrics.increment_declined();
    }
}
