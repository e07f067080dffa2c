//! Event sinks: where notifications and state-change events go.
//!
//! The controller only decides what to emit. A sink owned by the view layer
//! decides how it is shown and for how long.

use crate::models::event::PortalEvent;
use crate::models::notice::Severity;
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::error;

/// Receiver of everything the controller emits. Fire-and-forget.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PortalEvent);
}

/// Keeps every emitted event in memory; clones share the same buffer
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PortalEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PortalEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Notifications only, in emission order
    pub fn notices(&self) -> Vec<(String, Severity)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PortalEvent::Notify(notice) => Some((notice.message, notice.severity)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PortalEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    event: &'a PortalEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dismiss_after_ms: Option<u64>,
}

/// One JSON object per line; notifications carry their colour and display time
pub struct JsonLinesSink<W: Write + Send> {
    out: Mutex<W>,
    dismiss_after_ms: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W, dismiss_after_ms: u64) -> Self {
        Self {
            out: Mutex::new(out),
            dismiss_after_ms,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn emit(&self, event: &PortalEvent) {
        let (color, dismiss_after_ms) = match event {
            PortalEvent::Notify(notice) => {
                (Some(notice.severity.color()), Some(self.dismiss_after_ms))
            }
            _ => (None, None),
        };

        let line = JsonLine {
            event,
            color,
            dismiss_after_ms,
        };

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let written = serde_json::to_writer(&mut *out, &line)
            .map_err(std::io::Error::from)
            .and_then(|_| out.write_all(b"\n"))
            .and_then(|_| out.flush());

        if let Err(e) = written {
            error!(error = %e, event = event.name(), "Failed to write event");
        }
    }
}
