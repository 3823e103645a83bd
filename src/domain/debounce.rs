//! Debounced form submission.
//!
//! A [`DebouncedSubmitter`] listens to one input element and submits one form once
//! the input has been quiet for the configured delay. Every input event resets the
//! single pending timer, so a burst of keystrokes collapses into one submission.

use crate::domain::document::Document;
use crate::domain::models::InputEvent;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant, Sleep};

pub const DEFAULT_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub input_id: String,
    pub form_id: String,
    pub delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_id: "searchInput".to_string(),
            form_id: "filterForm".to_string(),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl SearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

enum Wake {
    Input(Option<InputEvent>),
    Elapsed,
}

pub struct DebouncedSubmitter {
    document: Arc<dyn Document>,
    form_id: String,
    delay: Duration,
    events: UnboundedReceiver<InputEvent>,
    // At most one; resetting it is the only way a scheduled submission is cancelled.
    pending: Option<Pin<Box<Sleep>>>,
}

impl DebouncedSubmitter {
    /// Subscribes to the configured input element. Returns `None` without attaching
    /// anything when the page has no such element.
    pub fn attach(document: Arc<dyn Document>, config: &SearchConfig) -> Option<Self> {
        let Some(events) = document.subscribe_input(&config.input_id) else {
            tracing::debug!(input_id = %config.input_id, "search input not found, debounce disabled");
            return None;
        };

        tracing::debug!(
            input_id = %config.input_id,
            form_id = %config.form_id,
            delay_ms = config.delay_ms,
            "debounced submitter attached"
        );

        Some(Self {
            document,
            form_id: config.form_id.clone(),
            delay: config.delay(),
            events,
            pending: None,
        })
    }

    /// Attaches and runs the submitter on the current tokio runtime.
    pub fn spawn(document: Arc<dyn Document>, config: &SearchConfig) -> Option<JoinHandle<()>> {
        Self::attach(document, config).map(|submitter| tokio::spawn(submitter.run()))
    }

    /// Handles events until the input's event stream closes. A timer still pending
    /// at that point is dropped without submitting.
    pub async fn run(mut self) {
        loop {
            let wake = match self.pending.as_mut() {
                // Input first: a keystroke queued by the time the deadline passes still resets it.
                Some(timer) => tokio::select! {
                    biased;
                    event = self.events.recv() => Wake::Input(event),
                    () = timer => Wake::Elapsed,
                },
                None => Wake::Input(self.events.recv().await),
            };

            match wake {
                Wake::Input(Some(event)) => self.on_input(&event),
                Wake::Input(None) => break,
                Wake::Elapsed => self.on_elapsed(),
            }
        }

        tracing::debug!(form_id = %self.form_id, "search input closed, debounced submitter stopped");
    }

    fn on_input(&mut self, event: &InputEvent) {
        let deadline = Instant::now() + self.delay;
        match self.pending.as_mut() {
            Some(timer) => timer.as_mut().reset(deadline),
            None => self.pending = Some(Box::pin(sleep_until(deadline))),
        }
        tracing::trace!(value = %event.value, "submission rescheduled");
    }

    fn on_elapsed(&mut self) {
        self.pending = None;

        // The form may have been detached since the timer was scheduled.
        match self.document.form(&self.form_id) {
            Some(form) => {
                tracing::debug!(form_id = %form.id(), "submitting form");
                form.submit();
            }
            None => {
                tracing::debug!(form_id = %self.form_id, "form not found, submission skipped");
            }
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
