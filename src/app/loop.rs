use crate::app::{action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui};
use crate::domain::models::FormSubmission;
use crate::infrastructure::page::Page;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Where the search box's value is pushed.
#[derive(Clone)]
pub struct SearchTarget {
    pub page: Arc<Page>,
    pub input_id: String,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    target: SearchTarget,
    submissions: mpsc::UnboundedReceiver<FormSubmission>,
) -> Result<AppState> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, target, submissions, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    target: SearchTarget,
    mut submissions: mpsc::UnboundedReceiver<FormSubmission>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState> {
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event)
            },

            // Page
            Some(submission) = submissions.recv() => Some(Action::FormSubmitted(submission)),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &target);
            }
        }
    }

    Ok(app_state)
}

pub(crate) fn handle_command(command: Command, target: &SearchTarget) {
    match command {
        Command::SetSearchValue(value) => {
            if !target.page.set_value(&target.input_id, &value) {
                tracing::warn!(input_id = %target.input_id, "search input missing from page");
            }
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
