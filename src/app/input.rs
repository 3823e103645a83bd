use crate::app::action::Action;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => Some(Action::Quit),
                KeyCode::Char('c') if ctrl => Some(Action::Quit),
                KeyCode::Char('u') if ctrl => Some(Action::ClearSearch),
                // Single-line field.
                KeyCode::Enter => None,
                KeyCode::Char('m') | KeyCode::Char('j') if ctrl => None,
                _ => Some(Action::SearchKey(key)),
            }
        }
        Event::Paste(text) => Some(Action::Paste(text)),
        _ => None,
    }
}
