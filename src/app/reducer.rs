use super::{action::Action, command::Command, state::AppState, state::SearchField};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::SearchKey(key) => {
            let before = state.search.value();
            state.search.input(key);
            return value_changed(state, &before);
        }
        Action::Paste(text) => {
            let before = state.search.value();
            let line: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            state.search.insert_str(line);
            return value_changed(state, &before);
        }
        Action::ClearSearch => {
            let before = state.search.value();
            state.search = SearchField::default();
            return value_changed(state, &before);
        }
        Action::FormSubmitted(submission) => {
            state.record_submission(submission);
        }
    }
    None
}

// Only real changes count as input; cursor movement must not restart the debounce.
fn value_changed(state: &AppState, before: &str) -> Option<Command> {
    let after = state.search.value();
    (after != before).then_some(Command::SetSearchValue(after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::HISTORY_LIMIT;
    use crate::domain::models::FormSubmission;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(state: &mut AppState, code: KeyCode) -> Option<Command> {
        update(state, Action::SearchKey(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn submission(query: &str) -> FormSubmission {
        FormSubmission {
            form_id: "filterForm".to_string(),
            fields: vec![("search".to_string(), query.to_string())],
            submitted_at: chrono::Local::now(),
        }
    }

    #[test]
    fn test_typing_emits_value_changes() {
        let mut state = AppState::default();
        assert_eq!(
            press(&mut state, KeyCode::Char('t')),
            Some(Command::SetSearchValue("t".to_string()))
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('o')),
            Some(Command::SetSearchValue("to".to_string()))
        );
        assert_eq!(
            press(&mut state, KeyCode::Backspace),
            Some(Command::SetSearchValue("t".to_string()))
        );
    }

    #[test]
    fn test_cursor_motion_emits_nothing() {
        let mut state = AppState::default();
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(press(&mut state, KeyCode::Left), None);
        assert_eq!(press(&mut state, KeyCode::Home), None);
        // Backspace at the start of the line changes nothing.
        assert_eq!(press(&mut state, KeyCode::Backspace), None);
        assert_eq!(state.search.value(), "a");
    }

    #[test]
    fn test_clear_search() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::ClearSearch), None);

        press(&mut state, KeyCode::Char('x'));
        assert_eq!(
            update(&mut state, Action::ClearSearch),
            Some(Command::SetSearchValue(String::new()))
        );
        assert_eq!(state.search.value(), "");
    }

    #[test]
    fn test_paste_stays_on_one_line() {
        let mut state = AppState::default();
        let command = update(&mut state, Action::Paste("green\ntea".to_string()));
        assert_eq!(command, Some(Command::SetSearchValue("green tea".to_string())));
        assert_eq!(state.search.lines().len(), 1);
    }

    #[test]
    fn test_submissions_are_kept_newest_first_and_bounded() {
        let mut state = AppState::default();
        for i in 0..HISTORY_LIMIT + 5 {
            update(&mut state, Action::FormSubmitted(submission(&i.to_string())));
        }
        assert_eq!(state.submissions.len(), HISTORY_LIMIT);
        assert_eq!(
            state.submissions[0].field("search"),
            Some((HISTORY_LIMIT + 4).to_string().as_str())
        );
        assert!(state.status_message.as_deref().unwrap().contains("filterForm"));
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }
}
