use crate::domain::models::FormSubmission;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Search field ---
    SearchKey(KeyEvent), // Forwarded to the text area
    Paste(String),
    ClearSearch,

    // --- Page ---
    FormSubmitted(FormSubmission),
}
