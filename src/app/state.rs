use crate::domain::models::FormSubmission;
use crate::theme::{PaletteType, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const HISTORY_LIMIT: usize = 50;

/// Single-line search box.
#[derive(Default)]
pub struct SearchField(pub TextArea<'static>);

impl SearchField {
    pub fn value(&self) -> String {
        self.0.lines().join("")
    }
}

impl Clone for SearchField {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField")
            .field("value", &self.value())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchField {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl Deref for SearchField {
    type Target = TextArea<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub should_quit: bool,
    pub status_message: Option<String>,

    // --- Search ---
    pub search: SearchField,
    pub delay_ms: u64,
    pub debounce_active: bool,

    // Newest first, at most HISTORY_LIMIT entries.
    pub submissions: Vec<FormSubmission>,

    pub theme: Theme,
}

impl AppState {
    pub fn new(delay_ms: u64, debounce_active: bool) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            search: SearchField::default(),
            delay_ms,
            debounce_active,
            submissions: Vec::new(),
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteType) -> Self {
        self.theme = Theme::from_palette_type(palette);
        self
    }

    pub fn record_submission(&mut self, submission: FormSubmission) {
        self.status_message = Some(format!("Submitted {submission}"));
        self.submissions.insert(0, submission);
        self.submissions.truncate(HISTORY_LIMIT);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::domain::debounce::DEFAULT_DELAY_MS, true)
    }
}
