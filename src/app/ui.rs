use crate::app::state::AppState;
use crate::domain::models::FormSubmission;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub history: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Submissions
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search: chunks[1],
        history: chunks[2],
        footer: chunks[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());

    draw_header(f, app_state, &theme, layout.header);

    // --- Search ---
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" SEARCH ", theme.header_logo),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus);
    app_state.search.set_block(block);
    app_state.search.set_cursor_line_style(Style::default());
    if layout.search.width > 0 && layout.search.height > 0 {
        f.render_widget(&app_state.search, layout.search);
    }

    // --- Submissions ---
    let items: Vec<ListItem> = if app_state.submissions.is_empty() {
        vec![ListItem::new(Span::styled(
            "  No submissions yet. Start typing.",
            theme.dimmed,
        ))]
    } else {
        app_state
            .submissions
            .iter()
            .map(|submission| ListItem::new(submission_line(submission, &theme)))
            .collect()
    };
    let history = List::new(items).block(
        Block::default()
            .title(format!(" Submitted ({}) ", app_state.submissions.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border),
    );
    f.render_widget(history, layout.history);

    draw_footer(f, app_state, &theme, layout.footer);
}

fn draw_header(f: &mut Frame, app_state: &AppState, theme: &Theme, area: Rect) {
    let debounce = if app_state.debounce_active {
        Span::styled(format!(" debounce {}ms ", app_state.delay_ms), theme.status_ready)
    } else {
        Span::styled(" debounce off ", theme.status_info)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" lull ", theme.header_logo),
        Span::raw(" "),
        debounce,
    ]))
    .style(theme.header);
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, app_state: &AppState, theme: &Theme, area: Rect) {
    let mut spans = Vec::new();
    for (key, label) in [("Esc", "quit"), ("^U", "clear")] {
        spans.push(Span::styled(format!(" {key} "), theme.footer_segment_key));
        spans.push(Span::styled(format!(" {label} "), theme.footer_segment_val));
    }
    if let Some(status) = &app_state.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::raw(status.clone()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.footer), area);
}

fn submission_line<'a>(submission: &'a FormSubmission, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            submission.submitted_at.format("%H:%M:%S").to_string(),
            theme.timestamp,
        ),
        Span::raw(" "),
        Span::styled(submission.form_id.as_str(), theme.list_item),
    ];
    for (name, value) in &submission.fields {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(name.as_str(), theme.field_name));
        spans.push(Span::raw("="));
        spans.push(Span::styled(format!("{value:?}"), theme.field_value));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let mut state = AppState::default();
        let screen = render(&mut state);
        assert!(screen.contains("SEARCH"));
        assert!(screen.contains("No submissions yet"));
        assert!(screen.contains("debounce 300ms"));
    }

    #[test]
    fn test_submissions_are_listed() {
        let mut state = AppState::new(300, false);
        state.search.insert_str("oolong");
        state.record_submission(FormSubmission {
            form_id: "filterForm".to_string(),
            fields: vec![("search".to_string(), "oolong".to_string())],
            submitted_at: chrono::Local::now(),
        });

        let screen = render(&mut state);
        assert!(screen.contains("debounce off"));
        assert!(screen.contains("Submitted (1)"));
        assert!(screen.contains(r#"search="oolong""#));
    }

    #[test]
    fn test_configured_palette_is_used() {
        use crate::theme::{catppuccin::CATPPUCCIN_MOCHA, PaletteType};

        let mut state = AppState::default().with_palette(PaletteType::Catppuccin);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        // Header logo cell.
        assert_eq!(terminal.backend().buffer()[(1, 0)].bg, CATPPUCCIN_MOCHA.blue);
    }

    #[test]
    fn test_zero_sized_area_is_skipped() {
        let mut terminal = Terminal::new(TestBackend::new(0, 0)).unwrap();
        let mut state = AppState::default();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
