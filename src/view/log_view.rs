//! Entry list and status line.

use crate::state::{AppState, StatusKind};
use crate::view::LevelStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Rows left for entries in an area of `total_height` rows.
pub fn entry_rows(total_height: u16) -> usize {
    usize::from(total_height.saturating_sub(1)).max(1)
}

/// Draw the visible entries with the status line below them.
pub fn render_log_view(frame: &mut Frame, area: Rect, state: &AppState, styles: &LevelStyles) {
    let [entries_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let lines: Vec<Line> = state
        .visible_entries()
        .map(|entry| Line::styled(entry.text(), styles.style_for_level(entry.level())))
        .collect();
    frame.render_widget(Paragraph::new(lines), entries_area);

    frame.render_widget(status_line(state, styles), status_area);
}

fn status_line<'a>(state: &'a AppState, styles: &LevelStyles) -> Paragraph<'a> {
    let (text, style) = match &state.status {
        Some(status) if status.kind == StatusKind::Error => {
            (status.text.clone(), styles.status_error())
        }
        Some(status) => (status.text.clone(), styles.status_bar()),
        None => {
            let name = state
                .source()
                .window()
                .path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (name, styles.status_bar())
        }
    };

    let mut spans = vec![Span::raw(text)];
    if state.follow {
        spans.push(Span::raw(" [follow]"));
    }
    if state.source().is_colorized() {
        spans.push(Span::raw(" [colour]"));
    }

    Paragraph::new(Line::from(spans)).style(style)
}
