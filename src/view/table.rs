//! Command table.
//!
//! One row per visible record, in view-model order. The active sort column
//! carries a ▲/▼ marker.

use super::styles::{status_icon, Palette};
use crate::model::{LogRecord, SortField, SortSpec};
use crate::state::{AppState, FocusPane};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub const EMPTY_TABLE_MESSAGE: &str = "No commands found matching your filters";

/// Header columns and the field each one sorts by.
const COLUMNS: [(&str, Option<SortField>); 7] = [
    ("", None),
    ("Timestamp", Some(SortField::Timestamp)),
    ("Command", Some(SortField::Command)),
    ("Subcommand", Some(SortField::Subcommand)),
    ("Args", Some(SortField::Args)),
    ("Duration", Some(SortField::Duration)),
    ("Status", Some(SortField::Status)),
];

fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Length(1),
        Constraint::Length(19),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(8),
    ]
}

/// Header label with the sort marker when `field` is active.
pub fn column_title(label: &str, field: Option<SortField>, sort: SortSpec) -> String {
    match field {
        Some(field) if field == sort.field => format!("{label} {}", sort.direction.arrow()),
        _ => label.to_string(),
    }
}

/// Seconds with two decimals, e.g. `13.54s`.
pub fn format_duration(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

fn record_row<'a>(record: &'a LogRecord, palette: Palette) -> Row<'a> {
    let status_style = palette.status(record.status());
    let args = if record.args().is_empty() {
        "-"
    } else {
        record.args()
    };

    Row::new(vec![
        Cell::from(Span::styled(status_icon(record.status()), status_style)),
        Cell::from(record.timestamp().display()),
        Cell::from(record.command()),
        Cell::from(Span::styled(record.subcommand(), palette.accent())),
        Cell::from(args),
        Cell::from(format_duration(record.duration())),
        Cell::from(Span::styled(record.status().as_str(), status_style)),
    ])
}

/// Render the table with the cursor row highlighted.
pub fn render_command_table(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let view_model = state.view_model();
    let rows = view_model.rows();
    let sort = view_model.sort();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " Commands ({}/{}) ",
            rows.len(),
            view_model.records().len()
        ))
        .border_style(palette.border(state.focus == FocusPane::Table));

    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_TABLE_MESSAGE, palette.muted()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(label, field)| Cell::from(column_title(label, *field, sort))),
    )
    .style(palette.accent());

    let table = Table::new(
        rows.iter().map(|record| record_row(record, palette)),
        column_widths(),
    )
    .header(header)
    .block(block)
    .row_highlight_style(palette.highlight());

    let mut table_state = TableState::default().with_selected(Some(state.cursor()));
    frame.render_stateful_widget(table, area, &mut table_state);
}
