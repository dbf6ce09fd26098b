//! Detail viewer for the selected record.

use super::helpers::{empty_line, key_value_line};
use super::styles::{status_icon, Palette};
use super::table::format_duration;
use crate::model::LogRecord;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines of the detail body. Arguments are omitted when empty.
pub fn detail_lines(record: &LogRecord, palette: Palette) -> Vec<Line<'static>> {
    let label = palette.accent();
    let status_style = palette.status(record.status());

    let mut lines = vec![
        key_value_line("Timestamp", record.timestamp().display(), label),
        key_value_line("Duration", format_duration(record.duration()), label),
        key_value_line("Command", record.command(), label),
        key_value_line("Subcommand", record.subcommand(), label),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(
                format!("{} {}", status_icon(record.status()), record.status()),
                status_style,
            ),
        ]),
    ];

    if !record.args().is_empty() {
        lines.push(key_value_line("Arguments", record.args(), label));
    }

    lines.push(empty_line());
    lines.push(Line::from(Span::styled("Output", label)));
    lines.extend(
        record
            .output()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), status_style))),
    );
    lines
}

/// Render the selected record. `hidden` marks a selection the current
/// filters exclude from the table.
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    record: &LogRecord,
    hidden: bool,
    scroll: u16,
    focused: bool,
    palette: Palette,
) {
    let title = if hidden {
        format!(" Command #{} (filtered out) ", record.id())
    } else {
        format!(" Command #{} ", record.id())
    };

    let paragraph = Paragraph::new(detail_lines(record, palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(palette.border(focused)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
