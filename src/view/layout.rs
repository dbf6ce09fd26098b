//! Dashboard layout rendering.
//!
//! Top to bottom: header, filter bar, charts row, command table (with the
//! detail viewer beside it while a record is selected) and status bar.

use super::charts::render_charts;
use super::constants::{
    CHARTS_HEIGHT, DETAIL_WIDTH_PERCENT, FILTER_BAR_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT_FOR_CHARTS,
    STATUS_BAR_HEIGHT, TABLE_CHROME_HEIGHT,
};
use super::detail::render_detail;
use super::help::render_help_overlay;
use super::helpers::truncate_to_width;
use super::search_input::FilterBar;
use super::styles::{status_icon, Palette};
use super::table::render_command_table;
use crate::model::Status;
use crate::state::{AppState, FocusPane, LoadStatus};
use crate::stats::status_counts;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub filter_bar: Rect,
    pub charts: Option<Rect>,
    pub table: Rect,
    pub detail: Option<Rect>,
    pub status_bar: Rect,
}

impl DashboardAreas {
    /// Table rows that fit on screen, used as the page size.
    pub fn table_page_height(&self) -> usize {
        usize::from(self.table.height.saturating_sub(TABLE_CHROME_HEIGHT)).max(1)
    }
}

/// Split `area` into the dashboard regions.
///
/// Short terminals drop the charts row. The detail viewer only takes space
/// while a record is selected.
pub fn calculate_areas(area: Rect, show_detail: bool) -> DashboardAreas {
    let charts_height = if area.height >= MIN_HEIGHT_FOR_CHARTS {
        CHARTS_HEIGHT
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Length(charts_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let (table, detail) = if show_detail {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - DETAIL_WIDTH_PERCENT),
                Constraint::Percentage(DETAIL_WIDTH_PERCENT),
            ])
            .split(rows[3]);
        (columns[0], Some(columns[1]))
    } else {
        (rows[3], None)
    };

    DashboardAreas {
        header: rows[0],
        filter_bar: rows[1],
        charts: (charts_height > 0).then_some(rows[2]),
        table,
        detail,
        status_bar: rows[4],
    }
}

/// Render the whole dashboard. Returns the table page height.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette) -> usize {
    let view_model = state.view_model();
    let selected = view_model.selected_record();
    let areas = calculate_areas(frame.area(), selected.is_some());

    render_header(frame, areas.header, state, palette);

    frame.render_widget(
        FilterBar::new(
            &state.search,
            view_model.search_term(),
            view_model.subcommand_filter(),
            view_model.sort(),
            palette,
        ),
        areas.filter_bar,
    );

    if let Some(charts_area) = areas.charts {
        render_charts(
            frame,
            charts_area,
            &view_model.visible_rows(),
            state.chart,
            state.duration_points,
            palette,
        );
    }

    render_command_table(frame, areas.table, state, palette);

    if let (Some(record), Some(detail_area)) = (selected, areas.detail) {
        let hidden = view_model.position_of(record.id()).is_none();
        render_detail(
            frame,
            detail_area,
            record,
            hidden,
            state.detail_scroll,
            state.focus == FocusPane::Detail,
            palette,
        );
    }

    render_status_bar(frame, areas.status_bar, state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }

    areas.table_page_height()
}

/// Header: title, record count, status totals and source.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let records = state.view_model().records();
    let counts = status_counts(records);

    let mut spans = vec![
        Span::styled(" ArbiSight ", palette.accent()),
        Span::raw(format!(" {} commands logged ", records.len())),
    ];
    for status in Status::ALL {
        spans.push(Span::styled(
            format!(" {} {} ", status_icon(status), counts.get(status)),
            palette.status(status),
        ));
    }
    if !state.source_label.is_empty() {
        spans.push(Span::styled(
            format!("  source: {}", state.source_label),
            palette.muted(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the focused pane.
pub fn keyboard_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Table => {
            "j/k move  Enter open  / search  [ ] filter  t/c/u/a/d/s sort  v chart  r reload  ? help  q quit"
        }
        FocusPane::Detail => "j/k scroll  Esc close  Tab table  q quit",
        FocusPane::Search => "type to search  Enter keep  Esc clear",
    }
}

/// Status bar: hints on the left, load status and rejected entries after them.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut notices: Vec<Span> = Vec::new();
    if state.load_status == LoadStatus::Loading {
        notices.push(Span::styled(" Loading… ", palette.key_hint()));
    }
    if state.rejected_count > 0 {
        notices.push(Span::styled(
            format!(" {} entries rejected ", state.rejected_count),
            palette.status(Status::Warning),
        ));
    }
    if let Some(error) = &state.load_error {
        notices.push(Span::styled(
            format!(" Reload failed: {error} "),
            palette.error_text(),
        ));
    }

    let notice_width: usize = notices.iter().map(|s| s.width()).sum();
    let hint_width = usize::from(area.width).saturating_sub(notice_width);

    let mut spans = vec![Span::styled(
        truncate_to_width(keyboard_hints(state.focus), hint_width),
        palette.muted(),
    )];
    spans.extend(notices);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
