//! Charts row: command duration over the filtered rows, and subcommand usage.

use super::styles::Palette;
use super::helpers::truncate_to_width;
use crate::model::{ChartKind, LogRecord};
use crate::stats::{duration_series, max_duration, subcommand_usage, DurationPoint, SubcommandUsage};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Width given to the subcommand name in the breakdown list.
const BREAKDOWN_LABEL_WIDTH: usize = 12;

/// Render both charts side by side over `rows`.
pub fn render_charts(
    frame: &mut Frame,
    area: Rect,
    rows: &[&LogRecord],
    chart: ChartKind,
    duration_points: usize,
    palette: Palette,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_duration_chart(frame, halves[0], &duration_series(rows, duration_points), palette);

    let usage = subcommand_usage(rows);
    match chart {
        ChartKind::Bar => render_usage_bars(frame, halves[1], &usage, palette),
        ChartKind::Breakdown => render_usage_breakdown(frame, halves[1], &usage, palette),
    }
}

fn no_data(frame: &mut Frame, area: Rect, block: Block, palette: Palette) {
    let paragraph = Paragraph::new(Span::styled(NO_DATA_MESSAGE, palette.muted()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_duration_chart(frame: &mut Frame, area: Rect, points: &[DurationPoint], palette: Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Command Duration (s) ")
        .border_style(palette.border(false));

    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return no_data(frame, area, block, palette),
    };

    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.index as f64, p.duration))
        .collect();

    let x_min = first.index as f64;
    // A single point still needs a non-empty x range
    let x_max = (last.index as f64).max(x_min + 1.0);
    let y_max = match max_duration(points) {
        max if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(palette.chart())
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([x_min, x_max])
                .labels(vec![first.label.clone(), last.label.clone()]),
        )
        .y_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([0.0, y_max])
                .labels(vec!["0".to_string(), format!("{:.1}", y_max)]),
        );

    frame.render_widget(chart, area);
}

fn usage_block(palette: Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Subcommand Usage ")
        .border_style(palette.border(false))
}

fn render_usage_bars(frame: &mut Frame, area: Rect, usage: &[SubcommandUsage], palette: Palette) {
    let block = usage_block(palette);
    if usage.is_empty() {
        return no_data(frame, area, block, palette);
    }

    let data: Vec<(&str, u64)> = usage
        .iter()
        .map(|u| (u.subcommand.as_str(), u.count as u64))
        .collect();

    let bars = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(bar_width(area.width, usage.len()))
        .bar_gap(1)
        .bar_style(palette.chart())
        .value_style(palette.highlight());

    frame.render_widget(bars, area);
}

/// Widest bars that still fit every subcommand inside the borders.
fn bar_width(area_width: u16, bars: usize) -> u16 {
    let inner = usize::from(area_width.saturating_sub(2));
    let per_bar = inner / bars.max(1);
    u16::try_from(per_bar.saturating_sub(1).clamp(1, 12)).unwrap_or(1)
}

/// One line per subcommand, e.g. `deploy       3  25.0% ███`.
pub fn breakdown_lines(usage: &[SubcommandUsage], bar_space: usize, palette: Palette) -> Vec<Line<'static>> {
    usage
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let filled = ((entry.percentage / 100.0) * bar_space as f64).round() as usize;
            Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$} ",
                        truncate_to_width(&entry.subcommand, BREAKDOWN_LABEL_WIDTH),
                        width = BREAKDOWN_LABEL_WIDTH
                    ),
                    palette.series(i),
                ),
                Span::raw(format!("{:>3} {:>5}% ", entry.count, entry.percentage_label())),
                Span::styled("█".repeat(filled), palette.series(i)),
            ])
        })
        .collect()
}

fn render_usage_breakdown(
    frame: &mut Frame,
    area: Rect,
    usage: &[SubcommandUsage],
    palette: Palette,
) {
    let block = usage_block(palette);
    if usage.is_empty() {
        return no_data(frame, area, block, palette);
    }

    // Label, count and percentage take the first columns
    let text_width = BREAKDOWN_LABEL_WIDTH + 1 + 3 + 1 + 6 + 1;
    let bar_space = usize::from(area.width.saturating_sub(2)).saturating_sub(text_width);

    let paragraph = Paragraph::new(breakdown_lines(usage, bar_space, palette)).block(block);
    frame.render_widget(paragraph, area);
}
