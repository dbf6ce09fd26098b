//! Filter bar: search box, subcommand filter and current sort.

use super::styles::Palette;
use crate::model::SortSpec;
use crate::state::SearchState;
use crate::view_model::SubcommandFilter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter bar widget.
///
/// While the search box has focus the query is drawn with a block cursor;
/// otherwise the applied search term is shown read-only.
pub struct FilterBar<'a> {
    search_state: &'a SearchState,
    search_term: &'a str,
    filter: &'a SubcommandFilter,
    sort: SortSpec,
    palette: Palette,
}

impl<'a> FilterBar<'a> {
    pub fn new(
        search_state: &'a SearchState,
        search_term: &'a str,
        filter: &'a SubcommandFilter,
        sort: SortSpec,
        palette: Palette,
    ) -> Self {
        Self {
            search_state,
            search_term,
            filter,
            sort,
            palette,
        }
    }

    fn search_spans(&self) -> Vec<Span<'static>> {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
                let rest: String = after.collect();

                vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(rest),
                ]
            }
            SearchState::Inactive if self.search_term.is_empty() => {
                vec![Span::styled("(none)", self.palette.muted())]
            }
            SearchState::Inactive => vec![Span::raw(self.search_term.to_string())],
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = self.palette.accent();
        let mut spans = vec![Span::styled("Search: ", label)];
        spans.extend(self.search_spans());
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Subcommand: ", label));
        spans.push(Span::raw(self.filter.label().to_string()));
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Sort: ", label));
        spans.push(Span::raw(format!(
            "{} {}",
            self.sort.field,
            self.sort.direction.arrow()
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(self.palette.border(self.search_state.is_typing()));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
