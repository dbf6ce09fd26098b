//! Rendering tests for the dashboard
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.
//! Small widgets are pinned with inline snapshots; full-screen frames are
//! checked for their key content.

use arbisight::config::ResolvedConfig;
use arbisight::model::{SortDirection, SortField, SortSpec};
use arbisight::source::InputSource;
use arbisight::state::SearchState;
use arbisight::view::{ColorConfig, FilterBar, Palette, StartupOptions, TuiApp};
use arbisight::view_model::SubcommandFilter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn demo_app(options: StartupOptions) -> TuiApp<TestBackend> {
    TuiApp::with_terminal(create_terminal(140, 40), InputSource::Demo, options).unwrap()
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.draw().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

// ===== FilterBar Snapshot Tests =====

#[test]
fn snapshot_filter_bar_defaults() {
    let mut terminal = create_terminal(70, 3);
    terminal
        .draw(|frame| {
            let bar = FilterBar::new(
                &SearchState::Inactive,
                "",
                &SubcommandFilter::All,
                SortSpec::default(),
                Palette::new(ColorConfig::from_env_and_args(true)),
            );
            frame.render_widget(bar, frame.area());
        })
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Filters ───────────────────────────────────────────────────────────┐
    │Search: (none)   Subcommand: All Subcommands   Sort: timestamp ▼    │
    └────────────────────────────────────────────────────────────────────┘
    ");
}

#[test]
fn snapshot_filter_bar_with_criteria() {
    let mut terminal = create_terminal(70, 3);
    terminal
        .draw(|frame| {
            let subcommand = SubcommandFilter::Only("deploy".to_string());
            let bar = FilterBar::new(
                &SearchState::Inactive,
                "gas",
                &subcommand,
                SortSpec::new(SortField::Duration, SortDirection::Ascending),
                Palette::new(ColorConfig::from_env_and_args(true)),
            );
            frame.render_widget(bar, frame.area());
        })
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Filters ───────────────────────────────────────────────────────────┐
    │Search: gas   Subcommand: deploy   Sort: duration ▲                 │
    └────────────────────────────────────────────────────────────────────┘
    ");
}

// ===== Full dashboard =====

#[test]
fn dashboard_shows_all_regions() {
    let mut app = demo_app(StartupOptions::new(ResolvedConfig::default()));
    let output = screen(&mut app);

    assert!(output.contains("12 commands logged"));
    assert!(output.contains("Filters"));
    assert!(output.contains("Command Duration"));
    assert!(output.contains("Subcommand Usage"));
    assert!(output.contains("Commands (12/12)"));
    assert!(output.contains("? help"));
}

#[test]
fn dashboard_breakdown_chart_lists_percentages() {
    let mut config = ResolvedConfig::default();
    config.chart = arbisight::model::ChartKind::Breakdown;
    let mut app = demo_app(StartupOptions::new(config));

    let output = screen(&mut app);

    // deploy is 3 of 12 demo commands
    assert!(output.contains("25.0%"), "{output}");
}

#[test]
fn toggling_chart_switches_rendering() {
    let mut app = demo_app(StartupOptions::new(ResolvedConfig::default()));
    assert!(!screen(&mut app).contains("25.0%"));

    press(&mut app, KeyCode::Char('v'));

    assert!(screen(&mut app).contains("25.0%"));
}

#[test]
fn opening_detail_shows_selected_record() {
    let mut app = demo_app(StartupOptions::new(ResolvedConfig::default()));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    let output = screen(&mut app);

    assert!(output.contains("Command #11"), "{output}");
    assert!(output.contains("Arguments: --output contract.abi"), "{output}");

    press(&mut app, KeyCode::Esc);
    assert!(!screen(&mut app).contains("Command #11"));
}

#[test]
fn search_with_no_matches_shows_empty_message() {
    let mut options = StartupOptions::new(ResolvedConfig::default());
    options.search = Some("zzz-no-match".to_string());
    let mut app = demo_app(options);

    let output = screen(&mut app);

    assert!(output.contains("No commands found matching your filters"));
    assert!(output.contains("No data to display"));
}

#[test]
fn help_overlay_toggles() {
    let mut app = demo_app(StartupOptions::new(ResolvedConfig::default()));

    press(&mut app, KeyCode::Char('?'));
    assert!(screen(&mut app).contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Esc);
    assert!(!screen(&mut app).contains("Keyboard Shortcuts"));
}
