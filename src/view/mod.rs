//! TUI rendering and terminal management (impure shell)

mod charts;
pub mod constants;
mod detail;
mod help;
mod helpers;
pub mod layout;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use helpers::truncate_to_width;
pub use layout::render_layout;
pub use search_input::FilterBar;
pub use styles::{status_icon, ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, SortField};
use crate::source::{InputSource, LoadResult, RecordLoader};
use crate::state::{handle_action, ActionOutcome, AppState, FocusPane};
use crate::view_model::{LogViewModel, SubcommandFilter};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How long the event loop waits for input before checking for finished loads.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Initial state requested on the command line, plus resolved configuration.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub config: ResolvedConfig,
    /// Initial search term (`--search`).
    pub search: Option<String>,
    /// Initial subcommand filter (`--subcommand`).
    pub subcommand: Option<String>,
    /// Sort field activated once after the configured default (`--sort`).
    pub sort: Option<SortField>,
    pub colors: ColorConfig,
}

impl StartupOptions {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            search: None,
            subcommand: None,
            sort: None,
            colors: ColorConfig::enabled(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    loader: RecordLoader,
    palette: Palette,
    /// Table rows per page, measured at the last draw.
    page_height: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. The terminal is
    /// restored if the initial load fails.
    pub fn new(input_source: InputSource, options: StartupOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, input_source, options).inspect_err(|_| {
            // Already failing; the original error is the one worth reporting
            let _ = restore_terminal();
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.poll_loader() {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app over any backend and load the initial record set.
    ///
    /// The initial load runs synchronously so the first frame has data.
    /// Command-line search, filter and sort are applied before it is drawn.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Input` when the source cannot be read.
    pub fn with_terminal(
        terminal: Terminal<B>,
        input_source: InputSource,
        options: StartupOptions,
    ) -> Result<Self, TuiError> {
        let outcome = input_source.load()?;

        let mut view_model = LogViewModel::new(options.config.selection_policy);
        view_model.set_sort_spec(options.config.default_sort);
        if let Some(field) = options.sort {
            view_model.set_sort(field);
        }

        let mut app_state = AppState::new(view_model);
        app_state.chart = options.config.chart;
        app_state.duration_points = options.config.duration_points;
        app_state.source_label = input_source.label();
        app_state.apply_load(outcome);

        if let Some(term) = options.search {
            app_state.set_search_term(term);
        }
        if let Some(subcommand) = options.subcommand.as_deref() {
            app_state.set_subcommand_filter(SubcommandFilter::from_option(Some(subcommand)));
        }

        info!(
            source = %app_state.source_label,
            records = app_state.view_model().records().len(),
            rows = app_state.view_model().row_count(),
            "Dashboard ready"
        );

        Ok(Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            loader: RecordLoader::new(),
            palette: Palette::new(options.colors),
            page_height: 1,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The search box takes text keys before the bindings see them
        if self.app_state.focus == FocusPane::Search && self.app_state.search.is_typing() {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state.search_input_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.search_backspace();
                    return false;
                }
                KeyCode::Left => {
                    self.app_state.search_cursor_left();
                    return false;
                }
                KeyCode::Right => {
                    self.app_state.search_cursor_right();
                    return false;
                }
                KeyCode::Enter => {
                    self.app_state.submit_search();
                    return false;
                }
                KeyCode::Esc => {
                    self.app_state.cancel_search();
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        match handle_action(&mut self.app_state, action, self.page_height) {
            ActionOutcome::Continue => false,
            ActionOutcome::Reload => {
                self.request_reload();
                false
            }
            ActionOutcome::Quit => true,
        }
    }

    /// Start a background reload. A newer reload supersedes this one.
    fn request_reload(&mut self) {
        self.app_state.mark_loading();
        let generation = self.loader.request(self.input_source.clone());
        info!(generation, source = %self.app_state.source_label, "Reload requested");
    }

    /// Apply a finished load, if any. Returns true when state changed.
    fn poll_loader(&mut self) -> bool {
        match self.loader.poll() {
            Some(result) => {
                self.receive_load(result);
                true
            }
            None => false,
        }
    }

    fn receive_load(&mut self, load: LoadResult) {
        match load.result {
            Ok(outcome) => self.app_state.apply_load(outcome),
            Err(error) => {
                warn!(generation = load.generation, error = %error, "Reload failed");
                self.app_state.load_failed(error.to_string());
            }
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = self.palette;
        let mut page_height = self.page_height;

        self.terminal.draw(|frame| {
            page_height = layout::render_layout(frame, state, palette);
        })?;

        self.page_height = page_height;
        Ok(())
    }
}

/// Initialize and run the TUI application with input source and options
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, options: StartupOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(input_source, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
