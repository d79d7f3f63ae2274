//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail_modal;
mod helpers;
mod layout;
pub mod results;
mod search_form;
pub mod status;
mod styles;

pub use detail_modal::{close_button_rect, detail_lines};
pub use helpers::{centered_rect, empty_line, key_value_line, wrapped_height};
pub use layout::render_app;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::executor::{ExecutorError, RequestExecutor};
use crate::state::{handle_key, handle_mouse, AppState, KeyOutcome, ScreenRegions};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long to wait for terminal input before checking for finished requests.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Request runtime or HTTP client could not be built
    #[error("Request executor error: {0}")]
    Executor(#[from] ExecutorError),
}

/// Startup values for a session.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Resolved configuration.
    pub config: ResolvedConfig,
    /// Color mode.
    pub color: ColorConfig,
    /// Prefill for the query input.
    pub query: Option<String>,
    /// Prefill for the location input.
    pub location: Option<String>,
}

impl LaunchOptions {
    /// Initial state with the form prefilled.
    ///
    /// When both query and location are non-blank the first search is
    /// already queued.
    pub fn initial_state(&self) -> AppState {
        let mut state = AppState::new(
            self.config.default_limit,
            &self.config.default_language,
        );
        if let Some(query) = &self.query {
            state.form.query.set(query.as_str());
        }
        if let Some(location) = &self.location {
            state.form.location.set(location.as_str());
        }
        if !state.form.query.trimmed().is_empty() && !state.form.location.trimmed().is_empty() {
            state.submit_search();
        }
        state
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
    state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Absent in tests; effects then stay queued on the state.
    executor: Option<RequestExecutor>,
    /// Regions drawn by the last frame, used for mouse hit-testing.
    regions: ScreenRegions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(options: &LaunchOptions, executor: RequestExecutor) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_parts(
            terminal,
            options.initial_state(),
            Palette::with_color_config(options.color),
            Some(executor),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Wakes at least every [`POLL_INTERVAL`]
    /// to collect finished requests.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.dispatch_effects();
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) == KeyOutcome::Quit {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }

            self.collect_completions();
            self.dispatch_effects();
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_parts(
        terminal: Terminal<B>,
        state: AppState,
        palette: Palette,
        executor: Option<RequestExecutor>,
    ) -> Self {
        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
            palette,
            executor,
            regions: ScreenRegions::default(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        handle_key(&mut self.state, key, &self.key_bindings, &self.regions)
    }

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        handle_mouse(&mut self.state, mouse, &self.regions);
    }

    /// Apply every finished request to the state.
    fn collect_completions(&mut self) {
        let Some(executor) = &self.executor else {
            return;
        };
        for completion in executor.poll() {
            if !self.state.apply_completion(completion) {
                debug!("discarded stale completion");
            }
        }
    }

    /// Hand queued requests to the executor.
    fn dispatch_effects(&mut self) {
        let Some(executor) = &self.executor else {
            return;
        };
        let effects = self.state.take_effects();
        if !effects.is_empty() {
            debug!(count = effects.len(), "dispatching requests");
            executor.dispatch_all(effects);
        }
    }

    /// Render the current frame and remember its regions.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let palette = &self.palette;
        let mut regions = ScreenRegions::default();
        self.terminal.draw(|frame| {
            regions = render_app(frame, state, palette);
        })?;
        self.regions = regions;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(options: LaunchOptions) -> Result<(), TuiError> {
    let executor = RequestExecutor::new(
        &options.config.api_base_url,
        options.config.request_timeout(),
    )?;
    info!(
        base_url = %executor.client().base_url(),
        "starting interactive session"
    );

    let mut app = TuiApp::new(&options, executor)?;
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
