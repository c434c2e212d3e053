//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: every event
//! goes through [`App::update`], and [`App::view`] derives the screen from
//! the resulting state.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::api::types::Table;
use crate::config::Settings;
use crate::error::LOAD_ERROR_MESSAGE;
use crate::events::{get_context_hints, Event, KeyContext};
use crate::tasks::ApiMessage;
use crate::ui::{
    render_context_help, render_help_line, LoadingIndicator, ScheduleAction, ScheduleView, Theme,
};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Waiting for the schedule table.
    #[default]
    Loading,
    /// The table is loaded and displayed.
    Ready,
    /// The table could not be loaded; only the error is shown.
    Failed,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The schedule table view.
    schedule_view: ScheduleView,
    /// Spinner shown while loading.
    loading: LoadingIndicator,
    /// User-facing error text when the load failed.
    error_message: Option<String>,
    /// Sequence number of the most recent load request.
    load_id: u64,
    /// Whether a load was requested but not yet spawned.
    pending_load: bool,
    /// Cancels the in-flight load.
    load_token: Option<CancellationToken>,
    /// Colors.
    theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// The initial load is requested immediately; the main loop spawns it.
    pub fn new(settings: &Settings) -> Self {
        debug!("Creating new application instance");

        let mut loading = LoadingIndicator::with_message("Loading schedule...");
        loading.start();

        Self {
            state: AppState::Loading,
            should_quit: false,
            schedule_view: ScheduleView::new(settings.narrow_width),
            loading,
            error_message: None,
            load_id: 1,
            pending_load: true,
            load_token: None,
            theme: Theme::default(),
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get a reference to the schedule view.
    pub fn schedule_view(&self) -> &ScheduleView {
        &self.schedule_view
    }

    /// Get a mutable reference to the schedule view.
    pub fn schedule_view_mut(&mut self) -> &mut ScheduleView {
        &mut self.schedule_view
    }

    /// Get the error message shown when the load failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Check if the loading indicator is active.
    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    /// Take a pending load request.
    ///
    /// Returns the id the spawned load must report back with.
    pub fn take_load_request(&mut self) -> Option<u64> {
        if self.pending_load {
            self.pending_load = false;
            Some(self.load_id)
        } else {
            None
        }
    }

    /// Remember the cancellation token of the spawned load.
    pub fn track_load(&mut self, token: CancellationToken) {
        if let Some(previous) = self.load_token.replace(token) {
            previous.cancel();
        }
    }

    /// Request a fresh load, superseding any in-flight one.
    pub fn request_reload(&mut self) {
        info!("Reloading schedule");
        if let Some(token) = self.load_token.take() {
            token.cancel();
        }
        self.load_id += 1;
        self.pending_load = true;
        self.error_message = None;
        self.state = AppState::Loading;
        self.loading.start();
    }

    /// Apply a loaded table.
    pub fn set_table(&mut self, table: Table) {
        self.schedule_view.set_table(table);
        self.error_message = None;
        self.loading.stop();
        self.state = AppState::Ready;
    }

    /// Handle a message from a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::TableLoaded { load_id, result } => {
                if load_id != self.load_id {
                    debug!(load_id, current = self.load_id, "Ignoring stale schedule load");
                    return;
                }
                self.load_token = None;

                match result {
                    Ok(table) => {
                        info!(rows = table.row_count(), "Schedule loaded");
                        self.set_table(table);
                    }
                    Err(e) => {
                        warn!(error = %e, "Schedule load failed");
                        self.loading.stop();
                        self.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
                        self.state = AppState::Failed;
                    }
                }
            }
        }
    }

    /// Cancel outstanding work before exiting.
    pub fn shutdown(&mut self) {
        if let Some(token) = self.load_token.take() {
            debug!("Cancelling in-flight schedule load");
            token.cancel();
        }
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                if self.state == AppState::Ready {
                    self.schedule_view.handle_mouse(mouse_event);
                }
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                self.schedule_view.set_viewport_width(width);
            }
            Event::Tick => {
                self.loading.tick();
            }
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        // Let the search bar see 'q' and 'r' as text
        let searching = self.state == AppState::Ready && self.schedule_view.search().is_active();
        if !searching
            && key_event.code == KeyCode::Char('q')
            && key_event.modifiers == KeyModifiers::NONE
        {
            self.quit();
            return;
        }

        match self.state {
            AppState::Ready => {
                if let Some(ScheduleAction::Reload) = self.schedule_view.handle_input(key_event) {
                    self.request_reload();
                }
            }
            AppState::Failed => {
                if key_event.code == KeyCode::Char('r') && key_event.modifiers == KeyModifiers::NONE
                {
                    self.request_reload();
                }
            }
            AppState::Loading | AppState::Exiting => {}
        }
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match self.state {
            AppState::Failed => self.render_error(frame, area),
            AppState::Loading => {
                let [content, footer] =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
                let [_, spinner, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(content);
                self.loading.render(frame, spinner);
                render_context_help(frame, footer, KeyContext::Loading);
            }
            AppState::Ready => {
                let [content, footer] =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
                self.schedule_view.render(frame, content);
                render_help_line(
                    frame,
                    footer,
                    get_context_hints(self.schedule_view.key_context()),
                    Some(self.schedule_view.status_text()),
                );
            }
            AppState::Exiting => {}
        }
    }

    /// Render only the load error text.
    fn render_error(&self, frame: &mut Frame, area: Rect) {
        let message = self.error_message.as_deref().unwrap_or(LOAD_ERROR_MESSAGE);
        let paragraph = Paragraph::new(message)
            .style(self.theme.error)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
