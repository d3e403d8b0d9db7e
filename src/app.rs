//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::alerts::{AlertDispatcher, AlertHistory, TelegramMessenger};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::events::EventHandler;
use crate::market::YahooClient;
use crate::state::{Action, Store, View};
use crate::ui::{KeyHints, Ui};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Quote source and alert dispatcher.
    dashboard: Dashboard,
    /// Key labels for hints and help.
    keys: KeyHints,
    /// Whether the key hint line is drawn.
    show_hints: bool,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Build collaborators before touching the terminal so a bad
        // config fails on a normal screen.
        let source = YahooClient::new(config.market.clone())?;
        if !config.telegram.is_configured() {
            warn!("Telegram credentials missing; alerts will fail until configured");
        }
        let history = AlertHistory::new(config.history.resolved_path());
        info!(path = %history.path().display(), "alert history location");
        let dispatcher =
            AlertDispatcher::new(Box::new(TelegramMessenger::new(config.telegram.clone())), history);

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            store: Store::new(action_tx),
            event_handler: EventHandler::new(&config.keybindings, config.ui.tick_rate_ms),
            action_rx,
            dashboard: Dashboard::new(Box::new(source), dispatcher),
            keys: KeyHints::new(&config.keybindings),
            show_hints: config.ui.show_help_bar,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Populate every panel once on launch
        self.store.dispatch(Action::RefreshAll)?;

        // Main event loop
        loop {
            self.draw()?;

            let view = self.store.app.current_view;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next(view) => {
                    if let Some(action) = result? {
                        self.handle_action(action).await?;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let show_hints = self.show_hints;
        self.terminal.draw(|frame| {
            Ui::render(frame, &self.store, &self.keys, show_hints);
        })?;
        Ok(())
    }

    /// Handle an action.
    async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::RefreshAll => {
                // Draw the loading state before the network round trips
                self.store.reduce(Action::SetLoading(true));
                self.draw()?;
                self.dashboard.refresh(&mut self.store).await;
            }
            Action::LoadHistory => {
                self.dashboard.load_history(&mut self.store);
            }
            Action::SetView(View::History) => {
                self.store.reduce(Action::SetView(View::History));
                self.dashboard.load_history(&mut self.store);
            }
            Action::SendSelectedAlert => {
                self.dashboard.send_selected_alert(&mut self.store).await;
            }
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
