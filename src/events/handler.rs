//! Event handler for processing input events.

use super::KeyBinding;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tracing::warn;

/// Parsed form of [`KeyBindings`].
#[derive(Debug, Clone)]
struct Bindings {
    quit: Option<KeyBinding>,
    help: Option<KeyBinding>,
    refresh: Option<KeyBinding>,
    next_tab: Option<KeyBinding>,
    prev_tab: Option<KeyBinding>,
    up: Option<KeyBinding>,
    down: Option<KeyBinding>,
    send: Option<KeyBinding>,
}

impl Bindings {
    fn parse(config: &KeyBindings) -> Self {
        let parse = |name: &str, value: &str| {
            let binding = KeyBinding::parse(value);
            if binding.is_none() {
                warn!(name, value, "ignoring unrecognised key binding");
            }
            binding
        };

        Self {
            quit: parse("quit", &config.quit),
            help: parse("help", &config.help),
            refresh: parse("refresh", &config.refresh),
            next_tab: parse("next_tab", &config.next_tab),
            prev_tab: parse("prev_tab", &config.prev_tab),
            up: parse("up", &config.up),
            down: parse("down", &config.down),
            send: parse("send", &config.send),
        }
    }
}

fn hit(binding: &Option<KeyBinding>, key: &KeyEvent) -> bool {
    binding.as_ref().is_some_and(|b| b.matches(key))
}

/// Handles input events and produces actions.
pub struct EventHandler {
    bindings: Bindings,
    poll_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: &KeyBindings, tick_rate_ms: u64) -> Self {
        Self {
            bindings: Bindings::parse(keybindings),
            poll_interval: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next action from user input, or [`Action::Tick`] if none arrived.
    pub async fn next(&mut self, current_view: View) -> Result<Option<Action>> {
        if event::poll(self.poll_interval)? {
            let action = match event::read()? {
                CrosstermEvent::Key(key) => self.handle_key(key, current_view),
                CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                // Terminal will automatically redraw
                _ => None,
            };
            return Ok(action);
        }
        Ok(Some(Action::Tick))
    }

    /// Handle a key event and return an optional action.
    pub fn handle_key(&self, key: KeyEvent, current_view: View) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let b = &self.bindings;

        // Global shortcuts
        if hit(&b.quit, &key) {
            return Some(Action::Quit);
        }
        if hit(&b.help, &key) {
            return Some(Action::ToggleHelp);
        }
        if hit(&b.refresh, &key) {
            return Some(Action::RefreshAll);
        }

        // Tab switching
        if let KeyCode::Char(c) = key.code
            && let Some(view) = c.to_digit(10).and_then(View::from_number)
        {
            return Some(Action::SetView(view));
        }
        if key.code == KeyCode::Tab || key.code == KeyCode::Right || hit(&b.next_tab, &key) {
            return Some(Action::NextView);
        }
        if key.code == KeyCode::BackTab || key.code == KeyCode::Left || hit(&b.prev_tab, &key) {
            return Some(Action::PrevView);
        }

        // Navigation
        if key.code == KeyCode::Up || hit(&b.up, &key) {
            return Some(Action::ScrollUp);
        }
        if key.code == KeyCode::Down || hit(&b.down, &key) {
            return Some(Action::ScrollDown);
        }
        if key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if key.code == KeyCode::End {
            return Some(Action::GoToBottom);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::ClearError);
        }

        // Alerts can only be sent from panels with sendable items
        if (key.code == KeyCode::Enter || hit(&b.send, &key))
            && matches!(current_view, View::Signals | View::News)
        {
            return Some(Action::SendSelectedAlert);
        }

        None
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn handler() -> EventHandler {
        EventHandler::new(&KeyBindings::default(), 100)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_selects_tab() {
        let action = handler().handle_key(press(KeyCode::Char('9')), View::Signals);
        assert!(matches!(action, Some(Action::SetView(View::History))));
        assert!(
            handler()
                .handle_key(press(KeyCode::Char('0')), View::Signals)
                .is_none()
        );
    }

    #[test]
    fn test_send_only_on_sendable_views() {
        let h = handler();
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('s')), View::News),
            Some(Action::SendSelectedAlert)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Enter), View::Signals),
            Some(Action::SendSelectedAlert)
        ));
        assert!(h.handle_key(press(KeyCode::Char('s')), View::Predictions).is_none());
    }

    #[test]
    fn test_global_shortcuts() {
        let h = handler();
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('q')), View::History),
            Some(Action::Quit)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('r')), View::History),
            Some(Action::RefreshAll)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Tab), View::History),
            Some(Action::NextView)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('j')), View::Signals),
            Some(Action::ScrollDown)
        ));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(handler().handle_key(key, View::Signals).is_none());
    }
}
