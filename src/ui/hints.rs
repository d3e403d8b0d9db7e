//! Key labels for hint lines and the help overlay.

use crate::config::KeyBindings;
use crate::state::View;

/// Display labels for the configured key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHints {
    pub quit: String,
    pub help: String,
    pub refresh: String,
    pub next_tab: String,
    pub prev_tab: String,
    pub up: String,
    pub down: String,
    pub send: String,
}

impl KeyHints {
    pub fn new(bindings: &KeyBindings) -> Self {
        Self {
            quit: bindings.quit.clone(),
            help: bindings.help.clone(),
            refresh: bindings.refresh.clone(),
            next_tab: bindings.next_tab.clone(),
            prev_tab: bindings.prev_tab.clone(),
            up: bindings.up.clone(),
            down: bindings.down.clone(),
            send: bindings.send.clone(),
        }
    }

    /// One-line hint for the bottom of the screen.
    pub fn hint_line(&self, view: View) -> String {
        let tail = format!("←/→ tabs  {} help  {} quit", self.help, self.quit);
        match view {
            View::Signals => format!(
                " {}/{} select  {} send alert  {} refresh  {tail}",
                self.down, self.up, self.send, self.refresh
            ),
            View::News => format!(
                " {}/{} select  {} send news alert  {tail}",
                self.down, self.up, self.send
            ),
            View::History => format!(
                " {}/{} scroll  {} reload  {tail}",
                self.down, self.up, self.refresh
            ),
            _ => format!(" {} refresh  1-9 jump  {tail}", self.refresh),
        }
    }
}

impl Default for KeyHints {
    fn default() -> Self {
        Self::new(&KeyBindings::default())
    }
}
