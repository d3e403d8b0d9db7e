//! Key binding strings such as `"q"`, `"Ctrl+r"` or `"Enter"`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A parsed key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Parse a binding; `None` if the key name is not recognised.
    pub fn parse(binding: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut code = None;

        for part in binding.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => code = Some(parse_code(part)?),
            }
        }

        Some(Self {
            code: code?,
            modifiers,
        })
    }

    /// Whether a key event triggers this binding.
    ///
    /// Character keys ignore Shift so that `?` matches however the
    /// terminal reports it, and compare case-insensitively.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                want.eq_ignore_ascii_case(&got)
                    && (event.modifiers & relevant) == (self.modifiers & relevant)
            }
            (want, got) => want == got && event.modifiers == self.modifiers,
        }
    }
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let code = match name.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        s if s.len() > 1 && s.starts_with('f') => KeyCode::F(s[1..].parse().ok()?),
        _ => {
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code)
}
