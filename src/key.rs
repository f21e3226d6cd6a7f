//! Key bindings matched against bubbletea-rs key messages.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Bindings can be disabled, which makes them stop
//! matching and drops them from the help bar.
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use countdown::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::from_keys_str(&["q", "ctrl+c"]).with_help("q", "quit");
//! let msg = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
//! assert!(quit.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// One physical key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Control and alt modifiers that must be held. Shift is not compared,
    /// since terminals fold it into the character.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key description such as `"q"`, `"space"`, `"ctrl+c"` or
    /// `"shift+tab"`. Returns `None` for names this module does not know.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "tab" => KeyCode::Tab,
            "shift+tab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "esc" => KeyCode::Esc,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            _ => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Whether `msg` is this key press.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == msg.key && (msg.modifiers & significant) == self.modifiers
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is written in the help bar.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for `keys` with no help text.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Creates a binding from key descriptions. Unknown names are skipped.
    pub fn from_keys_str(keys: &[&str]) -> Self {
        Self::new(keys.iter().filter_map(|k| KeyPress::parse(k)).collect())
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for the help bar.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently responds to keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(KeyPress::parse("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(KeyPress::parse("shift+tab").unwrap().code, KeyCode::BackTab);
        let ctrl_c = KeyPress::parse("ctrl+c").unwrap();
        assert_eq!(ctrl_c.code, KeyCode::Char('c'));
        assert_eq!(ctrl_c.modifiers, KeyModifiers::CONTROL);
        assert!(KeyPress::parse("hyper").is_none());
    }

    #[test]
    fn test_modifiers_must_match() {
        let plain_c = Binding::from_keys_str(&["c"]);
        let ctrl_c = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(plain_c.matches(&key(KeyCode::Char('c'))));
        assert!(!plain_c.matches(&ctrl_c));
    }

    #[test]
    fn test_shift_is_not_compared() {
        let upper = Binding::from_keys_str(&["R"]);
        let msg = KeyMsg {
            key: KeyCode::Char('R'),
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(upper.matches(&msg));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut start = Binding::from_keys_str(&["space", "enter"]).with_help("space", "start");
        assert!(start.matches(&key(KeyCode::Enter)));
        start.set_enabled(false);
        assert!(!start.enabled());
        assert!(!start.matches(&key(KeyCode::Enter)));
        assert_eq!(start.help().desc, "start");
    }

    #[test]
    fn test_binding_without_keys_is_disabled() {
        let empty = Binding::from_keys_str(&["nonsense"]);
        assert!(empty.keys().is_empty());
        assert!(!empty.enabled());
    }
}
