//! Single-line help bar generated from key bindings.
//!
//! The bar lists every enabled binding as `key desc`, separated by bullets.
//! When a width is set and the bindings do not fit, the bar ends with an
//! ellipsis instead of wrapping.
//!
//! ```rust
//! use countdown::help::{KeyMap, Model};
//! use countdown::key::Binding;
//!
//! struct Keys {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//! }
//!
//! let keys = Keys { quit: Binding::from_keys_str(&["q"]).with_help("q", "quit") };
//! let bar = Model::new().view(&keys);
//! assert!(bar.contains("quit"));
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Anything that can list its bindings for the help bar.
pub trait KeyMap {
    /// Bindings in display order. Disabled ones are skipped when rendering.
    fn short_help(&self) -> Vec<&key::Binding>;
}

/// Styles for the help bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Trailing ellipsis when truncated.
    pub ellipsis: Style,
    /// Key part of an entry.
    pub key: Style,
    /// Description part of an entry.
    pub desc: Style,
    /// Separator between entries.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            key: key_style,
            desc: desc_style,
            separator: sep_style,
        }
    }
}

/// The help bar.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum visible width; `0` means unlimited.
    pub width: usize,
    /// Text between entries.
    pub separator: String,
    /// Text appended when entries are cut off.
    pub ellipsis: String,
    /// Colors.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an unlimited-width help bar with default styles.
    pub fn new() -> Self {
        Self {
            width: 0,
            separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the bindings of `keymap`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        self.short_help_view(keymap.short_help())
    }

    /// Renders `bindings` on one line.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.separator);

        let mut builder = String::new();
        let mut total_width = 0;

        for kb in bindings.into_iter().filter(|kb| kb.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let key_part = self.styles.key.clone().inline(true).render(&help.key);
            let desc_part = self.styles.desc.clone().inline(true).render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }

        builder
    }

    /// Returns `Some(tail)` when an item of `width` would overflow the bar;
    /// `tail` is the ellipsis if it still fits, otherwise empty.
    fn should_add_item(&self, total_width: usize, width: usize) -> Option<String> {
        if self.width == 0 || total_width + width <= self.width {
            return None;
        }

        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;

    struct Keys {
        start: Binding,
        stop: Binding,
        quit: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.stop, &self.quit]
        }
    }

    fn keys() -> Keys {
        Keys {
            start: Binding::from_keys_str(&["space"]).with_help("space", "start"),
            stop: Binding::from_keys_str(&["space"]).with_help("space", "stop"),
            quit: Binding::from_keys_str(&["q"]).with_help("q", "quit"),
        }
    }

    fn plain(s: &str) -> String {
        lipgloss::strip_ansi(s).to_string()
    }

    #[test]
    fn test_disabled_bindings_are_hidden() {
        let mut keys = keys();
        keys.stop.set_enabled(false);
        let bar = plain(&Model::new().view(&keys));
        assert_eq!(bar, "space start • q quit");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let bar = plain(&Model::new().with_width(16).view(&keys()));
        assert!(bar.starts_with("space start"));
        assert!(bar.ends_with('…'));
        assert!(!bar.contains("quit"));
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(vec![]), "");
    }
}
