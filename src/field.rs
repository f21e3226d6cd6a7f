//! Two-digit numeric input field.
//!
//! The field never owns its value. It mirrors whatever the model last
//! accepted, turns a keystroke into the text the field *would* show, and hands
//! that candidate back to the caller. The caller validates it and pushes the
//! accepted value back with [`Model::set_value`]; a rejected candidate simply
//! never shows up.
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use countdown::field::Model;
//! use countdown::Component;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut minutes = Model::new("min");
//! minutes.set_value(5);
//! minutes.focus();
//!
//! let seven = KeyMsg { key: KeyCode::Char('7'), modifiers: KeyModifiers::NONE };
//! assert_eq!(minutes.update(&seven).as_deref(), Some("57"));
//! ```

use crate::style::Styles;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Most digits a field holds.
pub const CHAR_LIMIT: usize = 2;

/// A focusable numeric field.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown after the value.
    pub label: String,
    text: String,
    focus: bool,
}

impl Model {
    /// Creates a blurred field showing `0`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: "0".to_string(),
            focus: false,
        }
    }

    /// Shows `value`, the last value the model accepted.
    pub fn set_value(&mut self, value: u8) {
        self.text = value.to_string();
    }

    /// The text currently shown.
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Turns a keystroke into candidate text.
    ///
    /// Digits append while under [`CHAR_LIMIT`], backspace drops the last
    /// character. Anything else, and any key while blurred, returns `None`.
    pub fn update(&self, msg: &KeyMsg) -> Option<String> {
        if !self.focus || msg.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match msg.key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.text.chars().count() >= CHAR_LIMIT {
                    return None;
                }
                let mut candidate = self.text.clone();
                candidate.push(c);
                Some(candidate)
            }
            KeyCode::Backspace => {
                let mut candidate = self.text.clone();
                candidate.pop()?;
                Some(candidate)
            }
            _ => None,
        }
    }

    /// Renders the value and label.
    pub fn view(&self, styles: &Styles) -> String {
        let value_style = if self.focus {
            &styles.field_focused
        } else {
            &styles.field_blurred
        };
        format!(
            "{} {}",
            value_style
                .clone()
                .inline(true)
                .render(&format!("{:>2}", self.text)),
            styles.label.clone().inline(true).render(&self.label)
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
