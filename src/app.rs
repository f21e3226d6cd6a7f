//! The countdown screen.
//!
//! [`App`] is the bubbletea-rs model that ties the pieces together. Key
//! presses become controller intents, controller state becomes the view. The
//! view is a pure function of that state; all mutation happens in `update`.
//!
//! While the countdown runs, the duration fields and quick-set presets are
//! hidden and their keys do nothing. The start and stop controls are never
//! shown together.

use crate::display;
use crate::duration::ConfiguredDuration;
use crate::field;
use crate::help::{self, KeyMap};
use crate::key::Binding;
use crate::status;
use crate::style::Styles;
use crate::timer::Controller;
use crate::Component;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use std::sync::OnceLock;

/// Quick-set presets as `(minutes, seconds)`, with the key that picks each.
pub const PRESETS: [(&str, u8, u8); 4] = [("o", 1, 0), ("f", 5, 0), ("t", 10, 0), ("p", 25, 0)];

// `Model::init` takes no arguments, so the binary hands the command-line
// duration over here before the program starts.
static LAUNCH_DURATION: OnceLock<ConfiguredDuration> = OnceLock::new();

/// Sets the duration the next [`App::init`] starts from. Only the first call
/// has an effect; returns whether this call was it.
pub fn set_launch_duration(duration: ConfiguredDuration) -> bool {
    LAUNCH_DURATION.set(duration).is_ok()
}

/// Key bindings of the countdown screen.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Start or resume.
    pub start: Binding,
    /// Pause.
    pub stop: Binding,
    /// Back to the configured duration.
    pub reset: Binding,
    /// Focus the next field.
    pub next_field: Binding,
    /// Focus the previous field.
    pub prev_field: Binding,
    /// Quick-set presets, in [`PRESETS`] order.
    pub presets: Vec<Binding>,
    /// Exit.
    pub quit: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            start: Binding::from_keys_str(&["space", "enter"]).with_help("space", "start"),
            stop: Binding::from_keys_str(&["space", "enter"]).with_help("space", "stop"),
            reset: Binding::from_keys_str(&["r"]).with_help("r", "reset"),
            next_field: Binding::from_keys_str(&["tab"]).with_help("tab", "next field"),
            prev_field: Binding::from_keys_str(&["shift+tab"]),
            presets: PRESETS
                .iter()
                .map(|(key, minutes, _)| {
                    Binding::from_keys_str(&[*key]).with_help(*key, format!("{} min", minutes))
                })
                .collect(),
            quit: Binding::from_keys_str(&["q", "esc", "ctrl+c"]).with_help("q", "quit"),
        }
    }
}

impl KeyBindings {
    /// Enables exactly the bindings that make sense for `running`.
    fn sync(&mut self, running: bool) {
        self.start.set_enabled(!running);
        self.stop.set_enabled(running);
        self.next_field.set_enabled(!running);
        self.prev_field.set_enabled(!running);
        for preset in &mut self.presets {
            preset.set_enabled(!running);
        }
    }
}

impl KeyMap for KeyBindings {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.start,
            &self.stop,
            &self.reset,
            &self.next_field,
            &self.quit,
        ]
    }
}

/// The countdown screen model.
#[derive(Debug)]
pub struct App {
    timer: Controller,
    minutes: field::Model,
    seconds: field::Model,
    keys: KeyBindings,
    help: help::Model,
    styles: Styles,
}

impl App {
    /// Creates an idle screen counting down from `duration`, with the minutes
    /// field focused.
    pub fn new(duration: ConfiguredDuration) -> Self {
        let mut app = Self {
            timer: Controller::with_duration(duration),
            minutes: field::Model::new("min"),
            seconds: field::Model::new("sec"),
            keys: KeyBindings::default(),
            help: help::Model::new(),
            styles: Styles::default(),
        };
        app.minutes.focus();
        app.sync();
        app
    }

    /// The controller driving this screen.
    pub fn timer(&self) -> &Controller {
        &self.timer
    }

    /// Pushes controller state into the fields and key bindings.
    fn sync(&mut self) {
        let duration = self.timer.duration();
        self.minutes.set_value(duration.minutes());
        self.seconds.set_value(duration.seconds());
        self.keys.sync(self.timer.running());
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keys.quit.matches(key_msg) {
            tracing::info!(remaining = self.timer.remaining_secs(), "quit requested");
            return Some(quit());
        }

        let cmd = if self.keys.start.matches(key_msg) {
            self.timer.start()
        } else if self.keys.stop.matches(key_msg) {
            self.timer.stop();
            None
        } else if self.keys.reset.matches(key_msg) {
            self.timer.reset();
            None
        } else if self.keys.next_field.matches(key_msg) || self.keys.prev_field.matches(key_msg)
        {
            self.switch_field();
            None
        } else if let Some(i) = self.keys.presets.iter().position(|b| b.matches(key_msg)) {
            let (_, minutes, seconds) = PRESETS[i];
            // Presets are always in range.
            let _ = self.timer.quick_set(minutes, seconds);
            None
        } else {
            self.edit_field(key_msg);
            None
        };

        self.sync();
        cmd
    }

    fn switch_field(&mut self) {
        if self.minutes.focused() {
            self.minutes.blur();
            self.seconds.focus();
        } else {
            self.seconds.blur();
            self.minutes.focus();
        }
    }

    fn edit_field(&mut self, key_msg: &KeyMsg) {
        if self.timer.running() {
            return;
        }
        // Rejected candidates are dropped; `sync` restores the field text.
        if let Some(text) = self.minutes.update(key_msg) {
            let _ = self.timer.set_minutes(&text);
        } else if let Some(text) = self.seconds.update(key_msg) {
            let _ = self.timer.set_seconds(&text);
        }
    }

    fn readout_view(&self) -> String {
        let readout = display::format(self.timer.remaining_secs(), self.timer.completed());
        format!(
            "🕐 {}",
            self.styles
                .readout(readout.tier)
                .clone()
                .inline(true)
                .render(&readout.text)
        )
    }

    fn status_view(&self) -> String {
        let status = status::resolve(
            self.timer.running(),
            self.timer.completed(),
            self.timer.remaining_secs(),
        );
        self.styles
            .banner(status.tier)
            .clone()
            .inline(true)
            .render(&format!("{} {}", status.emoji, status.message))
    }

    fn controls_view(&self) -> String {
        let toggle = if self.timer.running() {
            "⏸ Stop"
        } else {
            "▶ Start"
        };
        let button = |label: &str| self.styles.button.clone().inline(true).render(label);
        format!("{}  {}", button(toggle), button("↺ Reset"))
    }

    fn presets_view(&self) -> String {
        let presets: Vec<String> = self
            .keys
            .presets
            .iter()
            .map(|b| {
                let help = b.help();
                format!("[{}] {}", help.key, help.desc)
            })
            .collect();
        format!(
            "⚡ Quick set  {}",
            self.styles
                .preset
                .clone()
                .inline(true)
                .render(&presets.join("  "))
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConfiguredDuration::default())
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let duration = LAUNCH_DURATION.get().copied().unwrap_or_default();
        (Self::new(duration), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.help.width = size.width as usize;
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        let cmd = self.timer.update(msg);
        self.sync();
        cmd
    }

    fn view(&self) -> String {
        let mut lines = vec![
            self.styles.title.clone().render("⏱  Countdown"),
            self.readout_view(),
            self.status_view(),
            String::new(),
        ];

        if !self.timer.running() {
            lines.push(format!(
                "{}  :  {}",
                self.minutes.view(&self.styles),
                self.seconds.view(&self.styles)
            ));
            lines.push(self.presets_view());
            lines.push(String::new());
        }

        lines.push(self.controls_view());
        lines.push(String::new());
        lines.push(self.help.view(&self.keys));
        lines.join("\n")
    }
}
