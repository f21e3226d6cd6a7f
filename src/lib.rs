#![warn(missing_docs)]

//! # countdown
//!
//! A single-screen countdown timer for the terminal, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Overview
//!
//! The user sets a duration, starts, stops and resets the countdown, and
//! watches the readout and status banner change as time runs out. Each piece
//! follows the Elm Architecture: state changes happen in `update`, rendering
//! in a pure `view`.
//!
//! ## Components
//!
//! - [`duration`]: the configured `minutes:seconds` pair and input validation
//! - [`timer`]: the countdown state machine and its one-second tick loop
//! - [`display`]: remaining seconds to `MM:SS` text and a color tier
//! - [`status`]: run state to a status banner
//! - [`app`]: the screen model that routes keys and renders everything
//! - [`field`], [`help`], [`key`], [`style`]: the widgets and styling the
//!   screen is made of
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_rs::Model as BubbleTeaModel;
//! use countdown::app::App;
//!
//! let app = App::default();
//! assert_eq!(app.timer().remaining_secs(), 330);
//! assert!(app.view().contains("05:30"));
//! ```

pub mod app;
pub mod config;
pub mod display;
pub mod duration;
pub mod field;
pub mod help;
pub mod key;
pub mod status;
pub mod style;
pub mod timer;

use bubbletea_rs::Cmd;

/// Focus management for input components.
///
/// Components that can receive keyboard input implement this trait so the
/// screen can move focus between them.
///
/// ```rust
/// use countdown::field;
/// use countdown::Component;
///
/// let mut seconds = field::Model::new("sec");
/// assert!(!seconds.focused());
///
/// seconds.focus();
/// assert!(seconds.focused());
///
/// seconds.blur();
/// assert!(!seconds.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command, for
    /// example to start a cursor blink.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Whether the component currently receives keyboard input.
    fn focused(&self) -> bool;
}

pub use app::App;
pub use display::{Readout, Tier};
pub use duration::{ConfiguredDuration, InputError};
pub use status::{BannerTier, Status};
pub use timer::{Controller, RunState, TickMsg};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::App;
    pub use crate::display::{format as format_readout, Readout, Tier};
    pub use crate::duration::{ConfiguredDuration, InputError};
    pub use crate::field::Model as NumberField;
    pub use crate::help::{KeyMap, Model as HelpModel};
    pub use crate::key::{Binding, KeyPress};
    pub use crate::status::{resolve as resolve_status, BannerTier, Status};
    pub use crate::timer::{Controller, RunState, TickMsg};
    pub use crate::Component;
}
