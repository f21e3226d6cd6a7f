//! Countdown controller for bubbletea-rs applications.
//!
//! The controller owns everything that changes while the countdown runs: the
//! configured duration, the remaining seconds, the run state and the tick
//! loop that drives it forward once per second.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown::timer::{Controller, RunState};
//!
//! let mut timer = Controller::new();
//! assert_eq!(timer.remaining_secs(), 330);
//!
//! // Starting hands back the command for the first tick.
//! let first_tick = timer.start();
//! assert!(first_tick.is_some());
//! assert_eq!(timer.run_state(), RunState::Running);
//!
//! timer.stop();
//! assert_eq!(timer.run_state(), RunState::Idle);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use countdown::timer::Controller;
//!
//! struct MyApp {
//!     timer: Controller,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = Controller::new();
//!         let cmd = timer.start();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Ticks are routed back to the controller, which re-arms the
//!         // loop while the countdown is running.
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{} seconds left", self.timer.remaining_secs())
//!     }
//! }
//! ```
//!
//! # Tick Loop
//!
//! The loop is a chain of one-shot `tick` commands. Each running stretch gets a
//! [`TickLoop`] guard holding the tag the next tick must carry. Stopping,
//! resetting, quick-setting and completing all drop the guard, and any tick
//! still in flight is discarded when it arrives because its tag no longer
//! matches. Only one loop can be live at a time.

use crate::duration::{ConfiguredDuration, InputError};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for controller instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Time between two decrements.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Which phase the countdown is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started, paused, or reset.
    Idle,
    /// The tick loop is live.
    Running,
    /// The countdown reached zero while running.
    Completed,
}

/// Message delivered once per elapsed second while the countdown runs.
///
/// Ticks carry the id of the controller that armed them and the tag of the
/// loop they belong to. A controller ignores ticks with a foreign id or a tag
/// that does not match its live loop.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The controller this tick belongs to.
    pub id: i64,
    tag: u64,
}

/// Guard for the one live tick loop.
///
/// Holding a `TickLoop` is what makes a controller `Running`. The guard is
/// consumed on every exit from `Running`, which bumps the controller's tag past
/// every tick it ever armed.
#[derive(Debug)]
struct TickLoop {
    tag: u64,
}

/// The countdown state machine.
#[derive(Debug)]
pub struct Controller {
    duration: ConfiguredDuration,
    remaining: u32,
    completed: bool,
    ticker: Option<TickLoop>,
    /// Next tag to hand out; always greater than any tag already used.
    next_tag: u64,
    id: i64,
}

impl Controller {
    /// Creates an idle controller with the default 5:30 duration.
    pub fn new() -> Self {
        Self::with_duration(ConfiguredDuration::default())
    }

    /// Creates an idle controller counting down from `duration`.
    pub fn with_duration(duration: ConfiguredDuration) -> Self {
        Self {
            duration,
            remaining: duration.total_seconds(),
            completed: false,
            ticker: None,
            next_tag: 1,
            id: next_id(),
        }
    }

    /// Unique identifier used to route ticks.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configured duration.
    pub fn duration(&self) -> ConfiguredDuration {
        self.duration
    }

    /// Seconds left on the countdown.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    /// Current phase.
    pub fn run_state(&self) -> RunState {
        if self.ticker.is_some() {
            RunState::Running
        } else if self.completed {
            RunState::Completed
        } else {
            RunState::Idle
        }
    }

    /// Whether the tick loop is live.
    pub fn running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether the countdown reached zero and has not been reset since.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Edits the configured minutes from text.
    ///
    /// Accepted edits made while not running reload the remaining time and
    /// clear completion. Rejected edits change nothing.
    pub fn set_minutes(&mut self, text: &str) -> Result<(), InputError> {
        self.duration.set_minutes(text).inspect_err(|err| {
            tracing::debug!(id = self.id, %err, "minutes input rejected");
        })?;
        self.reload_if_idle();
        Ok(())
    }

    /// Edits the configured seconds from text. See [`Controller::set_minutes`].
    pub fn set_seconds(&mut self, text: &str) -> Result<(), InputError> {
        self.duration.set_seconds(text).inspect_err(|err| {
            tracing::debug!(id = self.id, %err, "seconds input rejected");
        })?;
        self.reload_if_idle();
        Ok(())
    }

    fn reload_if_idle(&mut self) {
        if !self.running() {
            self.remaining = self.duration.total_seconds();
            self.completed = false;
        }
    }

    /// Starts or resumes the countdown.
    ///
    /// Returns the command for the first tick, or `None` when nothing changed:
    /// the countdown is already running or there is no time left.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running() || self.remaining == 0 {
            return None;
        }

        let tag = self.take_tag();
        self.ticker = Some(TickLoop { tag });
        self.completed = false;
        tracing::info!(id = self.id, remaining = self.remaining, "timer started");
        Some(self.tick(tag))
    }

    /// Pauses the countdown, keeping the remaining time.
    pub fn stop(&mut self) {
        if self.release() {
            tracing::info!(id = self.id, remaining = self.remaining, "timer paused");
        }
    }

    /// Starts when idle or completed, stops when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running() {
            self.stop();
            None
        } else {
            self.start()
        }
    }

    /// Returns to idle with the full configured duration.
    pub fn reset(&mut self) {
        self.release();
        self.completed = false;
        self.remaining = self.duration.total_seconds();
        tracing::info!(id = self.id, remaining = self.remaining, "timer reset");
    }

    /// Replaces the configured duration with a preset and returns to idle.
    ///
    /// A running countdown is stopped first. Values above 59 are rejected and
    /// leave everything untouched.
    pub fn quick_set(&mut self, minutes: u8, seconds: u8) -> Result<(), InputError> {
        let duration = ConfiguredDuration::new(minutes, seconds)?;
        self.release();
        self.duration = duration;
        self.remaining = duration.total_seconds();
        self.completed = false;
        tracing::info!(id = self.id, %duration, "quick set");
        Ok(())
    }

    /// Processes runtime messages addressed to this controller.
    ///
    /// A matching tick decrements the remaining time and re-arms the loop. The
    /// tick that would take the countdown below one second completes it
    /// instead, and no further tick is armed.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id != self.id {
            return None;
        }

        let live = self.ticker.as_ref()?;
        // A tag mismatch means the tick outlived its loop, or a second
        // delivery is racing the current one.
        if tick_msg.tag != live.tag {
            tracing::debug!(id = self.id, tag = tick_msg.tag, "stale tick dropped");
            return None;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.completed = true;
            self.release();
            tracing::info!(id = self.id, "timer completed");
            return None;
        }

        self.remaining -= 1;
        tracing::debug!(id = self.id, remaining = self.remaining, "tick");

        let tag = self.take_tag();
        self.ticker = Some(TickLoop { tag });
        Some(self.tick(tag))
    }

    fn take_tag(&mut self) -> u64 {
        let tag = self.next_tag;
        self.next_tag += 1;
        tag
    }

    /// Drops the live loop, if any. Returns whether one was live.
    fn release(&mut self) -> bool {
        match self.ticker.take() {
            Some(TickLoop { tag }) => {
                // Anything armed with `tag` or earlier can no longer match.
                self.next_tag = self.next_tag.max(tag + 1);
                true
            }
            None => false,
        }
    }

    fn tick(&self, tag: u64) -> Cmd {
        let id = self.id;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// The tick the live loop is waiting for.
    #[cfg(test)]
    pub(crate) fn pending_tick(&self) -> Option<TickMsg> {
        self.ticker.as_ref().map(|live| TickMsg {
            id: self.id,
            tag: live.tag,
        })
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
