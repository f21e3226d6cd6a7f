//! Configured duration and input validation.
//!
//! The configured duration is the `minutes:seconds` pair the countdown starts
//! from. Both fields live in `0..=59` and are edited from text, one keystroke
//! at a time. Input that does not parse, or parses to a value outside the
//! range, is rejected outright: the previous value stays in place. Values are
//! never clamped.
//!
//! ```rust
//! use countdown::duration::{ConfiguredDuration, InputError};
//!
//! let mut duration = ConfiguredDuration::default();
//! assert_eq!(duration.total_seconds(), 330);
//!
//! duration.set_minutes("12").unwrap();
//! assert_eq!(duration.minutes(), 12);
//!
//! assert_eq!(duration.set_minutes("99"), Err(InputError::OutOfRange(99)));
//! assert_eq!(duration.minutes(), 12);
//! ```

use std::fmt;

/// Largest value either field accepts.
pub const MAX_FIELD: u8 = 59;

/// Minutes configured at startup.
pub const DEFAULT_MINUTES: u8 = 5;

/// Seconds configured at startup.
pub const DEFAULT_SECONDS: u8 = 30;

/// Reasons a field edit is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text is not an integer.
    Unparsable(String),
    /// The text is an integer outside `0..=59`.
    OutOfRange(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Unparsable(text) => write!(f, "not a number: {:?}", text),
            InputError::OutOfRange(value) => {
                write!(f, "{} is outside 0..={}", value, MAX_FIELD)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one field of text into a value in `0..=59`.
///
/// Blank text means the field was cleared and reads as `0`.
pub fn parse_field(text: &str) -> Result<u8, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::Unparsable(trimmed.to_string()))?;

    if (0..=i64::from(MAX_FIELD)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InputError::OutOfRange(value))
    }
}

/// A `minutes:seconds` pair, each field in `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredDuration {
    minutes: u8,
    seconds: u8,
}

impl ConfiguredDuration {
    /// Builds a duration from already-validated values.
    ///
    /// Returns `OutOfRange` for the first field above 59.
    pub fn new(minutes: u8, seconds: u8) -> Result<Self, InputError> {
        for value in [minutes, seconds] {
            if value > MAX_FIELD {
                return Err(InputError::OutOfRange(i64::from(value)));
            }
        }
        Ok(Self { minutes, seconds })
    }

    /// Configured minutes.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Configured seconds.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The whole duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// Replaces the minutes from text. On error the old value is kept.
    pub fn set_minutes(&mut self, text: &str) -> Result<(), InputError> {
        self.minutes = parse_field(text)?;
        Ok(())
    }

    /// Replaces the seconds from text. On error the old value is kept.
    pub fn set_seconds(&mut self, text: &str) -> Result<(), InputError> {
        self.seconds = parse_field(text)?;
        Ok(())
    }
}

impl Default for ConfiguredDuration {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            seconds: DEFAULT_SECONDS,
        }
    }
}

impl fmt::Display for ConfiguredDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m{}s", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_five_thirty() {
        let duration = ConfiguredDuration::default();
        assert_eq!(duration.minutes(), 5);
        assert_eq!(duration.seconds(), 30);
        assert_eq!(duration.total_seconds(), 330);
    }

    #[test]
    fn test_blank_text_reads_as_zero() {
        assert_eq!(parse_field(""), Ok(0));
        assert_eq!(parse_field("   "), Ok(0));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let mut duration = ConfiguredDuration::default();
        let err = duration.set_seconds("4x").unwrap_err();
        assert_eq!(err, InputError::Unparsable("4x".to_string()));
        assert_eq!(duration.seconds(), 30);
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        let mut duration = ConfiguredDuration::default();
        assert_eq!(duration.set_minutes("99"), Err(InputError::OutOfRange(99)));
        assert_eq!(duration.set_minutes("-1"), Err(InputError::OutOfRange(-1)));
        assert_eq!(duration.set_seconds("60"), Err(InputError::OutOfRange(60)));
        assert_eq!(duration, ConfiguredDuration::default());
    }

    #[test]
    fn test_new_validates_both_fields() {
        assert!(ConfiguredDuration::new(59, 59).is_ok());
        assert_eq!(
            ConfiguredDuration::new(5, 75),
            Err(InputError::OutOfRange(75))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InputError::OutOfRange(99).to_string(), "99 is outside 0..=59");
        assert_eq!(
            InputError::Unparsable("ab".into()).to_string(),
            "not a number: \"ab\""
        );
    }

    proptest! {
        #[test]
        fn minutes_accepted_exactly_in_range(m in -200i64..200) {
            let mut duration = ConfiguredDuration::default();
            let result = duration.set_minutes(&m.to_string());
            if (0..=59).contains(&m) {
                prop_assert!(result.is_ok());
                prop_assert_eq!(i64::from(duration.minutes()), m);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(duration.minutes(), DEFAULT_MINUTES);
            }
            prop_assert_eq!(duration.seconds(), DEFAULT_SECONDS);
        }

        #[test]
        fn seconds_accepted_exactly_in_range(s in -200i64..200) {
            let mut duration = ConfiguredDuration::default();
            let result = duration.set_seconds(&s.to_string());
            prop_assert_eq!(result.is_ok(), (0..=59).contains(&s));
            if result.is_err() {
                prop_assert_eq!(duration.seconds(), DEFAULT_SECONDS);
            }
        }
    }
}
