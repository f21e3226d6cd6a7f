//! Countdown readout.
//!
//! Turns the remaining seconds into the `MM:SS` text shown on screen and picks
//! the color tier for it. Pure and stateless.

/// Color category of the readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// More than a minute left.
    Normal,
    /// A minute or less left.
    Warning,
    /// The countdown has completed.
    Alert,
}

/// The formatted countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Zero-padded `MM:SS`.
    pub text: String,
    /// Color tier for `text`.
    pub tier: Tier,
}

/// Seconds at or below which the countdown counts as ending.
pub const WARNING_THRESHOLD: u32 = 60;

/// Formats `remaining` seconds as `MM:SS` and picks its tier.
///
/// ```rust
/// use countdown::display::{format, Tier};
///
/// let readout = format(330, false);
/// assert_eq!(readout.text, "05:30");
/// assert_eq!(readout.tier, Tier::Normal);
///
/// assert_eq!(format(0, true).tier, Tier::Alert);
/// ```
pub fn format(remaining: u32, completed: bool) -> Readout {
    let tier = if completed {
        Tier::Alert
    } else if remaining <= WARNING_THRESHOLD {
        Tier::Warning
    } else {
        Tier::Normal
    };

    Readout {
        text: format!("{:02}:{:02}", remaining / 60, remaining % 60),
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_padding() {
        assert_eq!(format(0, false).text, "00:00");
        assert_eq!(format(9, false).text, "00:09");
        assert_eq!(format(61, false).text, "01:01");
        assert_eq!(format(1500, false).text, "25:00");
        assert_eq!(format(3599, false).text, "59:59");
    }

    #[test]
    fn test_tiers() {
        assert_eq!(format(61, false).tier, Tier::Normal);
        assert_eq!(format(60, false).tier, Tier::Warning);
        assert_eq!(format(1, false).tier, Tier::Warning);
        assert_eq!(format(0, false).tier, Tier::Warning);
        assert_eq!(format(0, true).tier, Tier::Alert);
        // Completion wins over the remaining time.
        assert_eq!(format(300, true).tier, Tier::Alert);
    }

    proptest! {
        #[test]
        fn text_is_padded_minutes_and_seconds(r in 0u32..6000) {
            let text = format(r, false).text;
            let (m, s) = text.split_once(':').unwrap();
            prop_assert_eq!(m.parse::<u32>().unwrap(), r / 60);
            prop_assert_eq!(s.parse::<u32>().unwrap(), r % 60);
            prop_assert!(m.len() >= 2);
            prop_assert_eq!(s.len(), 2);
        }
    }
}
