//! Status banner resolution.

use crate::display::WARNING_THRESHOLD;

/// Background category of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTier {
    /// Not running.
    Idle,
    /// Running with more than a minute left.
    Active,
    /// Running with a minute or less left.
    Warning,
    /// Completed.
    Alert,
}

/// What the status banner says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Banner text.
    pub message: &'static str,
    /// Leading emoji.
    pub emoji: &'static str,
    /// Background tier.
    pub tier: BannerTier,
}

const COMPLETED: Status = Status {
    message: "Time's up! Nice work!",
    emoji: "🎉",
    tier: BannerTier::Alert,
};

const ENDING_SOON: Status = Status {
    message: "Almost done!",
    emoji: "⚠️",
    tier: BannerTier::Warning,
};

const IN_PROGRESS: Status = Status {
    message: "Timer running",
    emoji: "🔥",
    tier: BannerTier::Active,
};

const STOPPED: Status = Status {
    message: "Timer stopped",
    emoji: "⚡",
    tier: BannerTier::Idle,
};

/// Picks the banner for the current state. Completion takes precedence over
/// running, and running with a minute or less left reads as ending soon.
pub fn resolve(running: bool, completed: bool, remaining: u32) -> Status {
    if completed {
        COMPLETED
    } else if running && remaining <= WARNING_THRESHOLD {
        ENDING_SOON
    } else if running {
        IN_PROGRESS
    } else {
        STOPPED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_wins() {
        assert_eq!(resolve(false, true, 0).tier, BannerTier::Alert);
        assert_eq!(resolve(true, true, 30).tier, BannerTier::Alert);
    }

    #[test]
    fn test_running_tiers() {
        assert_eq!(resolve(true, false, 61), IN_PROGRESS);
        assert_eq!(resolve(true, false, 60), ENDING_SOON);
        assert_eq!(resolve(true, false, 1).emoji, "⚠️");
    }

    #[test]
    fn test_idle_is_stopped_regardless_of_time() {
        assert_eq!(resolve(false, false, 330), STOPPED);
        assert_eq!(resolve(false, false, 10), STOPPED);
        assert_eq!(resolve(false, false, 10).message, "Timer stopped");
    }
}
