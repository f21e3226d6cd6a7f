//! Styles for the countdown screen.
//!
//! Tiers from [`crate::display`] and [`crate::status`] are mapped to lipgloss
//! styles here, so the rest of the crate never deals with literal colors.

use crate::display::Tier;
use crate::status::BannerTier;
use lipgloss_extras::prelude::*;

/// Every style the screen uses.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading line.
    pub title: Style,
    /// Readout with more than a minute left.
    pub readout_normal: Style,
    /// Readout with a minute or less left.
    pub readout_warning: Style,
    /// Readout after completion.
    pub readout_alert: Style,
    /// Banner while stopped.
    pub banner_idle: Style,
    /// Banner while running.
    pub banner_active: Style,
    /// Banner while ending soon.
    pub banner_warning: Style,
    /// Banner after completion.
    pub banner_alert: Style,
    /// Field label.
    pub label: Style,
    /// Value of the focused field.
    pub field_focused: Style,
    /// Value of an unfocused field.
    pub field_blurred: Style,
    /// Start, stop and reset controls.
    pub button: Style,
    /// Quick-set presets.
    pub preset: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let banner = Style::new()
            .foreground(Color::from("#1C1C1E"))
            .padding(0, 1, 0, 1);

        Self {
            title: Style::new().bold(true).padding(0, 0, 1, 0),
            readout_normal: Style::new().bold(true).foreground(Color::from("#007AFF")),
            readout_warning: Style::new().bold(true).foreground(Color::from("#FF9500")),
            readout_alert: Style::new().bold(true).foreground(Color::from("#FF3B30")),
            banner_idle: banner.clone().background(Color::from("#F8F9FA")),
            banner_active: banner.clone().background(Color::from("#E6F7FF")),
            banner_warning: banner.clone().background(Color::from("#FFF3E6")),
            banner_alert: banner.background(Color::from("#FFE6E6")),
            label: Style::new().foreground(subdued.clone()),
            field_focused: Style::new().reverse(true).padding(0, 1, 0, 1),
            field_blurred: Style::new().underline(true).padding(0, 1, 0, 1),
            button: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .padding(0, 1, 0, 1),
            preset: Style::new().foreground(subdued),
        }
    }
}

impl Styles {
    /// Style for a readout tier.
    pub fn readout(&self, tier: Tier) -> &Style {
        match tier {
            Tier::Normal => &self.readout_normal,
            Tier::Warning => &self.readout_warning,
            Tier::Alert => &self.readout_alert,
        }
    }

    /// Style for a banner tier.
    pub fn banner(&self, tier: BannerTier) -> &Style {
        match tier {
            BannerTier::Idle => &self.banner_idle,
            BannerTier::Active => &self.banner_active,
            BannerTier::Warning => &self.banner_warning,
            BannerTier::Alert => &self.banner_alert,
        }
    }
}
