//! Spot/futures switch and the futures leverage setting.

use std::fmt;

/// Which order form the Trade tab shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TradeMode {
    #[default]
    Spot,
    /// Same order fields plus a leverage multiplier.
    Futures,
}

impl TradeMode {
    pub fn label(&self) -> &'static str {
        match self {
            TradeMode::Spot => "Spot",
            TradeMode::Futures => "Futures",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            TradeMode::Spot => TradeMode::Futures,
            TradeMode::Futures => TradeMode::Spot,
        };
    }
}

/// Risk band of a leverage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Leverage multiplier, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Leverage(u8);

impl Leverage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 125;
    pub const DEFAULT: u8 = 10;

    /// Shown above [`Self::WARNING_ABOVE`].
    pub const WARNING: &'static str =
        "Warning: High leverage increases both potential profits and losses significantly.";
    pub const WARNING_ABOVE: u8 = 50;

    /// Clamps `value` into the allowed range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One step up, saturating at [`Self::MAX`].
    pub fn increase(&mut self) {
        *self = Self::new(self.0.saturating_add(1));
    }

    /// One step down, saturating at [`Self::MIN`].
    pub fn decrease(&mut self) {
        *self = Self::new(self.0.saturating_sub(1));
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self.0 {
            0..=10 => RiskLevel::Low,
            11..=25 => RiskLevel::Medium,
            26..=50 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn shows_warning(&self) -> bool {
        self.0 > Self::WARNING_ABOVE
    }

    /// Position of the setting between `MIN` and `MAX`, from 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }
}

impl Default for Leverage {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Leverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_switch_after_each_threshold() {
        assert_eq!(Leverage::new(10).risk_level(), RiskLevel::Low);
        assert_eq!(Leverage::new(11).risk_level(), RiskLevel::Medium);
        assert_eq!(Leverage::new(25).risk_level(), RiskLevel::Medium);
        assert_eq!(Leverage::new(26).risk_level(), RiskLevel::High);
        assert_eq!(Leverage::new(50).risk_level(), RiskLevel::High);
        assert_eq!(Leverage::new(51).risk_level(), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very High");
    }

    #[test]
    fn warning_starts_above_fifty() {
        assert!(!Leverage::new(50).shows_warning());
        assert!(Leverage::new(51).shows_warning());
    }

    #[test]
    fn steps_saturate_at_bounds() {
        let mut low = Leverage::new(0);
        assert_eq!(low.value(), Leverage::MIN);
        low.decrease();
        assert_eq!(low.value(), 1);
        low.increase();
        assert_eq!(low.value(), 2);

        let mut high = Leverage::new(200);
        assert_eq!(high.value(), Leverage::MAX);
        high.increase();
        assert_eq!(high.value(), 125);
        assert_eq!(high.ratio(), 1.0);
    }

    #[test]
    fn defaults_to_ten_on_spot() {
        assert_eq!(Leverage::default().to_string(), "10x");
        assert_eq!(Leverage::default().risk_level(), RiskLevel::Low);
        let mut mode = TradeMode::default();
        assert_eq!(mode, TradeMode::Spot);
        mode.toggle();
        assert_eq!(mode.label(), "Futures");
    }
}
