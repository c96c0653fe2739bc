//! Visibility Latch
//!
//! A one-way trigger fed by viewport intersection samples. The browser
//! reports both entry and exit; the latch keeps only the first qualifying
//! entry and ignores everything after it.
//!
//! ```text
//!   record(ratio < t)      record(ratio >= t)       record(anything)
//!  ┌──────────────┐       ┌──────────────────┐     ┌──────────────┐
//!  │   Hidden     │──────▶│     Visible      │────▶│   Visible    │
//!  └──────────────┘       └──────────────────┘     └──────────────┘
//!        ▲   │                (Revealed)              (Ignored)
//!        └───┘ (Ignored)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Browsers round intersection ratios, so an element sitting exactly at the
/// threshold may report a hair below it.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Fraction of an element's area that must intersect the viewport.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Default reveal threshold (10% visible)
    pub const DEFAULT: Threshold = Threshold(0.1);

    /// Create a threshold, rejecting NaN and values outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    /// Create a threshold, clamping into `[0, 1]`. NaN becomes the default.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether an intersection ratio satisfies this threshold
    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio + RATIO_TOLERANCE >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> f64 {
        t.0
    }
}

/// One observation delivered by the viewport observer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// Whether the element intersects the viewport at all
    pub is_intersecting: bool,

    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    pub fn leaving() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

/// What a recorded sample did to the latch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchEvent {
    /// This sample flipped the latch to visible
    Revealed,

    /// No state change
    Ignored,
}

/// Monotonic visibility state for one observed element
#[derive(Clone, Debug)]
pub struct VisibilityLatch {
    threshold: Threshold,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Feed one observation into the latch.
    ///
    /// Returns [`LatchEvent::Revealed`] exactly once over the latch's
    /// lifetime. Exit events and every sample after the reveal are ignored.
    pub fn record(&mut self, sample: IntersectionSample) -> LatchEvent {
        if self.visible {
            return LatchEvent::Ignored;
        }

        // NaN ratios fail the comparison and leave the latch hidden
        if sample.is_intersecting && self.threshold.is_met_by(sample.ratio) {
            self.visible = true;
            tracing::debug!(
                ratio = sample.ratio,
                threshold = self.threshold.value(),
                "visibility latch revealed"
            );
            return LatchEvent::Revealed;
        }

        LatchEvent::Ignored
    }

    /// Swap the threshold used for future samples. A latched `true` stays.
    pub fn set_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(Threshold::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = VisibilityLatch::default();
        assert!(!latch.is_visible());
        assert_eq!(latch.threshold(), Threshold::DEFAULT);
    }

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.1).unwrap());
        assert_eq!(latch.record(IntersectionSample::entering(0.05)), LatchEvent::Ignored);
        assert!(!latch.is_visible());

        assert_eq!(latch.record(IntersectionSample::entering(0.1)), LatchEvent::Revealed);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_never_reverts() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
            let mut latch = VisibilityLatch::new(Threshold::new(t).unwrap());
            assert_eq!(latch.record(IntersectionSample::entering(1.0)), LatchEvent::Revealed);

            for sample in [
                IntersectionSample::leaving(),
                IntersectionSample::entering(0.0),
                IntersectionSample::entering(1.0),
                IntersectionSample::leaving(),
            ] {
                assert_eq!(latch.record(sample), LatchEvent::Ignored);
                assert!(latch.is_visible(), "latch reverted at threshold {t}");
            }
        }
    }

    #[test]
    fn test_exit_events_do_not_reveal() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.0).unwrap());
        let sample = IntersectionSample { is_intersecting: false, ratio: 0.0 };
        assert_eq!(latch.record(sample), LatchEvent::Ignored);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_rounded_ratio_still_reveals() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.1).unwrap());
        assert_eq!(
            latch.record(IntersectionSample::entering(0.099_999_9)),
            LatchEvent::Revealed
        );
    }

    #[test]
    fn test_nan_ratio_is_ignored() {
        let mut latch = VisibilityLatch::default();
        assert_eq!(latch.record(IntersectionSample::entering(f64::NAN)), LatchEvent::Ignored);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_threshold_change_keeps_latched_state() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.2).unwrap());
        latch.record(IntersectionSample::entering(0.3));
        assert!(latch.is_visible());

        latch.set_threshold(Threshold::new(0.9).unwrap());
        assert!(latch.is_visible());
        assert_eq!(latch.threshold().value(), 0.9);
    }

    #[test]
    fn test_threshold_change_applies_to_later_samples() {
        let mut latch = VisibilityLatch::new(Threshold::new(0.9).unwrap());
        assert_eq!(latch.record(IntersectionSample::entering(0.5)), LatchEvent::Ignored);

        latch.set_threshold(Threshold::new(0.5).unwrap());
        assert_eq!(latch.record(IntersectionSample::entering(0.5)), LatchEvent::Revealed);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert!(matches!(Threshold::new(-0.1), Err(ConfigError::InvalidThreshold(_))));
        assert!(matches!(Threshold::new(1.5), Err(ConfigError::InvalidThreshold(_))));
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_saturating() {
        assert_eq!(Threshold::saturating(2.0).value(), 1.0);
        assert_eq!(Threshold::saturating(-3.0).value(), 0.0);
        assert_eq!(Threshold::saturating(f64::NAN), Threshold::DEFAULT);
    }

    #[test]
    fn test_threshold_serde() {
        let t: Threshold = serde_json::from_str("0.25").unwrap();
        assert_eq!(t.value(), 0.25);
        assert!(serde_json::from_str::<Threshold>("1.25").is_err());
        assert_eq!(serde_json::to_string(&t).unwrap(), "0.25");
    }
}
