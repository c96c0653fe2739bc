//! Orbit Layout
//!
//! Places a fixed set of items evenly around a circle and staggers a shared
//! rotation animation so they stay evenly spread while they move.
//!
//! ```text
//!              2π/3   π/3
//!                 ●   ●
//!          π  ●    (c)    ●  0
//!                 ●   ●
//!              4π/3   5π/3
//! ```
//!
//! Spatial spacing (`θ_i = 2πi/N`) and temporal spacing (`delay_i = -i·unit`)
//! are independent; both only depend on the index.

use std::f64::consts::TAU;
use std::time::Duration;

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Default orbit radius in CSS pixels
pub const DEFAULT_RADIUS_PX: f64 = 180.0;

/// Default time for one full revolution
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(6);

/// Default per-index animation offset
pub const DEFAULT_STAGGER: Duration = Duration::from_secs(1);

/// Fixed ring of `N` items
#[derive(Clone, Debug)]
pub struct OrbitLayout<T, const N: usize> {
    items: [T; N],
    radius_px: f64,
    period: Duration,
    stagger: Duration,
}

/// Where and when one item sits on the ring
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrbitPlacement<'a, T> {
    pub index: usize,

    #[serde(skip)]
    pub item: &'a T,

    /// Radians from the positive x axis
    pub angle: f64,

    /// Animation delay in seconds, never positive
    pub offset_secs: f64,

    /// Resting offset from the center, CSS pixels
    pub x: f64,
    pub y: f64,
}

impl<T, const N: usize> OrbitLayout<T, N> {
    pub fn new(items: [T; N]) -> Self {
        Self {
            items,
            radius_px: DEFAULT_RADIUS_PX,
            period: DEFAULT_PERIOD,
            stagger: DEFAULT_STAGGER,
        }
    }

    /// Ring radius in CSS pixels. Must be finite and positive.
    pub fn with_radius(mut self, radius_px: f64) -> Result<Self> {
        if !radius_px.is_finite() || radius_px <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius_px));
        }
        self.radius_px = radius_px;
        Ok(self)
    }

    pub fn with_period(mut self, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(ConfigError::InvalidTiming("period"));
        }
        self.period = period;
        Ok(self)
    }

    /// Per-index delay step. Zero would start every item in the same phase.
    pub fn with_stagger(mut self, stagger: Duration) -> Result<Self> {
        if stagger.is_zero() {
            return Err(ConfigError::InvalidTiming("stagger"));
        }
        self.stagger = stagger;
        Ok(self)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn items(&self) -> &[T; N] {
        &self.items
    }

    pub fn radius_px(&self) -> f64 {
        self.radius_px
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Angle for index `i`, `(i / N) · 2π`
    pub fn angle_of(&self, index: usize) -> f64 {
        (index as f64 / N as f64) * TAU
    }

    /// Animation delay for index `i`, `-i · stagger`
    pub fn offset_of(&self, index: usize) -> f64 {
        let offset = index as f64 * self.stagger.as_secs_f64();
        // -0.0 would serialize as "-0.0"
        if offset == 0.0 { 0.0 } else { -offset }
    }

    /// Compute every placement. Same layout, same result.
    pub fn placements(&self) -> Vec<OrbitPlacement<'_, T>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let angle = self.angle_of(index);
                OrbitPlacement {
                    index,
                    item,
                    angle,
                    offset_secs: self.offset_of(index),
                    x: angle.cos() * self.radius_px,
                    y: angle.sin() * self.radius_px,
                }
            })
            .collect()
    }

    /// Inline style for one placement.
    ///
    /// The animation and radius drive the `orbit` keyframes. `--orbit-x` and
    /// `--orbit-y` hold the resting position used when motion is reduced.
    pub fn style_for(&self, placement: &OrbitPlacement<'_, T>) -> String {
        format!(
            concat!(
                "animation: orbit {period}s linear infinite; animation-delay: {delay}s; ",
                "--orbit-radius: {radius}px; --angle-offset: {angle}rad; ",
                "--orbit-x: {x}px; --orbit-y: {y}px;",
            ),
            period = fmt_num(self.period.as_secs_f64()),
            delay = fmt_num(placement.offset_secs),
            radius = fmt_num(self.radius_px),
            angle = fmt_num(placement.angle),
            x = fmt_num(placement.x),
            y = fmt_num(placement.y),
        )
    }
}

/// Trim float noise for CSS output: `6`, `-1`, `1.0472`
fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // -0 would render as "-0"
    if rounded == 0.0 {
        return "0".into();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPS: f64 = 1e-9;

    fn skills() -> OrbitLayout<&'static str, 6> {
        OrbitLayout::new(["Code", "Design", "Marketing", "Audio", "Video", "PM"])
    }

    fn distinct_mod_tau(angles: &[f64]) -> bool {
        for (i, a) in angles.iter().enumerate() {
            for b in &angles[i + 1..] {
                let diff = (a - b).rem_euclid(TAU);
                if diff < EPS || (TAU - diff) < EPS {
                    return false;
                }
            }
        }
        true
    }

    fn check_spacing<const N: usize>() {
        let layout = OrbitLayout::new([(); N]);
        let placements = layout.placements();
        assert_eq!(placements.len(), N);

        let angles: Vec<f64> = placements.iter().map(|p| p.angle).collect();
        assert!(distinct_mod_tau(&angles), "angles collide for N = {N}");

        let offsets: Vec<f64> = placements.iter().map(|p| p.offset_secs).collect();
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert!((a - b).abs() > EPS, "offsets collide for N = {N}");
            }
        }
    }

    #[test]
    fn test_six_items() {
        let layout = skills();
        let placements = layout.placements();

        let expected_angles = [0.0, PI / 3.0, 2.0 * PI / 3.0, PI, 4.0 * PI / 3.0, 5.0 * PI / 3.0];
        for (p, want) in placements.iter().zip(expected_angles) {
            assert!((p.angle - want).abs() < EPS, "index {}: {} != {}", p.index, p.angle, want);
        }

        let offsets: Vec<f64> = placements.iter().map(|p| p.offset_secs).collect();
        assert_eq!(offsets, vec![0.0, -1.0, -2.0, -3.0, -4.0, -5.0]);
        assert_eq!(*placements[2].item, "Marketing");
    }

    #[test]
    fn test_even_spacing_for_many_sizes() {
        check_spacing::<1>();
        check_spacing::<2>();
        check_spacing::<3>();
        check_spacing::<6>();
        check_spacing::<7>();
        check_spacing::<12>();
        check_spacing::<64>();
    }

    #[test]
    fn test_placements_are_deterministic() {
        let layout = skills();
        assert_eq!(layout.placements(), layout.placements());
        assert_eq!(skills().placements(), layout.placements());
    }

    #[test]
    fn test_positions_on_circle() {
        let layout = skills().with_radius(100.0).unwrap();
        for p in layout.placements() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 100.0).abs() < 1e-6);
        }
        let placements = layout.placements();
        let first = &placements[0];
        assert!((first.x - 100.0).abs() < EPS && first.y.abs() < EPS);
    }

    #[test]
    fn test_custom_stagger() {
        let layout = skills().with_stagger(Duration::from_millis(500)).unwrap();
        assert_eq!(layout.offset_of(3), -1.5);
        assert_eq!(layout.offset_of(0), 0.0);
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        for radius in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(skills().with_radius(radius), Err(ConfigError::InvalidRadius(_))));
        }
        assert!(matches!(
            skills().with_stagger(Duration::ZERO),
            Err(ConfigError::InvalidTiming("stagger"))
        ));
        assert!(matches!(
            skills().with_period(Duration::ZERO),
            Err(ConfigError::InvalidTiming("period"))
        ));

        let layout = skills().with_period(Duration::from_secs(12)).unwrap();
        assert_eq!(layout.period(), Duration::from_secs(12));
    }

    #[test]
    fn test_first_offset_is_positive_zero() {
        let layout = skills();
        let placements = layout.placements();
        let first = &placements[0];
        assert!(first.offset_secs.is_sign_positive());

        let json = serde_json::to_string(first).unwrap();
        assert!(!json.contains("-0"), "{json}");
        assert!(json.contains(r#""offset_secs":0.0"#), "{json}");
    }

    #[test]
    fn test_style_string() {
        let layout = skills();
        let placements = layout.placements();
        assert_eq!(
            layout.style_for(&placements[0]),
            "animation: orbit 6s linear infinite; animation-delay: 0s; \
             --orbit-radius: 180px; --angle-offset: 0rad; \
             --orbit-x: 180px; --orbit-y: 0px;"
        );
        assert_eq!(
            layout.style_for(&placements[1]),
            "animation: orbit 6s linear infinite; animation-delay: -1s; \
             --orbit-radius: 180px; --angle-offset: 1.0472rad; \
             --orbit-x: 90px; --orbit-y: 155.8846px;"
        );
    }

    #[test]
    fn test_empty_layout() {
        let layout: OrbitLayout<u8, 0> = OrbitLayout::new([]);
        assert!(layout.is_empty());
        assert!(layout.placements().is_empty());
    }
}
