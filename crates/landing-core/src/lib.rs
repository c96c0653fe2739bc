//! # landing-core
//!
//! Browser-independent logic behind the landing page's animated components.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AnimateIn (web)                         │
//! │  ┌─────────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ ViewportLatch   │──│VisibilityLatch──│  RevealConfig  │  │
//! │  │ + Guard (scoped)│  │  (one-way)   │  │  + StyleToken  │  │
//! │  └─────────────────┘  └──────────────┘  └────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SkillsOrbit (web)                        │
//! │               OrbitLayout<T, N> → OrbitPlacement             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `StyleResolver` trait keeps class names out of the reveal logic:
//! tokens go in, a theme decides what they look like.

pub mod error;
pub mod latch;
pub mod observation;
pub mod orbit;
pub mod reveal;
pub mod style;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use error::{ConfigError, Result};
pub use latch::{IntersectionSample, LatchEvent, Threshold, VisibilityLatch};
pub use observation::{Observation, ObservationGuard};
pub use orbit::{OrbitLayout, OrbitPlacement};
pub use reveal::RevealConfig;
pub use style::{StyleResolver, StyleToken, TailwindTheme, ThemeOverrides, TransitionDuration};
pub use viewport::ViewportLatch;
