//! Viewport Latch
//!
//! Ties a [`VisibilityLatch`] to the observer registration feeding it, so
//! the mount/re-register/unmount sequence lives in one place:
//!
//! ```text
//!  attach(t)          attach(t')                 detach()
//!  ─────────▶ [observing t] ─────────▶ [observing t'] ─────────▶ [detached]
//!              release old, keep state         release, keep state
//! ```

use crate::latch::{IntersectionSample, LatchEvent, Threshold, VisibilityLatch};
use crate::observation::{Observation, ObservationGuard};

/// One element's latch plus the registration that feeds it
#[derive(Debug)]
pub struct ViewportLatch<O: Observation> {
    latch: VisibilityLatch,
    guard: ObservationGuard<O>,
}

impl<O: Observation> ViewportLatch<O> {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            latch: VisibilityLatch::new(threshold),
            guard: ObservationGuard::empty(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    pub fn threshold(&self) -> Threshold {
        self.latch.threshold()
    }

    /// Whether a registration is currently live
    pub fn is_observing(&self) -> bool {
        self.guard.is_active()
    }

    /// Register with `observe`, dropping any previous registration first.
    ///
    /// The latched state is kept across re-registration. When `observe`
    /// fails, nothing stays registered and the error is handed back; the
    /// latch keeps whatever state it had.
    pub fn attach<E>(
        &mut self,
        threshold: Threshold,
        observe: impl FnOnce(Threshold) -> Result<O, E>,
    ) -> Result<(), E> {
        self.guard.release();
        self.latch.set_threshold(threshold);

        let observation = observe(threshold)?;
        self.guard = ObservationGuard::new(observation);
        tracing::debug!(threshold = threshold.value(), "viewport observation attached");
        Ok(())
    }

    /// Release the registration. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.guard.release();
    }

    /// Forward one sample from the registration to the latch
    pub fn record(&mut self, sample: IntersectionSample) -> LatchEvent {
        self.latch.record(sample)
    }
}
