//! Scoped Observation Registrations
//!
//! A viewport observer registration is the only resource a reveal owns.
//! [`ObservationGuard`] holds it and disconnects exactly once, either on an
//! explicit [`ObservationGuard::release`] or when the guard is dropped.

/// A live registration with some observation mechanism
pub trait Observation {
    /// Stop delivering callbacks. Called at most once per registration.
    fn disconnect(&mut self);
}

/// Owns one registration and releases it on drop
#[derive(Debug)]
pub struct ObservationGuard<O: Observation> {
    inner: Option<O>,
}

impl<O: Observation> ObservationGuard<O> {
    pub fn new(observation: O) -> Self {
        Self { inner: Some(observation) }
    }

    /// A guard with nothing registered, used when the mechanism is unavailable
    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Disconnect now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(mut observation) = self.inner.take() {
            observation.disconnect();
            tracing::debug!("observation released");
        }
    }
}

impl<O: Observation> Default for ObservationGuard<O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<O: Observation> From<Option<O>> for ObservationGuard<O> {
    fn from(observation: Option<O>) -> Self {
        Self { inner: observation }
    }
}

impl<O: Observation> Drop for ObservationGuard<O> {
    fn drop(&mut self) {
        self.release();
    }
}
