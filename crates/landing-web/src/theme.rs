//! Theme Context

use std::borrow::Cow;
use std::sync::Arc;

use leptos::prelude::*;

use landing_core::{StyleResolver, StyleToken, TailwindTheme};

/// Shared style resolver for every reveal on the page
#[derive(Clone)]
pub struct Theme(Arc<dyn StyleResolver + Send + Sync>);

impl Theme {
    pub fn new(resolver: impl StyleResolver + Send + Sync + 'static) -> Self {
        Self(Arc::new(resolver))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(TailwindTheme)
    }
}

impl StyleResolver for Theme {
    fn resolve(&self, token: StyleToken) -> Cow<'_, str> {
        self.0.resolve(token)
    }
}

/// Theme provided by an ancestor, or the Tailwind default
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
