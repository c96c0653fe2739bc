//! Reveal Configuration
//!
//! Maps a latch's two states onto two token sets with a shared transition.
//! There is no timer here; the browser's CSS transition does the animating.

use serde::{Deserialize, Serialize};

use crate::latch::Threshold;
use crate::style::{StyleResolver, StyleToken, TransitionDuration, merge_classes, resolve_tokens};

/// Per-instance reveal settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Tokens applied before the element has been seen
    pub from: Vec<StyleToken>,

    /// Tokens applied once the element has been seen
    pub to: Vec<StyleToken>,

    pub duration: TransitionDuration,

    pub threshold: Threshold,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            from: vec![StyleToken::Invisible, StyleToken::OffsetDown],
            to: vec![StyleToken::Visible, StyleToken::NoOffset],
            duration: TransitionDuration::Medium,
            threshold: Threshold::DEFAULT,
        }
    }
}

impl RevealConfig {
    pub fn with_from(mut self, from: impl Into<Vec<StyleToken>>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_to(mut self, to: impl Into<Vec<StyleToken>>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_duration(mut self, duration: TransitionDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Transition tokens shared by both states
    pub fn transition_tokens(&self) -> [StyleToken; 3] {
        [StyleToken::TransitionAll, self.duration.token(), StyleToken::EaseInOut]
    }

    /// Full token list for the given visibility
    pub fn tokens(&self, visible: bool) -> Vec<StyleToken> {
        let state = if visible { &self.to } else { &self.from };
        let mut tokens = Vec::with_capacity(3 + state.len());
        tokens.extend(self.transition_tokens());
        tokens.extend(state.iter().copied());
        tokens
    }

    /// Caller classes followed by the resolved reveal classes
    pub fn class_string<R: StyleResolver + ?Sized>(
        &self,
        visible: bool,
        base: &str,
        resolver: &R,
    ) -> String {
        let resolved = resolve_tokens(resolver, &self.tokens(visible));
        merge_classes([base, resolved.as_str()])
    }
}
