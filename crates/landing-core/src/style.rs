//! Style Tokens
//!
//! The reveal system speaks in symbolic tokens. A [`StyleResolver`] turns
//! them into concrete class names; the page ships with [`TailwindTheme`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Closed set of style tokens the reveal system can emit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleToken {
    Invisible,
    Visible,
    OffsetDown,
    NoOffset,
    TransitionAll,
    EaseInOut,
    DurationFast,
    DurationMedium,
    DurationSlow,
    DurationSlower,
}

impl StyleToken {
    pub const ALL: [StyleToken; 10] = [
        StyleToken::Invisible,
        StyleToken::Visible,
        StyleToken::OffsetDown,
        StyleToken::NoOffset,
        StyleToken::TransitionAll,
        StyleToken::EaseInOut,
        StyleToken::DurationFast,
        StyleToken::DurationMedium,
        StyleToken::DurationSlow,
        StyleToken::DurationSlower,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleToken::Invisible => "invisible",
            StyleToken::Visible => "visible",
            StyleToken::OffsetDown => "offset-down",
            StyleToken::NoOffset => "no-offset",
            StyleToken::TransitionAll => "transition-all",
            StyleToken::EaseInOut => "ease-in-out",
            StyleToken::DurationFast => "duration-fast",
            StyleToken::DurationMedium => "duration-medium",
            StyleToken::DurationSlow => "duration-slow",
            StyleToken::DurationSlower => "duration-slower",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        StyleToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| ConfigError::UnknownToken(s.to_string()))
    }
}

/// Transition length for a reveal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionDuration {
    /// 300ms
    Fast,
    /// 500ms
    #[default]
    Medium,
    /// 700ms
    Slow,
    /// 900ms
    Slower,
}

impl TransitionDuration {
    pub fn millis(self) -> u32 {
        match self {
            TransitionDuration::Fast => 300,
            TransitionDuration::Medium => 500,
            TransitionDuration::Slow => 700,
            TransitionDuration::Slower => 900,
        }
    }

    pub fn token(self) -> StyleToken {
        match self {
            TransitionDuration::Fast => StyleToken::DurationFast,
            TransitionDuration::Medium => StyleToken::DurationMedium,
            TransitionDuration::Slow => StyleToken::DurationSlow,
            TransitionDuration::Slower => StyleToken::DurationSlower,
        }
    }
}

impl From<TransitionDuration> for StyleToken {
    fn from(d: TransitionDuration) -> Self {
        d.token()
    }
}

/// Maps symbolic tokens to concrete class names
pub trait StyleResolver {
    fn resolve(&self, token: StyleToken) -> Cow<'_, str>;
}

/// Tailwind utility classes for every token
#[derive(Clone, Copy, Debug, Default)]
pub struct TailwindTheme;

impl StyleResolver for TailwindTheme {
    fn resolve(&self, token: StyleToken) -> Cow<'_, str> {
        Cow::Borrowed(match token {
            StyleToken::Invisible => "opacity-0",
            StyleToken::Visible => "opacity-100",
            StyleToken::OffsetDown => "translate-y-10",
            StyleToken::NoOffset => "translate-y-0",
            StyleToken::TransitionAll => "transition-all",
            StyleToken::EaseInOut => "ease-in-out",
            StyleToken::DurationFast => "duration-300",
            StyleToken::DurationMedium => "duration-500",
            StyleToken::DurationSlow => "duration-700",
            StyleToken::DurationSlower => "duration-900",
        })
    }
}

/// Replaces selected tokens of a base resolver
#[derive(Clone, Debug, Default)]
pub struct ThemeOverrides<R = TailwindTheme> {
    base: R,
    overrides: HashMap<StyleToken, String>,
}

impl ThemeOverrides<TailwindTheme> {
    /// Parse overrides from a JSON object of `token-name -> classes`.
    ///
    /// ```json
    /// { "invisible": "opacity-0 blur-sm", "offset-down": "translate-y-4" }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut theme = Self::new(TailwindTheme);
        for (name, classes) in raw {
            theme.insert(name.parse()?, classes)?;
        }
        tracing::debug!(overrides = theme.overrides.len(), "loaded theme overrides");
        Ok(theme)
    }
}

impl<R: StyleResolver> ThemeOverrides<R> {
    pub fn new(base: R) -> Self {
        Self { base, overrides: HashMap::new() }
    }

    /// Override one token
    pub fn insert(&mut self, token: StyleToken, classes: impl Into<String>) -> Result<()> {
        let classes = classes.into();
        if classes.trim().is_empty() {
            return Err(ConfigError::EmptyClasses(token.to_string()));
        }
        self.overrides.insert(token, classes.trim().to_string());
        Ok(())
    }

    pub fn with(mut self, token: StyleToken, classes: impl Into<String>) -> Result<Self> {
        self.insert(token, classes)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl<R: StyleResolver> StyleResolver for ThemeOverrides<R> {
    fn resolve(&self, token: StyleToken) -> Cow<'_, str> {
        match self.overrides.get(&token) {
            Some(classes) => Cow::Borrowed(classes.as_str()),
            None => self.base.resolve(token),
        }
    }
}

/// Resolve a token list into one space-separated class string
pub fn resolve_tokens<R: StyleResolver + ?Sized>(resolver: &R, tokens: &[StyleToken]) -> String {
    let resolved: Vec<Cow<'_, str>> = tokens.iter().map(|t| resolver.resolve(*t)).collect();
    merge_classes(resolved.iter().map(AsRef::as_ref))
}

/// Join class fragments, skipping empty ones
pub fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
