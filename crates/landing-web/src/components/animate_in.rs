//! Scroll Reveal Wrapper

use leptos::prelude::*;

use landing_core::{RevealConfig, StyleToken, Threshold, TransitionDuration};

use crate::hooks::use_in_view;
use crate::theme::use_theme;

/// Fades and slides its children in the first time they scroll into view.
///
/// ```rust,ignore
/// view! {
///     <AnimateIn delay=TransitionDuration::Slow class="text-center">
///         <h2>"What Makes Us Different"</h2>
///     </AnimateIn>
/// }
/// ```
#[component]
pub fn AnimateIn(
    children: Children,
    /// Extra classes kept in both states
    #[prop(into, optional)]
    class: MaybeProp<String>,
    /// Tokens before the reveal (default: invisible, offset down)
    #[prop(optional)]
    from: Option<Vec<StyleToken>>,
    /// Tokens after the reveal (default: visible, no offset)
    #[prop(optional)]
    to: Option<Vec<StyleToken>>,
    /// Transition length
    #[prop(optional)]
    delay: TransitionDuration,
    /// Visible fraction that triggers the reveal (default 0.1)
    #[prop(into, optional)]
    threshold: MaybeProp<f64>,
) -> impl IntoView {
    let config =
        Memo::new(move |_| reveal_config(from.clone(), to.clone(), delay, threshold.get()));

    let (node_ref, in_view) = use_in_view(Signal::derive(move || config.with(|c| c.threshold)));
    let theme = use_theme();

    let class_list = move || {
        let base = class.get().unwrap_or_default();
        config.with(|c| c.class_string(in_view.get(), &base, &theme))
    };

    view! {
        <div node_ref=node_ref class=class_list>
            {children()}
        </div>
    }
}

/// Prop values over the reveal defaults. Out-of-range thresholds are clamped.
fn reveal_config(
    from: Option<Vec<StyleToken>>,
    to: Option<Vec<StyleToken>>,
    duration: TransitionDuration,
    threshold: Option<f64>,
) -> RevealConfig {
    let defaults = RevealConfig::default();
    RevealConfig {
        from: from.unwrap_or(defaults.from),
        to: to.unwrap_or(defaults.to),
        duration,
        threshold: threshold.map_or(defaults.threshold, Threshold::saturating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_props_gives_defaults() {
        let config = reveal_config(None, None, TransitionDuration::default(), None);
        assert_eq!(config, RevealConfig::default());
    }

    #[test]
    fn test_threshold_prop_reaches_config() {
        let config = reveal_config(None, None, TransitionDuration::Slow, Some(0.5));
        assert_eq!(config.threshold.value(), 0.5);
        assert_eq!(config.duration, TransitionDuration::Slow);
    }

    #[test]
    fn test_threshold_prop_is_clamped() {
        let threshold = |value| reveal_config(None, None, TransitionDuration::Fast, Some(value));
        assert_eq!(threshold(3.0).threshold.value(), 1.0);
        assert_eq!(threshold(-1.0).threshold.value(), 0.0);
        assert_eq!(threshold(f64::NAN).threshold, Threshold::DEFAULT);
    }

    #[test]
    fn test_token_props_replace_defaults() {
        let config = reveal_config(
            Some(vec![StyleToken::Invisible]),
            Some(vec![StyleToken::Visible]),
            TransitionDuration::Medium,
            None,
        );
        assert_eq!(config.tokens(false).last(), Some(&StyleToken::Invisible));
        assert_eq!(config.tokens(true).last(), Some(&StyleToken::Visible));
    }
}
