//! Viewport Hooks

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use landing_core::{IntersectionSample, LatchEvent, Observation, Threshold, ViewportLatch};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A browser `IntersectionObserver` watching one element
pub struct DomObservation {
    observer: IntersectionObserver,
    // Must outlive the observer's registration
    _callback: EntriesCallback,
}

impl DomObservation {
    /// Start observing `element`, forwarding each entry as a sample
    pub fn observe(
        element: &Element,
        threshold: Threshold,
        mut on_sample: impl FnMut(IntersectionSample) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Observation for DomObservation {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Track whether the returned node has been scrolled into view.
///
/// The flag flips to `true` the first time at least `threshold` of the node
/// is visible and stays there. Changing the threshold re-registers the
/// observer without resetting the flag. If the browser has no
/// `IntersectionObserver`, the flag stays `false`.
pub fn use_in_view(threshold: Signal<Threshold>) -> (NodeRef<Div>, ReadSignal<bool>) {
    let node_ref = NodeRef::<Div>::new();
    let (in_view, set_in_view) = signal(false);

    let viewport =
        StoredValue::new_local(ViewportLatch::<DomObservation>::new(threshold.get_untracked()));

    Effect::new(move |_| {
        let threshold = threshold.get();
        let Some(element) = node_ref.get() else {
            return;
        };

        let on_sample = move |sample: IntersectionSample| {
            if viewport.try_update_value(|v| v.record(sample)) == Some(LatchEvent::Revealed) {
                set_in_view.set(true);
            }
        };

        let attached = viewport.try_update_value(|v| {
            v.attach(threshold, |t| DomObservation::observe(&element, t, on_sample))
        });
        if let Some(Err(err)) = attached {
            leptos::logging::warn!("viewport observer unavailable, content stays hidden: {err:?}");
        }
    });

    on_cleanup(move || {
        viewport.try_update_value(ViewportLatch::detach);
    });

    (node_ref, in_view)
}
