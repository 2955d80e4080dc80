use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
const CARD_SELECTOR: &str =
    ".project-card, .detail-card, .skill-category, .certification-card, .contact-card";
#[cfg(target_arch = "wasm32")]
const SKILL_BAR_SELECTOR: &str = ".skill-progress";
/// Per-bar custom property holding the target fill width.
#[cfg(target_arch = "wasm32")]
const PROGRESS_PROPERTY: &str = "--progress";
/// Fraction of an element that must be visible before it reveals.
#[cfg(target_arch = "wasm32")]
const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(target_arch = "wasm32")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback:
        Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// Observes cards and skill bars with one shared IntersectionObserver.
/// `visible` is added on first intersection and never removed; skill
/// bars additionally get their stored `--progress` value copied into
/// the live width, which starts the fill transition.
pub fn use_reveal_observer() {
    #[cfg(target_arch = "wasm32")]
    {
        let mut handle = use_signal(|| None::<RevealObserver>);
        use_effect(move || {
            if handle.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsValue;

            let callback = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let _ = target.class_list().add_1("visible");
                        if target.class_list().contains("skill-progress") {
                            fill_skill_bar(target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

            let options = web_sys::IntersectionObserverInit::new();
            options.set_root_margin("0px");
            options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };

            observe_all(&document, &observer, CARD_SELECTOR, true);
            observe_all(&document, &observer, SKILL_BAR_SELECTOR, false);
            tracing::debug!("reveal: observer attached");

            handle.set(Some(RevealObserver {
                observer,
                _callback: callback,
            }));
        });

        let handle = handle;
        use_drop(move || {
            if let Some(reveal) = handle.read().as_ref() {
                reveal.observer.disconnect();
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_all(
    document: &web_sys::Document,
    observer: &web_sys::IntersectionObserver,
    selector: &str,
    mark_animated: bool,
) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if mark_animated {
            let _ = element.class_list().add_1("animate-on-scroll");
        }
        observer.observe(&element);
    }
}

/// Copies the bar's stored target width into its live width. Whatever
/// value is present is used as-is; a missing property just writes an
/// empty width, a display defect rather than an error.
#[cfg(target_arch = "wasm32")]
fn fill_skill_bar(target: web_sys::Element) {
    let Ok(element) = target.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = element.style();
    if let Ok(progress) = style.get_property_value(PROGRESS_PROPERTY) {
        let _ = style.set_property("width", &progress);
    }
}
