use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Scroll offset past which the navbar switches to its compact look.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Look-ahead added to the scroll offset when deciding which section is in view.
const SECTION_PROBE_OFFSET: f64 = 150.0;
const PARALLAX_FACTOR: f64 = 0.3;

/// Vertical bounds of one `section[id]`, measured at event time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Everything the scroll position decides, computed in one place and
/// applied to the page in one step. `active_section: None` means no
/// section contained the probe; the previous highlight stays as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUiState {
    pub nav_scrolled: bool,
    pub active_section: Option<String>,
    pub parallax_y: f64,
}

pub fn scroll_ui_state(scroll_y: f64, sections: &[SectionBounds]) -> ScrollUiState {
    let probe = scroll_y + SECTION_PROBE_OFFSET;
    let mut active = None;
    for section in sections {
        // When several sections contain the probe, the last one in
        // document order wins.
        if probe >= section.top && probe < section.top + section.height {
            active = Some(section.id.clone());
        }
    }
    ScrollUiState {
        nav_scrolled: scroll_y > NAV_SCROLL_THRESHOLD,
        active_section: active,
        parallax_y: scroll_y * PARALLAX_FACTOR,
    }
}

/// Signals shared with the navbar and hero through context.
#[derive(Clone, Copy)]
pub struct ScrollFx {
    pub nav_scrolled: Signal<bool>,
    pub active_section: Signal<Option<String>>,
    pub parallax_y: Signal<f64>,
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

/// Installs the window scroll listener and runs the initial sync once
/// the page is mounted. Returns the shared state, which is also
/// provided as context for child components.
pub fn use_scroll_effects() -> ScrollFx {
    let fx = use_context_provider(|| ScrollFx {
        nav_scrolled: Signal::new(false),
        active_section: Signal::new(None),
        parallax_y: Signal::new(0.0),
    });

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<ScrollListener>);
        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            tracing::debug!("scroll: attach listener");
            let Some(window) = web_sys::window() else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let fx_for_scroll = fx;
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                sync_scroll_state(fx_for_scroll);
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback(
                "scroll",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(ScrollListener { closure }));

            // Initial pass so the navbar and link highlight match
            // wherever the page loads (mid-document reloads included).
            sync_scroll_state(fx);
            if let Some(body) = window.document().and_then(|document| document.body()) {
                let _ = body.class_list().add_1("loaded");
            }
            tracing::info!("portfolio interactions ready");
        });

        let listener = listener;
        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    fx
}

#[cfg(target_arch = "wasm32")]
fn sync_scroll_state(mut fx: ScrollFx) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let state = scroll_ui_state(scroll_y, &measure_sections(&document));

    if *fx.nav_scrolled.peek() != state.nav_scrolled {
        fx.nav_scrolled.set(state.nav_scrolled);
    }
    if state.active_section.is_some() && *fx.active_section.peek() != state.active_section {
        fx.active_section.set(state.active_section);
    }
    fx.parallax_y.set(state.parallax_y);
}

#[cfg(target_arch = "wasm32")]
fn measure_sections(document: &web_sys::Document) -> Vec<SectionBounds> {
    let mut sections = Vec::new();
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return sections;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        sections.push(SectionBounds {
            id: element.id(),
            top: element.offset_top() as f64,
            height: element.offset_height() as f64,
        });
    }
    sections
}

/// The id a same-page anchor points at, or `None` for anything that is
/// not a non-empty fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Smoothly scrolls the target of a fragment href to the top of the
/// viewport. Unknown ids are a no-op.
pub fn scroll_to_fragment(href: &str) {
    let Some(id) = fragment_target(href) else {
        return;
    };
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(target) = document.get_element_by_id(id) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn navbar_scrolls_strictly_past_threshold() {
        assert_eq!(scroll_ui_state(50.0, &[]).nav_scrolled, false);
        assert_eq!(scroll_ui_state(50.5, &[]).nav_scrolled, true);
        assert_eq!(scroll_ui_state(0.0, &[]).nav_scrolled, false);
    }

    #[test]
    fn no_matching_section_yields_none() {
        let sections = [section("about", 1000.0, 400.0)];
        assert_eq!(scroll_ui_state(0.0, &sections).active_section, None);
    }

    #[test]
    fn probe_bounds_are_inclusive_top_exclusive_bottom() {
        // Probe sits at scroll + 150.
        let sections = [section("about", 150.0, 100.0)];
        assert_eq!(
            scroll_ui_state(0.0, &sections).active_section.as_deref(),
            Some("about")
        );
        // Probe exactly at the bottom edge falls outside.
        assert_eq!(scroll_ui_state(100.0, &sections).active_section, None);
        // One pixel before the bottom edge is still inside.
        assert_eq!(
            scroll_ui_state(99.0, &sections).active_section.as_deref(),
            Some("about")
        );
    }

    #[test]
    fn last_matching_section_wins() {
        let sections = [
            section("home", 0.0, 800.0),
            section("about", 100.0, 800.0),
        ];
        assert_eq!(
            scroll_ui_state(0.0, &sections).active_section.as_deref(),
            Some("about")
        );
    }

    #[test]
    fn sections_after_the_match_do_not_clear_it() {
        let sections = [
            section("home", 0.0, 800.0),
            section("contact", 5000.0, 400.0),
        ];
        assert_eq!(
            scroll_ui_state(0.0, &sections).active_section.as_deref(),
            Some("home")
        );
    }

    #[test]
    fn parallax_is_three_tenths_of_scroll() {
        assert_eq!(scroll_ui_state(100.0, &[]).parallax_y, 30.0);
        assert_eq!(scroll_ui_state(0.0, &[]).parallax_y, 0.0);
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#missing-id"), Some("missing-id"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/privacy"), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
    }
}
