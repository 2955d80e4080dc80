use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::scroll::{self, ScrollFx};

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("certifications", "Certifications"),
    ("contact", "Contact"),
];

/// Body overflow value for a given menu state. Empty string removes
/// the declaration, releasing the scroll lock.
fn body_overflow_value(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        ""
    }
}

#[cfg(target_arch = "wasm32")]
struct OutsideClickListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn Navbar() -> Element {
    let fx = use_context::<ScrollFx>();
    let mut menu_open = use_signal(|| false);

    // The scroll lock follows the menu state no matter which handler
    // changed it.
    use_effect(move || {
        let overflow = body_overflow_value(menu_open());
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let _ = body.style().set_property("overflow", overflow);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = overflow;
    });

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<OutsideClickListener>);
        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let mut open_for_click = menu_open;
            let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                if !open_for_click() {
                    return;
                }
                if click_lands_on_menu(&event) {
                    return;
                }
                open_for_click.set(false);
            }) as Box<dyn FnMut(_)>));
            let _ = document.add_event_listener_with_callback(
                "click",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(OutsideClickListener { closure }));
        });

        let listener = listener;
        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "click",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    let scrolled = fx.nav_scrolled;
    let active = fx.active_section;
    rsx! {
        nav {
            id: "navbar",
            class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-inner",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        menu_open.set(false);
                        scroll::scroll_to_fragment("#home");
                    },
                    "alex.berg"
                }
                button {
                    id: "nav-toggle",
                    r#type: "button",
                    class: if menu_open() { "nav-toggle active" } else { "nav-toggle" },
                    aria_label: "Toggle navigation",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| {
                        let open = !menu_open();
                        menu_open.set(open);
                    },
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                }
                ul {
                    id: "nav-menu",
                    class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in NAV_LINKS.iter().copied() {
                        li { key: "{id}",
                            a {
                                class: if active().as_deref() == Some(id) { "nav-link active" } else { "nav-link" },
                                href: "#{id}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    // Link clicks always release the menu,
                                    // open or not.
                                    menu_open.set(false);
                                    scroll::scroll_to_fragment(&format!("#{id}"));
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn click_lands_on_menu(event: &web_sys::Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(node) = target.dyn_ref::<web_sys::Node>() else {
        return false;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    ["nav-menu", "nav-toggle"].iter().any(|id| {
        document
            .get_element_by_id(id)
            .is_some_and(|element| element.contains(Some(node)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_lock_tracks_menu_state() {
        assert_eq!(body_overflow_value(true), "hidden");
        assert_eq!(body_overflow_value(false), "");
    }

    #[test]
    fn every_nav_link_points_at_a_unique_section() {
        let mut ids: Vec<&str> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
