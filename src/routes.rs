use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig, TypewriterConfig};
use crate::content::{
    ABOUT_CARDS, CERTIFICATIONS, CONTACT_CHANNELS, PROJECTS, SKILL_GROUPS,
};
use crate::navbar::Navbar;
use crate::reveal::use_reveal_observer;
use crate::scroll::{self, use_scroll_effects, ScrollFx};
use crate::typewriter::TypewriterText;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PAGE_TITLE: &str = "Alex Berg — Fullstack Developer";

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "{PAGE_TITLE}" }
                div { class: "page loading" }
            }
        }
        Some(config) => config,
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{PAGE_TITLE}" }
        document::Meta {
            name: "description",
            content: "Portfolio of Alex Berg, a fullstack developer shipping Rust and WebAssembly.",
        }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    use_scroll_effects();
    use_reveal_observer();
    let config = use_context::<RuntimeConfig>();

    rsx! {
        Navbar {}
        main {
            Hero { typewriter: config.typewriter.clone() }
            AboutSection {}
            SkillsSection {}
            ProjectsSection {}
            CertificationsSection {}
            ContactSection {}
        }
        footer { class: "site-footer",
            p { "© 2026 Alex Berg. Built with Rust and Dioxus." }
            a {
                class: "back-to-top",
                href: "#home",
                onclick: move |evt| {
                    evt.prevent_default();
                    scroll::scroll_to_fragment("#home");
                },
                "Back to top ↑"
            }
        }
    }
}

#[component]
fn Hero(typewriter: TypewriterConfig) -> Element {
    let fx = use_context::<ScrollFx>();
    let parallax = fx.parallax_y;
    let static_role = typewriter
        .words
        .first()
        .cloned()
        .unwrap_or_else(|| "Fullstack Developer".to_string());

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "hero-stripes",
                aria_hidden: "true",
                style: "transform: translateY({parallax()}px)",
            }
            div { class: "hero-content",
                p { class: "hero-eyebrow", "Hi, my name is" }
                h1 { class: "hero-title", "Alex Berg." }
                p { class: "hero-subtitle",
                    if typewriter.enabled {
                        TypewriterText {
                            words: typewriter.words.clone(),
                            hold_ms: typewriter.hold_ms,
                        }
                    } else {
                        span { class: "hero-role", "{static_role}" }
                    }
                }
                p { class: "hero-tagline",
                    "I design and build web applications that stay fast, readable, and honest about their complexity."
                }
                div { class: "hero-actions",
                    a {
                        class: "button primary",
                        href: "#projects",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll::scroll_to_fragment("#projects");
                        },
                        "View my work"
                    }
                    a {
                        class: "button ghost",
                        href: "#contact",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll::scroll_to_fragment("#contact");
                        },
                        "Get in touch"
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { class: "section-title", "About" }
            p { class: "section-lead",
                "Ten-ish years of building for the web, the last few of them convincing "
                "compilers to do the worrying for me."
            }
            div { class: "card-grid",
                for card in ABOUT_CARDS.iter() {
                    div { key: "{card.title}", class: "detail-card",
                        h3 { "{card.title}" }
                        p { "{card.body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsSection() -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "card-grid",
                for group in SKILL_GROUPS.iter() {
                    div { key: "{group.name}", class: "skill-category",
                        h3 { "{group.name}" }
                        for skill in group.skills.iter() {
                            div { key: "{skill.name}", class: "skill",
                                div { class: "skill-meta",
                                    span { class: "skill-name", "{skill.name}" }
                                    span { class: "skill-value", "{skill.level}%" }
                                }
                                div { class: "skill-bar",
                                    div {
                                        class: "skill-progress",
                                        style: "--progress: {skill.level}%",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "card-grid",
                for project in PROJECTS.iter() {
                    article { key: "{project.name}", class: "project-card",
                        h3 { "{project.name}" }
                        p { "{project.summary}" }
                        ul { class: "project-tags",
                            for tag in project.tags.iter() {
                                li { key: "{tag}", "{tag}" }
                            }
                        }
                        a {
                            href: "{project.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "project-link",
                            "Source ↗"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CertificationsSection() -> Element {
    rsx! {
        section { id: "certifications", class: "certifications",
            h2 { class: "section-title", "Certifications" }
            div { class: "card-grid",
                for cert in CERTIFICATIONS.iter() {
                    div { key: "{cert.name}", class: "certification-card",
                        h3 { "{cert.name}" }
                        p { class: "certification-issuer", "{cert.issuer} · {cert.year}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Contact" }
            p { class: "section-lead", "The inbox is open. Say hello." }
            div { class: "card-grid",
                for channel in CONTACT_CHANNELS.iter() {
                    a {
                        key: "{channel.label}",
                        class: "contact-card",
                        href: "{channel.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        h3 { "{channel.label}" }
                        p { "{channel.value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found — Alex Berg" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            a { href: "/", "Back home" }
        }
    }
}
