//! Landing section with the rotating terminal window.

use dioxus::prelude::*;
use folio_content::{HERO, PERSONAL_INFO, SOCIAL_LINKS, TERMINAL_SCENARIOS};

use crate::state::{Carousel, SectionId, TERMINAL_INTERVAL};

use super::use_auto_advance;

/// Landing section. `on_navigate` fires for the call-to-action buttons.
#[component]
pub fn Hero(on_navigate: EventHandler<SectionId>) -> Element {
    let scenarios = use_signal(|| Carousel::new(TERMINAL_SCENARIOS.len()));
    use_auto_advance(scenarios, TERMINAL_INTERVAL);

    let index = scenarios.read().index();
    let role = HERO
        .roles
        .get(index % HERO.roles.len().max(1))
        .copied()
        .unwrap_or_default();
    let user = PERSONAL_INFO.prompt_user();

    rsx! {
        section {
            id: SectionId::Home.anchor(),
            class: "hero",

            div {
                class: "hero-text",
                p { class: "hero-greeting", "{HERO.greeting}" }
                h1 { class: "hero-name", "{PERSONAL_INFO.name}" }
                h2 { class: "hero-role", "{role}" }
                p { class: "hero-headline", "{HERO.headline}" }
                p { class: "hero-subheadline", "{HERO.subheadline}" }

                div {
                    class: "hero-actions",
                    for cta in HERO.calls_to_action {
                        button {
                            key: "{cta.anchor}",
                            class: if cta.primary { "btn btn-primary" } else { "btn btn-secondary" },
                            onclick: move |_| {
                                if let Some(section) = SectionId::from_anchor(cta.anchor) {
                                    on_navigate.call(section);
                                }
                            },
                            "{cta.text}"
                        }
                    }
                    a {
                        class: "btn btn-ghost",
                        href: PERSONAL_INFO.resume_url,
                        download: PERSONAL_INFO.resume_file_name,
                        "Download Résumé"
                    }
                }

                div {
                    class: "hero-social",
                    for link in SOCIAL_LINKS {
                        a {
                            key: "{link.label}",
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }

            if let Some(scenario) = TERMINAL_SCENARIOS.get(index) {
                div {
                    class: "terminal",
                    div {
                        class: "terminal-bar",
                        span { class: "terminal-dot red" }
                        span { class: "terminal-dot yellow" }
                        span { class: "terminal-dot green" }
                        span { class: "terminal-title", "{user}@portfolio: ~" }
                    }
                    div {
                        class: "terminal-body",
                        p {
                            class: "terminal-command",
                            span { class: "terminal-prompt", "$ " }
                            "{scenario.command}"
                        }
                        for (i, line) in scenario.output.iter().enumerate() {
                            p { key: "{i}", class: "terminal-line", "{line}" }
                        }
                        if let Some(follow_up) = scenario.follow_up {
                            p {
                                class: "terminal-command",
                                span { class: "terminal-prompt", "$ " }
                                "{follow_up.command}"
                            }
                            for row in follow_up.rows {
                                p {
                                    key: "{row.label}",
                                    class: "terminal-status",
                                    span { class: "terminal-status-icon", "{row.icon}" }
                                    " {row.label} "
                                    span { class: "terminal-status-value", "{row.value}" }
                                    if row.cursor {
                                        span { class: "terminal-cursor", "_" }
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
