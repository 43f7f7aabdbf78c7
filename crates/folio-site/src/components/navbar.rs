//! Fixed navigation bar with the terminal prompt.

use dioxus::prelude::*;
use folio_content::PERSONAL_INFO;

use crate::state::{PromptState, ScrollSnapshot, SectionId};

use super::{use_section_nav, SiteContext};

/// Page script that reports scroll position and section bounds on every
/// scroll event.
fn scroll_report_script() -> String {
    let ids = SectionId::ALL
        .iter()
        .map(|s| format!("'{}'", s.anchor()))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"
        const ids = [{ids}];
        const report = () => dioxus.send({{
            scroll_y: window.scrollY,
            sections: ids.map((id) => {{
                const el = document.getElementById(id);
                if (!el) return null;
                const r = el.getBoundingClientRect();
                return {{ top: r.top, bottom: r.bottom }};
            }}),
        }});
        window.addEventListener('scroll', report, {{ passive: true }});
        report();
        "#
    )
}

/// Fixed top bar: terminal prompt, section links and the mobile menu.
#[component]
pub fn Navbar() -> Element {
    let mut nav = use_context::<SiteContext>().nav;
    let go = use_section_nav();
    let mut prompt = use_signal(PromptState::default);

    // Scroll tracking lives as long as the navbar, which spans every route.
    use_future(move || async move {
        let mut eval = document::eval(&scroll_report_script());
        loop {
            match eval.recv::<ScrollSnapshot>().await {
                Ok(snapshot) => {
                    let mut next = nav.peek().clone();
                    next.apply_snapshot(&snapshot);
                    if next != *nav.peek() {
                        nav.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!("Scroll tracking stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    let (active, scrolled, menu_open) = {
        let state = nav.read();
        (state.active, state.scrolled, state.menu_open)
    };
    let nav_class = if scrolled { "navbar scrolled" } else { "navbar" };

    let user = PERSONAL_INFO.prompt_user();
    let initials = PERSONAL_INFO.initials();
    let editing = prompt.read().clone();

    rsx! {
        nav {
            class: "{nav_class}",

            div {
                class: "navbar-inner",

                // Terminal prompt
                div {
                    class: "navbar-prompt",
                    button {
                        class: "prompt-initials",
                        onclick: move |_| go.call(SectionId::Home),
                        span { "{initials}" }
                        span { class: "prompt-cursor", "_" }
                    }
                    div {
                        class: "prompt-path",
                        button {
                            class: if active == SectionId::Home { "prompt-user active" } else { "prompt-user" },
                            onclick: move |_| {
                                if !prompt.read().is_editing() {
                                    go.call(SectionId::Home);
                                }
                            },
                            "{user}@portfolio"
                        }
                        span { class: "prompt-sep", "/" }
                        {
                            match editing {
                                PromptState::Idle => rsx! {
                                    button {
                                        class: "prompt-segment",
                                        title: "Click to edit path",
                                        onclick: move |_| prompt.write().start(active),
                                        "{active.terminal_path()}"
                                    }
                                },
                                PromptState::Editing(text) => rsx! {
                                    input {
                                        class: "prompt-input",
                                        r#type: "text",
                                        value: "{text}",
                                        autofocus: true,
                                        placeholder: "projects | about | skills...",
                                        oninput: move |evt| prompt.write().input(evt.value()),
                                        onkeydown: move |evt| match evt.key() {
                                            Key::Enter => {
                                                let target = prompt.write().submit();
                                                if let Some(target) = target {
                                                    go.call(target);
                                                }
                                            }
                                            Key::Escape => prompt.write().cancel(),
                                            _ => {}
                                        },
                                        onblur: move |_| prompt.write().cancel(),
                                    }
                                },
                            }
                        }
                        span { class: "prompt-dollar", "$" }
                    }
                }

                // Desktop links
                ul {
                    class: "navbar-links",
                    for section in SectionId::ALL {
                        li {
                            key: "{section.anchor()}",
                            button {
                                class: if section == active { "nav-link active" } else { "nav-link" },
                                onclick: move |_| go.call(section),
                                "{section.label()}"
                            }
                        }
                    }
                }

                button {
                    class: "navbar-menu-toggle",
                    "aria-label": "Toggle menu",
                    onclick: move |_| nav.write().toggle_menu(),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                ul {
                    class: "navbar-mobile",
                    for section in SectionId::ALL {
                        li {
                            key: "mobile-{section.anchor()}",
                            button {
                                class: if section == active { "nav-link active" } else { "nav-link" },
                                onclick: move |_| go.call(section),
                                "{section.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
