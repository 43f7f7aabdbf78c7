//! Page footer shared by every route.

use dioxus::prelude::*;
use folio_content::{LEGAL_LINKS, PERSONAL_INFO, SOCIAL_LINKS};

use crate::state::SectionId;
use crate::timer;

use super::use_section_nav;

/// Site footer with quick links and the copyright line.
#[component]
pub fn Footer() -> Element {
    let go = use_section_nav();
    let year = timer::current_year();
    let user = PERSONAL_INFO.prompt_user();
    let initials = PERSONAL_INFO.initials();

    rsx! {
        footer {
            class: "footer",

            div {
                class: "footer-grid",

                div {
                    class: "footer-brand",
                    div {
                        class: "footer-prompt",
                        span { class: "prompt-initials", "{initials}" }
                        span { "{user}@portfolio:" }
                        span { class: "prompt-segment", "/contact" }
                        span { "$" }
                    }
                    p { "Building AI-powered products that create measurable impact." }
                }

                div {
                    class: "footer-links",
                    h3 { "Quick Links" }
                    for section in SectionId::ALL {
                        button {
                            key: "{section.anchor()}",
                            class: "footer-link",
                            onclick: move |_| go.call(section),
                            "{section.label()}"
                        }
                    }
                }

                div {
                    class: "footer-social",
                    h3 { "Connect With Me" }
                    for link in SOCIAL_LINKS {
                        a {
                            key: "{link.label}",
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": link.label,
                            "{link.label}"
                        }
                    }
                    p { "Let's build something amazing together!" }
                }
            }

            div {
                class: "footer-bottom",
                p { "© {year} {PERSONAL_INFO.name}. All rights reserved." }
                nav {
                    class: "footer-legal",
                    for (label, href) in LEGAL_LINKS {
                        a { key: "{label}", href: *href, "{label}" }
                    }
                }
            }
        }
    }
}
