//! About section.

use dioxus::prelude::*;
use folio_content::{ABOUT, PERSONAL_INFO};

use crate::state::SectionId;
use crate::timer;

use super::{Reveal, SectionHeader};

/// About section: intro, highlight stats and interests.
#[component]
pub fn About() -> Element {
    let intro = ABOUT.intro(timer::current_year());

    rsx! {
        section {
            id: SectionId::About.anchor(),
            class: "section about",

            SectionHeader { heading: ABOUT.heading }

            div {
                class: "about-grid",
                Reveal {
                    class: "about-text",
                    p { class: "about-intro", "{intro}" }
                    for (i, paragraph) in ABOUT.paragraphs.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                    p { class: "about-location", "📍 {PERSONAL_INFO.location}" }
                }

                Reveal {
                    class: "about-side",
                    div {
                        class: "about-highlights",
                        for highlight in ABOUT.highlights {
                            div {
                                key: "{highlight.label}",
                                class: "highlight-card",
                                span { class: "highlight-number", "{highlight.number}" }
                                span { class: "highlight-label", "{highlight.label}" }
                            }
                        }
                    }
                    h3 { "Interests" }
                    ul {
                        class: "chip-list",
                        for interest in ABOUT.interests {
                            li { key: "{interest}", class: "chip", "{interest}" }
                        }
                    }
                }
            }
        }
    }
}
