//! Shared section heading.

use dioxus::prelude::*;
use folio_content::SectionHeading;

/// Title and subtitle above a home page section.
#[component]
pub fn SectionHeader(heading: SectionHeading) -> Element {
    rsx! {
        div {
            class: "section-header",
            h2 { class: "section-title", "{heading.title}" }
            p { class: "section-subtitle", "{heading.subtitle}" }
        }
    }
}
