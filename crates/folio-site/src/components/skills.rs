//! Skills section.

use dioxus::prelude::*;
use folio_content::{SKILLS, SKILLS_HEADING};

use crate::state::SectionId;

use super::{Reveal, SectionHeader};

/// Skill categories rendered as proficiency bars.
#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: SectionId::Skills.anchor(),
            class: "section skills",

            SectionHeader { heading: SKILLS_HEADING }

            div {
                class: "skills-grid",
                for category in SKILLS {
                    Reveal {
                        key: "{category.name}",
                        class: "skill-category",
                        h3 { "{category.name}" }
                        for skill in category.skills {
                            div {
                                key: "{skill.name}",
                                class: "skill",
                                div {
                                    class: "skill-label",
                                    span { "{skill.icon} {skill.name}" }
                                    span { class: "skill-level", "{skill.level}%" }
                                }
                                div {
                                    class: "skill-bar",
                                    div {
                                        class: "skill-bar-fill",
                                        style: "width: {skill.level.min(100)}%",
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
