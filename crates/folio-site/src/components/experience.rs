//! Experience and education timeline.

use dioxus::prelude::*;
use folio_content::CAREER;

use crate::state::SectionId;

use super::{Reveal, SectionHeader};

/// Work timeline followed by education and certifications.
#[component]
pub fn Experience() -> Element {
    rsx! {
        section {
            id: SectionId::Experience.anchor(),
            class: "section experience",

            SectionHeader { heading: CAREER.heading }

            ol {
                class: "timeline",
                for job in CAREER.experiences {
                    li {
                        key: "{job.id}",
                        class: "timeline-item",
                        Reveal {
                            div {
                                class: "timeline-card",
                                div {
                                    class: "timeline-head",
                                    h3 { "{job.role}" }
                                    span { class: "timeline-duration", "{job.duration}" }
                                }
                                p { class: "timeline-company", "{job.company} · {job.location}" }
                                p { "{job.description}" }
                                ul {
                                    class: "timeline-achievements",
                                    for achievement in job.achievements {
                                        li { key: "{achievement}", "{achievement}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            SectionHeader { heading: CAREER.education_heading }

            div {
                class: "education-grid",
                for degree in CAREER.education {
                    Reveal {
                        key: "{degree.id}",
                        class: "education-card",
                        h3 { "{degree.degree}" }
                        p { class: "education-institution", "{degree.institution}" }
                        p { class: "education-meta", "{degree.duration} · GPA {degree.gpa}" }
                        p { "{degree.description}" }
                    }
                }
            }

            if !CAREER.certifications.is_empty() {
                div {
                    class: "certifications",
                    h3 { "Certifications" }
                    ul {
                        for cert in CAREER.certifications {
                            li {
                                key: "{cert.id}",
                                strong { "{cert.name}" }
                                " · {cert.issuer} · {cert.date}"
                            }
                        }
                    }
                }
            }
        }
    }
}
