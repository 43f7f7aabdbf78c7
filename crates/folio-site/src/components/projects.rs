//! Project cards. The first project gets the wide featured layout.

use dioxus::prelude::*;
use folio_content::{Project, PROJECTS, PROJECTS_HEADING};

use crate::state::SectionId;

use super::{Reveal, Route, SectionHeader};

/// Project grid with the first project featured.
#[component]
pub fn Projects() -> Element {
    let (featured, rest) = match PROJECTS.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, &[][..]),
    };

    rsx! {
        section {
            id: SectionId::Projects.anchor(),
            class: "section projects",

            SectionHeader { heading: PROJECTS_HEADING }

            if let Some(project) = featured {
                Reveal {
                    class: "project-featured",
                    ProjectCard { project: *project, featured: true }
                }
            }

            div {
                class: "projects-grid",
                for project in rest {
                    Reveal {
                        key: "{project.id}",
                        ProjectCard { project: *project, featured: false }
                    }
                }
            }
        }
    }
}

/// Card linking to a project's case study and external links.
#[component]
fn ProjectCard(project: Project, featured: bool) -> Element {
    let route = project.case_study.and_then(Route::case_study);
    let card_class = if featured { "project-card featured" } else { "project-card" };

    rsx! {
        article {
            class: "{card_class}",
            div {
                class: "project-image",
                img { src: project.image, alt: project.title, loading: "lazy" }
                span { class: "project-category", "{project.category}" }
            }
            div {
                class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p {
                    class: "project-description",
                    if featured { "{project.long_description}" } else { "{project.description}" }
                }
                if featured {
                    ul {
                        class: "project-highlights",
                        for highlight in project.highlights {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }
                ul {
                    class: "chip-list",
                    for tag in project.tags {
                        li { key: "{tag}", class: "chip", "{tag}" }
                    }
                }
                div {
                    class: "project-links",
                    if let Some(route) = route {
                        Link { class: "btn btn-primary", to: route, "View Case Study" }
                    }
                    if let Some(url) = project.live_demo {
                        a {
                            class: "btn btn-secondary",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                        }
                    }
                    if let Some(url) = project.source_code {
                        a {
                            class: "btn btn-ghost",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Source"
                        }
                    }
                }
            }
        }
    }
}
