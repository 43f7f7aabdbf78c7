//! Case-study pages, one route per project.

use dioxus::prelude::*;
use folio_content::{case_study, project};

use crate::components::{Reveal, Route};

/// Body of a case study: hero, metrics and narrative sections. Renders a
/// short notice for an unknown slug.
#[component]
pub fn CaseStudyArticle(#[props(into)] slug: String) -> Element {
    let Some(study) = case_study(&slug) else {
        tracing::warn!("No case study for {}", slug);
        return rsx! {
            p { class: "case-missing", "This case study is not available." }
        };
    };
    let tags = project(study.project_id).map(|p| p.tags).unwrap_or_default();

    rsx! {
        article {
            class: "case-study",

            header {
                class: "case-hero card",
                h1 { class: "case-title", "{study.hero.title}" }
                p { class: "case-tagline", "{study.hero.tagline}" }
                blockquote { class: "case-overview", "{study.overview}" }
                div {
                    class: "case-meta",
                    span { class: "case-role", "Role: {study.hero.role}" }
                    span { "•" }
                    span { "{study.hero.timeline}" }
                    if let Some(team) = study.hero.team {
                        span { "•" }
                        span { "{team}" }
                    }
                }
                if !tags.is_empty() {
                    ul {
                        class: "chip-list",
                        for tag in tags {
                            li { key: "{tag}", class: "chip", "{tag}" }
                        }
                    }
                }
                if let Some(url) = study.prototype_url {
                    a {
                        class: "btn btn-primary case-prototype",
                        href: url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Try Live Prototype"
                    }
                }
            }

            if !study.metrics.is_empty() {
                Reveal {
                    class: "case-metrics card",
                    h2 { "Key Results" }
                    div {
                        class: "metrics-grid",
                        for metric in study.metrics {
                            div {
                                key: "{metric.label}",
                                class: "metric",
                                span { class: "metric-value", "{metric.value}" }
                                span { class: "metric-label", "{metric.label}" }
                            }
                        }
                    }
                }
            }

            for section in study.sections {
                Reveal {
                    key: "{section.title}",
                    class: "case-section card",
                    h2 { "{section.title}" }
                    if let Some(body) = section.body {
                        p { "{body}" }
                    }
                    if !section.bullets.is_empty() {
                        ul {
                            for bullet in section.bullets {
                                li { key: "{bullet}", "{bullet}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Routed case-study page with the back control.
#[component]
pub fn CaseStudyPage(#[props(into)] slug: String) -> Element {
    let navigator = use_navigator();

    // Case studies open at the top, not where the home page was scrolled.
    use_effect(|| {
        document::eval("window.scrollTo(0, 0);");
    });

    rsx! {
        div {
            class: "case-page",
            button {
                class: "back-button",
                onclick: move |_| {
                    navigator.push(Route::Home {});
                },
                "← Back to Portfolio"
            }
            CaseStudyArticle { slug }
        }
    }
}

/// `/projects/helphive`
#[component]
pub fn HelpHive() -> Element {
    rsx! { CaseStudyPage { slug: "helphive" } }
}

/// `/projects/diabeat`
#[component]
pub fn DiaBeat() -> Element {
    rsx! { CaseStudyPage { slug: "diabeat" } }
}

/// `/projects/gradplanner`
#[component]
pub fn GradPlanner() -> Element {
    rsx! { CaseStudyPage { slug: "gradplanner" } }
}

/// `/projects/vr-compliance`
#[component]
pub fn VrCompliance() -> Element {
    rsx! { CaseStudyPage { slug: "vr-compliance" } }
}

/// `/projects/airbnb`
#[component]
pub fn Airbnb() -> Element {
    rsx! { CaseStudyPage { slug: "airbnb" } }
}
