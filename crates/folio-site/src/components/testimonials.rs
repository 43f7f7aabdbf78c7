//! Testimonial carousel.

use dioxus::prelude::*;
use folio_content::{TESTIMONIALS, TESTIMONIALS_HEADING};

use crate::state::{Carousel, TESTIMONIAL_INTERVAL};

use super::{use_auto_advance, Reveal, SectionHeader};

/// Auto-advancing testimonial carousel.
#[component]
pub fn Testimonials() -> Element {
    let mut carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));
    use_auto_advance(carousel, TESTIMONIAL_INTERVAL);

    let (index, direction) = {
        let c = carousel.read();
        (c.index(), c.direction())
    };

    let Some(current) = TESTIMONIALS.get(index) else {
        return rsx! {};
    };
    let stars = "★".repeat(current.rating.min(5) as usize);

    rsx! {
        section {
            id: "testimonials",
            class: "section testimonials",

            SectionHeader { heading: TESTIMONIALS_HEADING }

            Reveal {
                class: "carousel",
                button {
                    class: "carousel-arrow prev",
                    "aria-label": "Previous testimonial",
                    onclick: move |_| carousel.write().retreat(),
                    "‹"
                }

                blockquote {
                    class: "testimonial {direction.css_class()}",
                    div {
                        class: "testimonial-author",
                        img { src: current.image, alt: current.name }
                        div {
                            p { class: "testimonial-name", "{current.name}" }
                            p { class: "testimonial-role", "{current.role}, {current.company}" }
                        }
                    }
                    p { class: "testimonial-rating", "{stars}" }
                    p { class: "testimonial-quote", "“{current.quote}”" }
                    a {
                        class: "testimonial-link",
                        href: current.link,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{current.link_text}"
                    }
                }

                button {
                    class: "carousel-arrow next",
                    "aria-label": "Next testimonial",
                    onclick: move |_| carousel.write().advance(),
                    "›"
                }
            }

            div {
                class: "carousel-dots",
                for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
                    button {
                        key: "{testimonial.id}",
                        class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                        "aria-label": "Show testimonial from {testimonial.name}",
                        onclick: move |_| carousel.write().jump_to(i),
                    }
                }
            }
        }
    }
}
