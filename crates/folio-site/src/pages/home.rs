//! The single long home page.

use dioxus::prelude::*;

use crate::components::{
    scroll_to_anchor, use_section_nav, About, Contact, Experience, Gallery, Hero, Projects,
    SiteContext, Skills, Testimonials,
};

/// All home page sections in document order.
#[component]
pub fn Home() -> Element {
    let mut nav = use_context::<SiteContext>().nav;
    let go = use_section_nav();

    // A click on another route left an anchor behind; scroll once mounted.
    use_effect(move || {
        let pending = nav.write().take_pending();
        if let Some(section) = pending {
            tracing::debug!("Scrolling to pending #{}", section.anchor());
            scroll_to_anchor(section.anchor());
        }
    });

    rsx! {
        div {
            class: "home",
            Hero { on_navigate: move |section| go.call(section) }
            About {}
            Projects {}
            Skills {}
            Experience {}
            Testimonials {}
            Gallery {}
            Contact {}

            button {
                class: "scroll-top",
                "aria-label": "Scroll to top",
                onclick: move |_| {
                    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
                },
                "↑"
            }
        }
    }
}
