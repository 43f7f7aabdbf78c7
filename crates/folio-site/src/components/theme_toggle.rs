//! Floating light/dark switch.

use dioxus::prelude::*;

use crate::state::ThemePreference;

use super::SiteContext;

/// Floating button that flips between dark and light themes.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<SiteContext>().theme;
    let current = theme.read().current();
    let icon = match current {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "☾",
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "{current.toggle_label()}",
            "aria-label": "{current.toggle_label()}",
            onclick: move |_| {
                let next = theme.write().toggle();
                tracing::info!("Theme switched to {}", next);
            },
            "{icon}"
        }
    }
}
