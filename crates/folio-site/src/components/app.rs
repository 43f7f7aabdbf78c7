//! Root component, routes and shared context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::pages::{Airbnb, DiaBeat, GradPlanner, HelpHive, Home, VrCompliance};
use crate::relay::{EmailJsClient, SharedRelay};
use crate::state::{NavState, SectionId, ScrollAction, ThemeController};
use crate::storage::platform_store;

use super::{Footer, Navbar, ThemeToggle};

/// Stylesheet embedded at compile time.
const STYLES_CSS: &str = include_str!("../../assets/styles.css");

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500;600&display=swap";

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/projects/helphive")]
        HelpHive {},
        #[route("/projects/diabeat")]
        DiaBeat {},
        #[route("/projects/gradplanner")]
        GradPlanner {},
        #[route("/projects/vr-compliance")]
        VrCompliance {},
        #[route("/projects/airbnb")]
        Airbnb {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route of the case-study page with `slug`.
    pub fn case_study(slug: &str) -> Option<Self> {
        let route = match slug {
            "helphive" => Route::HelpHive {},
            "diabeat" => Route::DiaBeat {},
            "gradplanner" => Route::GradPlanner {},
            "vr-compliance" => Route::VrCompliance {},
            "airbnb" => Route::Airbnb {},
            _ => return None,
        };
        Some(route)
    }
}

/// State shared by every page.
#[derive(Clone)]
pub struct SiteContext {
    pub theme: Signal<ThemeController>,
    pub nav: Signal<NavState>,
    pub relay: SharedRelay,
}

/// Root application component.
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = SiteConfig::default();
        if !config.relay.is_configured() {
            tracing::warn!("Email relay credentials missing; contact form will fail");
        }
        let relay: SharedRelay = Rc::new(EmailJsClient::new(config.relay));

        SiteContext {
            theme: Signal::new(ThemeController::load(platform_store(), config.theme_key)),
            nav: Signal::new(NavState::new()),
            relay,
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONTS_URL }
        style { {STYLES_CSS} }
        ThemedRoot {
            Router::<Route> {}
        }
    }
}

/// Applies the current theme to everything below it.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let ctx = use_context::<SiteContext>();
    let theme = ctx.theme.read().current();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Navbar and footer around every route.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navbar {}
        ThemeToggle {}
        main {
            class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

/// Fallback for paths no route matches.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        section {
            class: "not-found",
            h1 { "404" }
            p { class: "not-found-path", "/{path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to Portfolio" }
        }
    }
}

/// Scrolls the page so the element with `anchor` is at the top. Nothing
/// happens when the element is missing.
pub fn scroll_to_anchor(anchor: &str) {
    let js = format!(
        "document.getElementById('{anchor}')?.scrollIntoView({{behavior:'smooth'}});"
    );
    document::eval(&js);
}

/// Returns a callback that takes the visitor to a home page section from
/// any route.
pub fn use_section_nav() -> Callback<SectionId> {
    let mut nav = use_context::<SiteContext>().nav;
    let route = use_route::<Route>();
    let navigator = use_navigator();

    use_callback(move |target: SectionId| {
        let on_root = matches!(route, Route::Home {});
        match nav.write().request_scroll(target, on_root) {
            ScrollAction::ScrollNow(section) => scroll_to_anchor(section.anchor()),
            ScrollAction::NavigateHome => {
                tracing::debug!("Returning home for #{}", target.anchor());
                navigator.push(Route::Home {});
            }
        }
    })
}
