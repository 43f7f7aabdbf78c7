//! Server-side renders of pages and components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::document::{Document, Eval, NoOpDocument};
use dioxus::history::MemoryHistory;
use dioxus::prelude::*;
use folio_content::{CASE_STUDIES, DIABEAT, PERSONAL_INFO, PROJECTS};
use folio_site::components::{Contact, Hero, Route, SiteContext, ThemeToggle, ThemedRoot};
use folio_site::config::RelayConfig;
use folio_site::pages::CaseStudyArticle;
use folio_site::relay::{EmailJsClient, SharedRelay};
use folio_site::state::{NavState, SectionId, ThemeController};
use folio_site::storage::{MemoryStore, PreferenceStore};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn offline_relay() -> SharedRelay {
    Rc::new(EmailJsClient::new(RelayConfig {
        service_id: String::new(),
        template_id: String::new(),
        public_key: String::new(),
        api_base: "http://127.0.0.1:9".to_string(),
    }))
}

/// Document that records every script the app runs.
#[derive(Clone, Default)]
struct ScriptLog(Rc<RefCell<Vec<String>>>);

impl ScriptLog {
    fn count(&self, needle: &str) -> usize {
        self.0.borrow().iter().filter(|js| js.contains(needle)).count()
    }
}

impl Document for ScriptLog {
    fn eval(&self, js: String) -> Eval {
        self.0.borrow_mut().push(js.clone());
        NoOpDocument.eval(js)
    }
}

/// Section a click on another route left behind.
#[derive(Clone, Copy)]
struct PendingAnchor(Option<SectionId>);

fn provide_context(stored_theme: Option<&str>) {
    provide_site(stored_theme, NavState::new());
}

fn provide_site(stored_theme: Option<&str>, nav: NavState) {
    use_context_provider(|| {
        let store = Rc::new(MemoryStore::new());
        if let Some(theme) = stored_theme {
            store.save("theme", theme).unwrap();
        }
        SiteContext {
            theme: Signal::new(ThemeController::load(store, "theme")),
            nav: Signal::new(nav),
            relay: offline_relay(),
        }
    });
}

#[component]
fn RoutedSite() -> Element {
    let mut nav = NavState::new();
    if let Some(section) = use_context::<PendingAnchor>().0 {
        nav.request_scroll(section, false);
    }
    provide_site(None, nav);
    rsx! {
        ThemedRoot { Router::<Route> {} }
    }
}

/// Mounts the routed site at `path` and runs effects until it settles.
fn mount_at(path: &str, pending: Option<SectionId>) -> (VirtualDom, ScriptLog) {
    let log = ScriptLog::default();
    let mut dom = VirtualDom::new(RoutedSite)
        .with_root_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>)
        .with_root_context(Rc::new(log.clone()) as Rc<dyn Document>)
        .with_root_context(PendingAnchor(pending));
    dom.rebuild_in_place();
    settle(&mut dom);
    (dom, log)
}

fn settle(dom: &mut VirtualDom) {
    for _ in 0..4 {
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[component]
fn HeroHarness() -> Element {
    rsx! {
        Hero { on_navigate: |_| {} }
    }
}

#[component]
fn DiaBeatHarness() -> Element {
    rsx! {
        CaseStudyArticle { slug: "diabeat" }
    }
}

#[component]
fn UnknownStudyHarness() -> Element {
    rsx! {
        CaseStudyArticle { slug: "blog-podcast" }
    }
}

#[component]
fn LightThemeHarness() -> Element {
    provide_context(Some("light"));
    rsx! {
        ThemedRoot { ThemeToggle {} }
    }
}

#[component]
fn DefaultThemeHarness() -> Element {
    provide_context(None);
    rsx! {
        ThemedRoot { ThemeToggle {} }
    }
}

#[component]
fn ContactHarness() -> Element {
    provide_context(None);
    rsx! {
        Contact {}
    }
}

#[tokio::test]
async fn test_hero_shows_owner_name() {
    let html = render(HeroHarness);
    assert!(html.contains(PERSONAL_INFO.name));
    assert!(html.contains(r#"id="home""#));
    assert!(html.contains("cat about_me.txt"));
    assert!(html.contains("./current_status.sh"));
    assert!(html.contains("actively_building"));
    assert!(html.contains("terminal-cursor"));
}

#[test]
fn test_case_study_routes_parse() {
    assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    assert_eq!("/projects/diabeat".parse::<Route>().ok(), Some(Route::DiaBeat {}));
    assert_eq!("/projects/helphive".parse::<Route>().ok(), Some(Route::HelpHive {}));
    assert_eq!(
        "/projects/vr-compliance".parse::<Route>().ok(),
        Some(Route::VrCompliance {})
    );
}

#[test]
fn test_every_case_study_has_a_route() {
    for study in CASE_STUDIES {
        let route = Route::case_study(study.slug).unwrap();
        assert_eq!(route.to_string(), format!("/projects/{}", study.slug));
    }
    for project in PROJECTS {
        let path = project.case_study_path().unwrap();
        let route = path.parse::<Route>().ok();
        assert_eq!(route.map(|r| r.to_string()), Some(path));
    }
}

#[tokio::test]
async fn test_diabeat_page_title() {
    let html = render(DiaBeatHarness);
    assert!(html.contains(DIABEAT.hero.title));
    assert!(html.contains(DIABEAT.hero.tagline));
    for section in DIABEAT.sections {
        assert!(html.contains(section.title));
    }
}

#[tokio::test]
async fn test_unknown_case_study_renders_notice() {
    let html = render(UnknownStudyHarness);
    assert!(html.contains("not available"));
}

#[tokio::test]
async fn test_stored_theme_is_applied() {
    let html = render(LightThemeHarness);
    assert!(html.contains(r#"data-theme="light""#));
    assert!(html.contains("Switch to dark theme"));
}

#[tokio::test]
async fn test_default_theme_is_dark() {
    let html = render(DefaultThemeHarness);
    assert!(html.contains(r#"data-theme="dark""#));
}

#[tokio::test]
async fn test_contact_form_fields() {
    let html = render(ContactHarness);
    for name in ["name", "email", "subject", "message"] {
        assert!(html.contains(&format!(r#"name="{name}""#)), "missing field {name}");
    }
    assert!(html.contains("Send Message"));
    assert!(!html.contains("form-banner"));
}

#[tokio::test]
async fn test_root_route_renders_home() {
    let (dom, _) = mount_at("/", None);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(PERSONAL_INFO.name));
    for section in SectionId::ALL {
        assert!(html.contains(&format!(r#"id="{}""#, section.anchor())), "missing #{}", section.anchor());
    }
    assert!(html.contains("navbar"));
    assert!(!html.contains("Back to Portfolio"));
}

#[tokio::test]
async fn test_diabeat_route_renders_case_study() {
    let (dom, log) = mount_at("/projects/diabeat", None);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(DIABEAT.hero.title));
    assert!(html.contains("Back to Portfolio"));
    assert!(html.contains("navbar"));
    assert!(!html.contains(r#"id="contact""#));
    assert_eq!(log.count("scrollTo(0, 0)"), 1);
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let (dom, _) = mount_at("/blog/latest", None);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("404"));
    assert!(html.contains("/blog/latest"));
}

#[tokio::test]
async fn test_pending_anchor_scrolls_once_home_mounts() {
    let (mut dom, log) = mount_at("/", Some(SectionId::Gallery));
    assert_eq!(log.count("getElementById('gallery')"), 1);

    // Taken on first mount; further passes do not scroll again.
    settle(&mut dom);
    assert_eq!(log.count("getElementById('gallery')"), 1);
}

#[tokio::test]
async fn test_home_without_pending_anchor_stays_put() {
    let (_dom, log) = mount_at("/", None);
    assert_eq!(log.count("scrollIntoView"), 0);
}
