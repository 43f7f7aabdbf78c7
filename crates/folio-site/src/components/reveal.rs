//! Fade-in wrapper driven by viewport intersection.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use crate::state::{IntersectionReport, RevealTrigger};

static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Page script that watches the element with `id` and reports every
/// crossing of zero and of `threshold`.
fn observer_script(id: &str, threshold: f64, once: bool) -> String {
    format!(
        r#"
        const el = document.getElementById('{id}');
        if (el) {{
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    dioxus.send({{ intersecting: entry.isIntersecting, ratio: entry.intersectionRatio }});
                    if ({once} && entry.isIntersecting && entry.intersectionRatio >= {threshold}) {{
                        observer.disconnect();
                    }}
                }}
            }}, {{ threshold: [0, {threshold}] }});
            observer.observe(el);
        }}
        "#
    )
}

/// Renders its children hidden until enough of the wrapper scrolls into
/// view.
#[component]
pub fn Reveal(
    #[props(default, into)] class: String,
    #[props(default = 0.1)] threshold: f64,
    #[props(default = true)] once: bool,
    children: Element,
) -> Element {
    let mut trigger = use_signal(|| RevealTrigger::new(threshold, once));
    let id = use_hook(|| format!("reveal-{}", NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed)));
    let state = trigger.read().state();
    let observed = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "reveal {state.css_class()} {class}",
            onmounted: move |_| {
                let script = {
                    let current = trigger.peek();
                    observer_script(&observed, current.threshold, current.once)
                };
                spawn(async move {
                    let mut eval = document::eval(&script);
                    loop {
                        match eval.recv::<IntersectionReport>().await {
                            Ok(report) => {
                                let mut next = *trigger.peek();
                                if next.observe_report(report) != trigger.peek().state() {
                                    trigger.set(next);
                                }
                                if next.is_settled() {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::debug!("No intersection observer, showing content: {:?}", e);
                                trigger.write().reveal();
                                break;
                            }
                        }
                    }
                });
            },
            {children}
        }
    }
}
