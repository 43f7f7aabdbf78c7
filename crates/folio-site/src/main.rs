//! Entry point for the portfolio site.
//!
//! Builds for the browser by default. With the `desktop` feature the same
//! app runs in a native window.

use folio_site::components::App;

fn main() {
    folio_site::logging::init();
    tracing::info!("Starting portfolio site");

    #[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_window(
                    WindowBuilder::new()
                        .with_title("Aashutosh Agrawal - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                ),
            )
            .launch(App);
    }

    #[cfg(not(all(feature = "desktop", not(target_arch = "wasm32"))))]
    dioxus::launch(App);
}
