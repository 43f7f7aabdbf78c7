//! Log output.
//!
//! Native builds write to stderr through a `tracing-subscriber` fmt layer,
//! filtered by `RUST_LOG`. In the browser the Dioxus launcher installs its
//! own console logger, so there is nothing to do here.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "folio_site=info";

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("Logging already initialised: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
