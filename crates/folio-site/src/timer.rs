//! Platform sleep for UI timers.

use std::time::Duration;

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
