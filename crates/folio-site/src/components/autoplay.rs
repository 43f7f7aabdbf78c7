//! Timed carousel advance.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::Carousel;
use crate::timer;

/// Advances `carousel` every `interval`. The pending tick is keyed on the
/// carousel generation, so any manual move restarts the countdown.
pub fn use_auto_advance(mut carousel: Signal<Carousel>, interval: Duration) {
    use_resource(move || async move {
        let generation = carousel.read().generation();
        if carousel.peek().len() < 2 {
            return;
        }
        timer::sleep(interval).await;
        tracing::trace!(generation, "Auto-advance");
        carousel.write().advance();
    });
}
