//! Cyclic index for the testimonial carousel and the hero terminal.
//!
//! Every index change bumps `generation`. The auto-advance task is keyed on
//! it, so any change, manual or timed, cancels the pending tick and starts
//! a fresh interval.

use std::time::Duration;

/// Interval between automatic testimonial advances.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_secs(10);

/// Interval between hero terminal scenarios.
pub const TERMINAL_INTERVAL: Duration = Duration::from_secs(5);

/// Direction the next slide enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

impl SlideDirection {
    /// Returns the CSS class selecting the slide-in animation.
    pub fn css_class(&self) -> &'static str {
        match self {
            SlideDirection::Forward => "slide-forward",
            SlideDirection::Backward => "slide-backward",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    direction: SlideDirection,
    generation: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves to `(index + 1) mod len`.
    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.set((self.index + 1) % self.len, SlideDirection::Forward);
    }

    /// Moves to `(index - 1 + len) mod len`.
    pub fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        self.set((self.index + self.len - 1) % self.len, SlideDirection::Backward);
    }

    /// Jumps to `target mod len`, sliding forward when the target lies
    /// after the current index.
    pub fn jump_to(&mut self, target: usize) {
        if self.is_empty() {
            return;
        }
        let target = target % self.len;
        let direction = if target > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.set(target, direction);
    }

    fn set(&mut self, index: usize, direction: SlideDirection) {
        self.index = index;
        self.direction = direction;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_retreat_wrap_for_every_index() {
        let len = 7;
        for i in 0..len {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(i);

            let mut forward = carousel;
            forward.advance();
            assert_eq!(forward.index(), (i + 1) % len);
            assert_eq!(forward.direction(), SlideDirection::Forward);

            let mut backward = carousel;
            backward.retreat();
            assert_eq!(backward.index(), (i + len - 1) % len);
            assert_eq!(backward.direction(), SlideDirection::Backward);
        }
    }

    #[test]
    fn test_jump_direction() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(3);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
        carousel.jump_to(1);
        assert_eq!(carousel.direction(), SlideDirection::Backward);
    }

    #[test]
    fn test_jump_wraps_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_every_change_bumps_generation() {
        let mut carousel = Carousel::new(3);
        let start = carousel.generation();
        carousel.advance();
        carousel.retreat();
        carousel.jump_to(2);
        assert_eq!(carousel.generation(), start + 3);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        carousel.jump_to(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.generation(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        carousel.retreat();
        assert_eq!(carousel.index(), 0);
    }
}
