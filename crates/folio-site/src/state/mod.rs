//! UI state machines, independent of rendering.

pub mod carousel;
pub mod contact;
pub mod gallery;
pub mod navigation;
pub mod prompt;
pub mod reveal;
pub mod theme;

pub use carousel::{Carousel, SlideDirection, TERMINAL_INTERVAL, TESTIMONIAL_INTERVAL};
pub use contact::{
    submit, BannerTicket, ContactDraft, ContactField, ContactForm, FormHandle, SubmitStatus,
    BANNER_DURATION,
};
pub use gallery::GalleryState;
pub use navigation::{
    active_section, NavState, ScrollAction, ScrollSnapshot, SectionBounds, SectionId,
    ACTIVE_LINE_OFFSET, SCROLLED_THRESHOLD,
};
pub use prompt::{resolve_command, PromptState};
pub use reveal::{IntersectionReport, RevealState, RevealTrigger};
pub use theme::{ThemeController, ThemePreference};
