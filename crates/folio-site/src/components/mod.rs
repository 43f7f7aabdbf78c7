//! UI components for the portfolio site.

mod about;
mod app;
mod autoplay;
mod contact;
mod experience;
mod footer;
mod gallery;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod section_header;
mod skills;
mod testimonials;
mod theme_toggle;

pub use about::*;
pub use app::*;
pub use autoplay::*;
pub use contact::*;
pub use experience::*;
pub use footer::*;
pub use gallery::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
pub use reveal::*;
pub use section_header::*;
pub use skills::*;
pub use testimonials::*;
pub use theme_toggle::*;
