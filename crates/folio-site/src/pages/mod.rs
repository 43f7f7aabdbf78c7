//! Routed pages.

mod case_study;
mod home;

pub use case_study::*;
pub use home::*;
