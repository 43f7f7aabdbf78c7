//! Personal portfolio site.
//!
//! A single-page Dioxus application: a long home page cut into named
//! sections plus one case-study page per project. Content comes from
//! `folio-content`; the only outbound call is the contact form's request to
//! the hosted email relay.

pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod relay;
pub mod state;
pub mod storage;
pub mod timer;
