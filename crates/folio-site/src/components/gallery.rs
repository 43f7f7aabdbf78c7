//! Photo grid with category chips and a lightbox.

use dioxus::prelude::*;
use folio_content::{categories, GALLERY};

use crate::state::{GalleryState, SectionId};

use super::{Reveal, SectionHeader};

/// Photo grid with category filters and a lightbox.
#[component]
pub fn Gallery() -> Element {
    let mut gallery = use_signal(GalleryState::new);
    let chips = categories(GALLERY.photos);

    let state = gallery.read().clone();
    let photos = state.photos(GALLERY.photos);
    let counter = state
        .position()
        .map(|i| format!("{} / {}", i + 1, photos.len()));

    rsx! {
        section {
            id: SectionId::Gallery.anchor(),
            class: "section gallery",

            SectionHeader { heading: GALLERY.heading }

            div {
                class: "gallery-filters",
                for chip in chips {
                    button {
                        key: "{chip}",
                        class: if chip == state.filter() { "chip active" } else { "chip" },
                        onclick: move |_| gallery.write().set_filter(chip),
                        "{chip}"
                    }
                }
            }

            div {
                class: "gallery-grid",
                if photos.is_empty() {
                    p { class: "gallery-empty", "No photos in this category." }
                }
                for photo in photos.iter().copied() {
                    Reveal {
                        key: "{photo.id}",
                        class: "gallery-item",
                        button {
                            class: "gallery-thumb",
                            onclick: move |_| gallery.write().open(GALLERY.photos, photo.id),
                            img { src: photo.thumbnail, alt: photo.caption, loading: "lazy" }
                            span { class: "gallery-caption", "{photo.caption}" }
                        }
                    }
                }
            }

            if let (Some(photo), Some(counter)) = (state.selected(GALLERY.photos), counter) {
                div {
                    class: "lightbox",
                    onclick: move |_| gallery.write().close(),
                    div {
                        class: "lightbox-content",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            class: "lightbox-close",
                            "aria-label": "Close",
                            onclick: move |_| gallery.write().close(),
                            "✕"
                        }
                        button {
                            class: "lightbox-arrow prev",
                            "aria-label": "Previous photo",
                            onclick: move |_| gallery.write().prev(GALLERY.photos),
                            "‹"
                        }
                        img { src: photo.url, alt: photo.caption }
                        button {
                            class: "lightbox-arrow next",
                            "aria-label": "Next photo",
                            onclick: move |_| gallery.write().next(GALLERY.photos),
                            "›"
                        }
                        div {
                            class: "lightbox-footer",
                            p { class: "lightbox-caption", "{photo.caption}" }
                            span { class: "lightbox-category", "{photo.category}" }
                            span { class: "lightbox-position", "{counter}" }
                        }
                    }
                }
            }
        }
    }
}
