//! Gallery category filter and lightbox.

use folio_content::{filter_photos, GalleryPhoto, ALL_CATEGORIES};

/// Selected category plus the lightbox position within the filtered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    filter: String,
    lightbox: Option<usize>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            filter: ALL_CATEGORIES.to_string(),
            lightbox: None,
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Photos visible under the current filter, in original order.
    pub fn photos<'a>(&self, all: &'a [GalleryPhoto]) -> Vec<&'a GalleryPhoto> {
        filter_photos(all, &self.filter)
    }

    /// Switches category. An open lightbox is closed, since its position
    /// refers to the old list.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            tracing::debug!("Gallery filter: {}", filter);
            self.filter = filter;
            self.lightbox = None;
        }
    }

    /// Opens the lightbox on the photo with `photo_id`, if it is visible.
    pub fn open(&mut self, all: &[GalleryPhoto], photo_id: u32) {
        self.lightbox = self.photos(all).iter().position(|p| p.id == photo_id);
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Position of the open photo within the filtered list.
    pub fn position(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn next(&mut self, all: &[GalleryPhoto]) {
        let len = self.photos(all).len();
        if let Some(i) = self.lightbox {
            self.lightbox = (len > 0).then(|| (i + 1) % len);
        }
    }

    pub fn prev(&mut self, all: &[GalleryPhoto]) {
        let len = self.photos(all).len();
        if let Some(i) = self.lightbox {
            self.lightbox = (len > 0).then(|| (i + len - 1) % len);
        }
    }

    /// The photo shown in the lightbox.
    pub fn selected<'a>(&self, all: &'a [GalleryPhoto]) -> Option<&'a GalleryPhoto> {
        self.lightbox.and_then(|i| self.photos(all).get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use folio_content::GALLERY;

    use super::*;

    #[test]
    fn test_navigation_wraps_within_filter() {
        let mut state = GalleryState::new();
        state.set_filter("Events");
        state.open(GALLERY.photos, 7);
        assert_eq!(state.position(), Some(1));

        state.next(GALLERY.photos);
        assert_eq!(state.selected(GALLERY.photos).map(|p| p.id), Some(1));

        state.prev(GALLERY.photos);
        assert_eq!(state.selected(GALLERY.photos).map(|p| p.id), Some(7));
        state.prev(GALLERY.photos);
        assert_eq!(state.selected(GALLERY.photos).map(|p| p.id), Some(1));
    }

    #[test]
    fn test_wrap_over_full_list() {
        let mut state = GalleryState::new();
        let last = GALLERY.photos[GALLERY.photos.len() - 1].id;
        state.open(GALLERY.photos, last);
        state.next(GALLERY.photos);
        assert_eq!(state.position(), Some(0));
        state.prev(GALLERY.photos);
        assert_eq!(state.selected(GALLERY.photos).map(|p| p.id), Some(last));
    }

    #[test]
    fn test_filter_change_closes_lightbox() {
        let mut state = GalleryState::new();
        state.open(GALLERY.photos, 3);
        assert!(state.is_open());
        state.set_filter("Work");
        assert!(!state.is_open());
        assert_eq!(state.photos(GALLERY.photos).len(), 2);
    }

    #[test]
    fn test_same_filter_keeps_lightbox() {
        let mut state = GalleryState::new();
        state.open(GALLERY.photos, 2);
        state.set_filter(ALL_CATEGORIES);
        assert_eq!(state.position(), Some(1));
    }

    #[test]
    fn test_hidden_photo_does_not_open() {
        let mut state = GalleryState::new();
        state.set_filter("Team");
        state.open(GALLERY.photos, 1);
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_and_idle_navigation() {
        let mut state = GalleryState::new();
        state.next(GALLERY.photos);
        assert!(!state.is_open());
        state.open(GALLERY.photos, 4);
        state.close();
        assert_eq!(state.selected(GALLERY.photos), None);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut state = GalleryState::new();
        state.set_filter("Holidays");
        assert!(state.photos(GALLERY.photos).is_empty());
    }
}
