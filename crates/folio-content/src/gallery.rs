//! Photo gallery entries and category filtering.

use crate::profile::SectionHeading;

/// Filter value that selects every photo.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryPhoto {
    pub id: u32,
    pub url: &'static str,
    pub thumbnail: &'static str,
    pub caption: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    pub heading: SectionHeading,
    pub photos: &'static [GalleryPhoto],
}

pub static GALLERY: Gallery = Gallery {
    heading: SectionHeading {
        title: "Photo Gallery",
        subtitle: "Moments from my journey",
    },
    photos: &[
        GalleryPhoto {
            id: 1,
            url: "/gallery/photo1.jpg",
            thumbnail: "/gallery/thumb1.jpg",
            caption: "Speaking at Product Management Conference 2024",
            category: "Events",
        },
        GalleryPhoto {
            id: 2,
            url: "/gallery/photo2.jpg",
            thumbnail: "/gallery/thumb2.jpg",
            caption: "Team celebration after Marcus launch",
            category: "Team",
        },
        GalleryPhoto {
            id: 3,
            url: "/gallery/photo3.jpg",
            thumbnail: "/gallery/thumb3.jpg",
            caption: "Working on Platform McKinsey at office",
            category: "Work",
        },
        GalleryPhoto {
            id: 4,
            url: "/gallery/photo4.jpg",
            thumbnail: "/gallery/thumb4.jpg",
            caption: "Hackathon winner - DiaBeat project",
            category: "Achievement",
        },
        GalleryPhoto {
            id: 5,
            url: "/gallery/photo5.jpg",
            thumbnail: "/gallery/thumb5.jpg",
            caption: "Teaching Assistant session at Northeastern",
            category: "Community",
        },
        GalleryPhoto {
            id: 6,
            url: "/gallery/photo6.jpg",
            thumbnail: "/gallery/thumb6.jpg",
            caption: "Goldman Sachs office workspace",
            category: "Work",
        },
        GalleryPhoto {
            id: 7,
            url: "/gallery/photo7.jpg",
            thumbnail: "/gallery/thumb7.jpg",
            caption: "Tech meetup presentation on AI products",
            category: "Events",
        },
        GalleryPhoto {
            id: 8,
            url: "/gallery/photo8.jpg",
            thumbnail: "/gallery/thumb8.jpg",
            caption: "IIT Guwahati graduation day",
            category: "Achievement",
        },
    ],
};

/// Returns `"all"` followed by each distinct category in first-appearance order.
pub fn categories(photos: &[GalleryPhoto]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for photo in photos {
        if !out.contains(&photo.category) {
            out.push(photo.category);
        }
    }
    out
}

/// Returns the photos matching `filter`, in their original order.
///
/// `"all"` keeps every photo; an unknown category yields an empty list.
pub fn filter_photos<'a>(photos: &'a [GalleryPhoto], filter: &str) -> Vec<&'a GalleryPhoto> {
    if filter == ALL_CATEGORIES {
        photos.iter().collect()
    } else {
        photos.iter().filter(|p| p.category == filter).collect()
    }
}
