//! Static content for the portfolio site.
//!
//! Every record here is authored at compile time and borrowed for `'static`.
//! Nothing is mutated at runtime; the site crate only reads and filters.

pub mod career;
pub mod case_studies;
pub mod gallery;
pub mod profile;
pub mod projects;
pub mod testimonials;

pub use career::{Career, Certification, Education, Experience, CAREER};
pub use case_studies::{
    case_study, CaseSection, CaseStudy, CaseStudyHero, Metric, AIRBNB, CASE_STUDIES, DIABEAT,
    GRADPLANNER, HELPHIVE, VR_COMPLIANCE,
};
pub use gallery::{categories, filter_photos, Gallery, GalleryPhoto, ALL_CATEGORIES, GALLERY};
pub use profile::{
    AboutContent, CallToAction, ContactContent, FieldKind, FormFieldSpec, HeroContent, Highlight,
    PersonalInfo, SectionHeading, Skill, SkillCategory, SocialLink, StatusRow, TerminalFollowUp,
    TerminalScenario, ABOUT, CONTACT, HERO, LEGAL_LINKS, PERSONAL_INFO, SKILLS, SKILLS_HEADING,
    SOCIAL_LINKS, TERMINAL_SCENARIOS,
};
pub use projects::{project, project_by_slug, Project, PROJECTS, PROJECTS_HEADING};
pub use testimonials::{Testimonial, TESTIMONIALS, TESTIMONIALS_HEADING};
