//! Project portfolio entries.

use crate::profile::SectionHeading;

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Stable small integer, only used to look a project up.
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub featured: bool,
    pub live_demo: Option<&'static str>,
    pub source_code: Option<&'static str>,
    pub highlights: &'static [&'static str],
    /// Slug of the case-study page, served at `/projects/<slug>`.
    pub case_study: Option<&'static str>,
}

impl Project {
    /// Path of the case-study page, if the project has one.
    pub fn case_study_path(&self) -> Option<String> {
        self.case_study.map(|slug| format!("/projects/{slug}"))
    }
}

pub static PROJECTS_HEADING: SectionHeading = SectionHeading {
    title: "Product Portfolio",
    subtitle: "Strategic initiatives showcasing end-to-end PM ownership: research → strategy → execution → impact",
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "DiaBeat - AI Insulin Calculator",
        description: "Led 0-1 product strategy for AI-powered insulin assistant. Validated market need through 14+ user interviews, designed safety-first UX, and secured clinic pilot interest.",
        long_description: "Identified opportunity through interviews with 14+ Type 1 diabetics revealing 67% struggled with accurate carb counting. Led end-to-end product development: market research → user personas → wireframes → MVP → usability testing. Key PM decision: prioritized safety over automation with a 3-tier guardrail system and human-in-the-loop validation.",
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&h=600&fit=crop",
        tags: &["0-1 Product", "User Research", "AI/ML Strategy", "Healthcare UX", "Safety Design"],
        category: "Startup",
        featured: true,
        live_demo: None,
        source_code: None,
        highlights: &[
            "🎯 Strategy: 14+ user interviews → identified a large market gap",
            "🧠 PM Decision: Safety-first UX with 3-tier validation system",
            "📊 Impact: 85% user satisfaction, 2 clinic pilots secured",
            "⚡ Execution: 0-1 MVP in 8 weeks using Lovable + AI",
        ],
        case_study: Some("diabeat"),
    },
    Project {
        id: 2,
        title: "HelpHive - Community Handyman Services",
        description: "Conducted market research with 25+ users to validate $45B handyman market opportunity. Built MVP prioritizing trust mechanisms. Key PM insight: trust beats price in local services.",
        long_description: "Led full product discovery: competitive analysis (TaskRabbit, Thumbtack, Nextdoor) → 25+ user interviews across 3 segments → core insight that 73% prioritize trust over cost in home services. Positioned as a community-first marketplace, designed a trust system and neighborhood-based matching, and validated a high-fidelity prototype through 5+ usability tests.",
        image: "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800&h=600&fit=crop",
        tags: &["Market Research", "Product Strategy", "Trust & Safety", "MVP Scoping", "PRD Writing"],
        category: "Startup",
        featured: true,
        live_demo: Some("https://aashutoshagrawal.github.io/help-hive/"),
        source_code: None,
        highlights: &[
            "🔍 Research: 25+ interviews → discovered trust > price insight",
            "🎯 Strategy: Positioned as 'community-first' vs transaction-focused competitors",
            "🏗️ Product: Designed 3-layer trust system + neighborhood matching",
            "📈 Validation: 80% prototype approval rate in usability testing",
        ],
        case_study: Some("helphive"),
    },
    Project {
        id: 3,
        title: "Grad Planner - ML Class Planning",
        description: "Scaled EdTech product from 0 → 97% adoption at Santa Clara University in 1 month. Led product strategy using ML personalization + two-sided marketplace model (students + admin).",
        long_description: "Owned the full product lifecycle for an ML-powered course planning tool: a two-sided value proposition, ML personalization over a rules-based system, and mobile-first UX after research showed 68% planned courses on phones. Led 3 product cycles with agile sprints and drove adoption through campus partnerships.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&h=600&fit=crop",
        tags: &["Product-Market Fit", "ML Product Strategy", "Two-Sided Marketplace", "Growth", "EdTech"],
        category: "Startup",
        featured: true,
        live_demo: None,
        source_code: None,
        highlights: &[
            "📊 Impact: 7,000+ monthly course plans, 97% adoption (SCU) in Month 1",
            "🧠 Strategy: Two-sided marketplace (student automation + admin analytics)",
            "🎯 PM Decision: ML personalization → 43% better recommendations",
            "⭐ Outcome: 84% students report 'vastly improved' planning experience",
        ],
        case_study: Some("gradplanner"),
    },
    Project {
        id: 4,
        title: "VR Compliance Training",
        description: "Drove 124% improvement in training effectiveness (42% → 94%) through data-driven product optimization. Led competitive research, behavioral UX redesign, and A/B testing at SISU VR.",
        long_description: "Improved a VR compliance training product showing only 42% behavioral compliance: competitive analysis of 8 platforms, research with 15+ corporate trainers, a redesign around active decision-making scenarios with real-time feedback, and an A/B test (n=200) that reached 94% compliance.",
        image: "https://images.unsplash.com/photo-1622979135225-d2ba269cf1ac?w=800&h=600&fit=crop",
        tags: &["Data-Driven PM", "Behavioral UX", "A/B Testing", "User Research", "B2B SaaS"],
        category: "Internship",
        featured: true,
        live_demo: None,
        source_code: None,
        highlights: &[
            "📈 Impact: 124% improvement in compliance (42% → 94%)",
            "🔬 Method: Competitive analysis + user research → behavioral UX redesign",
            "✅ Validation: A/B test (n=200) proved statistical significance",
            "⚡ Bonus: 37% faster completion + NPS +2.2 improvement",
        ],
        case_study: Some("vr-compliance"),
    },
    Project {
        id: 5,
        title: "Airbnb Case Study",
        description: "Comprehensive business analysis of Airbnb's platform strategy, market positioning, and growth trajectory in the hospitality industry.",
        long_description: "In-depth case study examining Airbnb's disruption of the traditional hotel industry through platform economics, trust mechanisms, and innovative product features.",
        image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800&h=600&fit=crop",
        tags: &["Business Strategy", "Platform Economics", "Market Analysis", "Case Study"],
        category: "Analysis",
        featured: true,
        live_demo: None,
        source_code: None,
        highlights: &[
            "Business model deep-dive",
            "Platform economics analysis",
            "Competitive positioning strategy",
            "Growth & scaling insights",
        ],
        case_study: Some("airbnb"),
    },
];

/// Looks a project up by its id.
pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Looks a project up by its case-study slug.
pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.case_study == Some(slug))
}
