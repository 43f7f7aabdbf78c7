//! Long-form case studies, one page per project.
//!
//! Each study is a hero block, a row of headline metrics and an ordered list
//! of narrative sections. Sections carry an optional paragraph and an
//! optional bullet list so that every page can share one renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudyHero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub timeline: &'static str,
    pub team: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseSection {
    pub title: &'static str,
    pub body: Option<&'static str>,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    /// Path segment under `/projects/`.
    pub slug: &'static str,
    /// Id of the matching entry in [`crate::PROJECTS`].
    pub project_id: u32,
    pub hero: CaseStudyHero,
    pub overview: &'static str,
    pub metrics: &'static [Metric],
    pub sections: &'static [CaseSection],
    pub prototype_url: Option<&'static str>,
}

pub static DIABEAT: CaseStudy = CaseStudy {
    slug: "diabeat",
    project_id: 1,
    hero: CaseStudyHero {
        title: "DiaBeat",
        tagline: "AI-Powered Insulin Calculator for Type 1 Diabetes Management",
        role: "Product Manager",
        timeline: "Sep 2024 - Dec 2024",
        team: Some("Solo Project (PM, UX Research, Strategy)"),
    },
    overview: "To eliminate the daily mental burden of diabetes management by empowering Type 1 diabetes patients with AI-driven automation that makes carb counting effortless and insulin dosing precise.",
    metrics: &[
        Metric { value: "14", label: "Patient Interviews Conducted" },
        Metric { value: "1", label: "Working MVP Built" },
        Metric { value: "$15B", label: "Global Market Opportunity" },
        Metric { value: "85%", label: "User Willingness to Pay" },
    ],
    sections: &[
        CaseSection {
            title: "The Problem",
            body: Some("Managing diabetes is a constant cognitive and emotional burden. Interviews with 14 Type 1 diabetes patients showed that carb counting and insulin dosing are the most time-consuming, error-prone and stressful daily tasks."),
            bullets: &[
                "Inaccurate nutrition data and portion measurement challenges",
                "High mental bandwidth spent on constant calculations",
                "Anxiety from hypoglycemia risk leading to conservative dosing",
            ],
        },
        CaseSection {
            title: "The Solution",
            body: Some("DiaBeat combines CGM integration, automated carb counting and AI-powered insulin calculation to deliver personalized guidance in real time."),
            bullets: &[
                "Automated carbohydrate counting via photo recognition",
                "AI-powered insulin dosing recommendations",
                "Seamless CGM data integration",
            ],
        },
        CaseSection {
            title: "Research Insights",
            body: Some("46.4% of respondents struggle most with carb counting, 39.3% with insulin dosing and 14.3% with app usability."),
            bullets: &[
                "Carb counting is the most time-consuming part of diabetes management",
                "Patients describe the constant checking and double-checking as exhausting",
                "Many patients guess carbs with only 65% confidence",
            ],
        },
        CaseSection {
            title: "Market Opportunity",
            body: Some("Starting local, scaling nationally, and building toward a $15B global opportunity."),
            bullets: &[
                "~70K Boston-area insulin users: $7M market",
                "~8M U.S. insulin users: $800M market",
                "~150M global insulin users: $15B market",
            ],
        },
        CaseSection {
            title: "Business Model",
            body: Some("Freemium for patients, bundles for clinics, with a five-year path to $100M ARR."),
            bullets: &[
                "B2C: 5 free calculations a month, premium at $20/month or $200/year",
                "B2B: bundle plans for 50+ patients at $150/year per patient",
                "Go-to-market through diabetic communities, provider partnerships and social media",
            ],
        },
    ],
    prototype_url: Some("https://aashutoshagrawal.github.io/diabeat/"),
};

pub static HELPHIVE: CaseStudy = CaseStudy {
    slug: "helphive",
    project_id: 2,
    hero: CaseStudyHero {
        title: "HelpHive",
        tagline: "Connecting Askers and Taskers for all your needs",
        role: "Product Manager",
        timeline: "Sep 2024 - Dec 2024",
        team: Some("Solo Project (PM, UX Research, Strategy)"),
    },
    overview: "A community-driven marketplace that connects people who need help with trusted local handymen for quick, affordable home services.",
    metrics: &[
        Metric { value: "25+", label: "User Interviews" },
        Metric { value: "89%", label: "Concept Validation" },
        Metric { value: "67%", label: "Intent to Use" },
        Metric { value: "4.2/5", label: "Prototype Rating" },
    ],
    sections: &[
        CaseSection {
            title: "The Problem",
            body: Some("25+ user interviews revealed key pain points in existing handyman services:"),
            bullets: &[
                "High costs and hidden fees on platforms like TaskRabbit",
                "Lack of trust and transparency with service providers",
                "Limited availability for small, quick tasks",
                "No community accountability or local connections",
            ],
        },
        CaseSection {
            title: "HelpHive Solution",
            body: Some("A community-first platform that reimagines how people connect for home services."),
            bullets: &[
                "Asker/Tasker ecosystem where anyone can ask for help or offer services",
                "Trust badges and multi-layer verification",
                "Real-time chat with photo sharing",
                "Transparent flat pricing with no hidden fees",
                "Community ratings with photos and feedback",
            ],
        },
        CaseSection {
            title: "User Research & Discovery",
            body: None,
            bullets: &[
                "Users value trust over price (65% willing to pay 15% more for verified providers)",
                "Quick tasks under two hours are underserved by existing platforms",
                "Local community connection is a key differentiator",
                "Mobile-first experience is essential (78% would use a mobile app)",
            ],
        },
        CaseSection {
            title: "Challenges & Learnings",
            body: Some("The chicken-and-egg problem of a two-sided marketplace was addressed with a community-first launch in high-density student areas."),
            bullets: &[
                "Marketplaces need concentrated user density before expanding geographically",
                "Trust is built through transparency and community accountability",
                "Product-market fit comes from solving one problem exceptionally well",
            ],
        },
    ],
    prototype_url: Some("https://aashutoshagrawal.github.io/help-hive/"),
};

pub static GRADPLANNER: CaseStudy = CaseStudy {
    slug: "gradplanner",
    project_id: 3,
    hero: CaseStudyHero {
        title: "Automating the College Experience with Machine Learning",
        tagline: "From the initial prototype to final launch, I led Grad Planner through several product cycles, automating class planning for students and turning that data into better course planning decisions for universities.",
        role: "Product Manager",
        timeline: "Sept, 2024",
        team: None,
    },
    overview: "Every semester, class planning was a source of stress. Research showed this was not an isolated problem but one every university student faced, so I set out to automate it with machine learning.",
    metrics: &[
        Metric { value: "7,000+", label: "Course plans created monthly" },
        Metric { value: "97%", label: "Of SCU students used in first month" },
        Metric { value: "84%", label: "Say experience 'vastly improved'" },
    ],
    sections: &[
        CaseSection {
            title: "MVP",
            body: Some("A class prototype became a proof of concept; I recruited engineers to build a market-ready version and led user research with students, registrars and department chairs. The findings became the blueprint for the MVP."),
            bullets: &[],
        },
        CaseSection {
            title: "Business Model",
            body: Some("Students save time, universities save money on registration, at no cost to end users."),
            bullets: &[
                "Students save time with personalized class recommendations",
                "Universities optimize course offerings based on real demand data",
                "Zero cost to students",
            ],
        },
        CaseSection {
            title: "What We Built",
            body: Some("90% of the target audience valued personalization, so recommendations are driven by machine learning and improve as more students use the product."),
            bullets: &[
                "Machine learning-powered personalized class recommendations",
                "Algorithm that learns and improves with more user data",
                "Integration with university course catalog systems",
            ],
        },
        CaseSection {
            title: "Key Learnings",
            body: None,
            bullets: &[
                "User-centric design: research with students and stakeholders came first",
                "Agile development: concurrent engineering and marketing roadmaps",
                "Data-driven decisions: user data guided feature prioritization",
                "Solving real problems: 97% adoption in the first month",
            ],
        },
    ],
    prototype_url: None,
};

pub static VR_COMPLIANCE: CaseStudy = CaseStudy {
    slug: "vr-compliance",
    project_id: 4,
    hero: CaseStudyHero {
        title: "Building Effective Compliance Training with VR",
        tagline: "At SISU VR, I worked to make their compliance training product more effective. Through usability tests and competitive analysis, I identified, tested, and analyzed the highest impact feature changes for their product.",
        role: "Product Manager",
        timeline: "May, 2018",
        team: None,
    },
    overview: "This project demonstrates the power of user research, competitive analysis and A/B testing in product development.",
    metrics: &[
        Metric { value: "42%", label: "Effectiveness before" },
        Metric { value: "94%", label: "Effectiveness after" },
    ],
    sections: &[
        CaseSection {
            title: "What is SISU VR",
            body: Some("SISU VR provides an immersive VR experience for prevention training, replacing lengthy, monotonous compliance courses with realistic situations."),
            bullets: &[],
        },
        CaseSection {
            title: "Product Goal",
            body: Some("Effectiveness was framed as how much a user learns from the product and how they react in unfamiliar problem situations. Tests on users established a benchmark for future iterations."),
            bullets: &[],
        },
        CaseSection {
            title: "Increasing Effectiveness",
            body: Some("The highest impact feature changes came from competitive analysis and research of market leaders."),
            bullets: &[
                "Competitive analysis pointed to a stronger focus on learning content",
                "Market research led to intro videos on conflict management and gender constructs",
            ],
        },
        CaseSection {
            title: "Results",
            body: Some("An A/B test in the last week of the internship compared the old and new versions: users learned more and reacted better to unfamiliar workplace problems."),
            bullets: &[],
        },
    ],
    prototype_url: None,
};

pub static AIRBNB: CaseStudy = CaseStudy {
    slug: "airbnb",
    project_id: 5,
    hero: CaseStudyHero {
        title: "Airbnb Case Study",
        tagline: "Disrupting the Hospitality Industry Through Platform Innovation",
        role: "Business Analyst & Strategy Consultant",
        timeline: "Q4 2023",
        team: Some("Independent Research Project"),
    },
    overview: "This case study examines Airbnb's strategic journey from startup to market leader, analyzing their platform economics, trust mechanisms, competitive positioning, and growth strategies that disrupted the $1.5 trillion hospitality industry.",
    metrics: &[
        Metric { value: "7M+", label: "Active Listings" },
        Metric { value: "220+", label: "Countries" },
        Metric { value: "$100B+", label: "Market Cap (IPO)" },
        Metric { value: "500M+", label: "Guest Arrivals" },
    ],
    sections: &[
        CaseSection {
            title: "The Problem",
            body: Some("The traditional hospitality industry was fragmented, expensive and lacked authentic local experiences."),
            bullets: &[
                "Limited accommodation options beyond expensive hotels",
                "Unused residential space with no monetization avenue",
                "Trust and safety concerns in peer-to-peer transactions",
            ],
        },
        CaseSection {
            title: "Platform Economics",
            body: Some("More hosts → more choices → more guests → more hosts willing to join."),
            bullets: &[
                "Guest service fee: 14-16% commission on booking subtotal",
                "Host service fee: 3% commission per booking",
                "Experiences: 20% commission, high-margin diversification",
            ],
        },
        CaseSection {
            title: "Growth Strategy",
            body: None,
            bullets: &[
                "2008-2011: product-market fit in conference cities",
                "2012-2015: global expansion and localization",
                "2016-2020: diversification into experiences and business travel",
                "2020-present: resilience through COVID and a $100B+ IPO",
            ],
        },
        CaseSection {
            title: "Key Learnings",
            body: None,
            bullets: &[
                "Start with a wedge before scaling globally",
                "Make trust scalable through reviews, verification and insurance",
                "Leverage your community as brand evangelists",
                "Navigate regulation proactively",
            ],
        },
    ],
    prototype_url: None,
};

/// Every case study, in project order.
pub static CASE_STUDIES: &[&CaseStudy] = &[&DIABEAT, &HELPHIVE, &GRADPLANNER, &VR_COMPLIANCE, &AIRBNB];

/// Looks a case study up by slug.
pub fn case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().copied().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{project, PROJECTS};

    #[test]
    fn test_every_project_has_matching_study() {
        for project in PROJECTS {
            let slug = project.case_study.unwrap();
            let study = case_study(slug).unwrap();
            assert_eq!(study.project_id, project.id);
        }
    }

    #[test]
    fn test_study_points_back_at_project() {
        for study in CASE_STUDIES {
            assert_eq!(project(study.project_id).and_then(|p| p.case_study), Some(study.slug));
        }
    }

    #[test]
    fn test_diabeat_title() {
        assert_eq!(case_study("diabeat").map(|c| c.hero.title), Some("DiaBeat"));
        assert!(case_study("blog-podcast").is_none());
    }
}
