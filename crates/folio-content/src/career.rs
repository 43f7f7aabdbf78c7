//! Work experience, education and certifications.

use crate::profile::SectionHeading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub role: &'static str,
    pub company: &'static str,
    /// Team or product line within the company.
    pub location: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub gpa: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
}

/// Everything the experience section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Career {
    pub heading: SectionHeading,
    pub experiences: &'static [Experience],
    pub education_heading: SectionHeading,
    pub education: &'static [Education],
    pub certifications: &'static [Certification],
}

pub static CAREER: Career = Career {
    heading: SectionHeading {
        title: "Professional Experience",
        subtitle: "My career journey",
    },
    experiences: &[
        Experience {
            id: 1,
            role: "Product Manager Intern",
            company: "McKinsey & Company",
            location: "Platform McKinsey",
            duration: "July 2025 - Dec 2025",
            description: "Led product initiatives for Platform McKinsey, a product suite with 1000+ offerings supporting 30,000+ consultants globally.",
            achievements: &[
                "Increased knowledge discovery efficiency by 15% through GenAI-powered search",
                "Reduced support tickets by 20% with improved search platform",
                "Boosted platform adoption by 25% through data-driven UX improvements",
                "Defined 20+ key metrics in Heap Analytics for strategic insights",
            ],
        },
        Experience {
            id: 2,
            role: "Product Manager",
            company: "Goldman Sachs",
            location: "Marcus (Consumer Banking)",
            duration: "Jan 2023 - Aug 2024",
            description: "Led product strategy for Marcus, Goldman's consumer banking platform serving 14M+ users with $100B+ in deposits.",
            achievements: &[
                "Drove $200M+ quarterly revenue uplift with AI-powered financial insights",
                "Increased digital engagement by 35% through personalization",
                "Boosted user-initiated transactions by 15% with recommendation algorithms",
                "Partnered with 20+ member cross-functional team in Agile environment",
            ],
        },
        Experience {
            id: 3,
            role: "Technical Product Manager",
            company: "Goldman Sachs",
            location: "Compliance Surveillance",
            duration: "Jan 2022 - Dec 2022",
            description: "Built ML-powered surveillance platform for employee compliance used by 3,000+ compliance officers globally.",
            achievements: &[
                "Cut case-resolution time by 50% with ML-based models",
                "Reduced FINRA fines by 60% through improved detection",
                "Lowered false positives by 70% using XGBoost risk scoring",
                "Led 100+ user interviews shaping two-year product roadmap",
            ],
        },
        Experience {
            id: 4,
            role: "Quantitative Strategist",
            company: "Goldman Sachs",
            location: "Wealth Management",
            duration: "Aug 2020 - Dec 2021",
            description: "Designed investment strategies and analytics solutions for $600B+ in HNI client portfolios.",
            achievements: &[
                "Designed 10+ investment strategies for $600B in portfolios",
                "Delivered 3 interactive dashboards and 10+ automated reports",
                "Increased reporting productivity by 30% through automation",
                "Improved data processing speed by 40% with optimized SQL queries",
            ],
        },
        Experience {
            id: 5,
            role: "Product Development Intern",
            company: "Deutsche Bank",
            location: "VR Training Platform",
            duration: "May 2018 - Aug 2018",
            description: "Built a VR training platform for traders to improve decision-making in simulated market conditions.",
            achievements: &[
                "Reduced decision errors by 60% through immersive VR training",
                "Increased decision-making speed and accuracy by 2x",
                "Boosted platform engagement by 40% through user-driven feature updates",
                "Increased module completion rates by 50% via data-driven refinements",
            ],
        },
    ],
    education_heading: SectionHeading {
        title: "Education",
        subtitle: "My academic background",
    },
    education: &[
        Education {
            id: 1,
            degree: "Master of Science in Engineering Management",
            institution: "Northeastern University",
            duration: "Sep 2024 - Apr 2026",
            description: "Focused on Applied Generative AI and Digital Product Design and Management.",
            gpa: "4.0/4.0",
        },
        Education {
            id: 2,
            degree: "Bachelor of Technology in Mathematics and Computer Science",
            institution: "Indian Institute of Technology Guwahati",
            duration: "Jul 2016 - Aug 2020",
            description: "Coursework included Data Structures and Algorithms, Networks and Databases, and Quantitative Finance.",
            gpa: "3.9/4.0",
        },
    ],
    certifications: &[Certification {
        id: 1,
        name: "Graduate Teaching Assistant - Economic Decision Making",
        issuer: "Northeastern University",
        date: "Jan 2025 - Apr 2025",
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_ids_are_sequential() {
        let ids: Vec<_> = CAREER.experiences.iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_role_lists_achievements() {
        assert!(CAREER.experiences.iter().all(|e| !e.achievements.is_empty()));
    }
}
