//! Personal information and the home page copy that surrounds it.

/// Title and subtitle shown above a home page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The site owner. There is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    /// Public path of the downloadable résumé.
    pub resume_url: &'static str,
    /// File name offered to the browser when the résumé is downloaded.
    pub resume_file_name: &'static str,
    pub avatar_url: &'static str,
}

impl PersonalInfo {
    /// Returns the first word of the name, lower-cased, as used in the terminal prompt.
    pub fn prompt_user(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Returns the upper-case initials of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Aashutosh Agrawal",
    title: "Product Manager",
    tagline: "Building AI-Powered Products That Drive Business Impact",
    email: "aashutosh.agrawal992@gmail.com",
    phone: "(857) 230-4392",
    location: "Boston, MA",
    bio: "Product Manager with a strong foundation in Computer Science from IIT and a Master's in Product Management from Northeastern. Experienced in building AI-powered, data-driven products at Goldman Sachs and McKinsey, combining analytical rigor with user empathy to deliver measurable business impact.",
    resume_url: "/Aashutosh_Agrawal_Resume.pdf",
    resume_file_name: "Aashutosh_Agrawal_Resume.pdf",
    avatar_url: "/avatar.jpg",
};

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Only networks with a real profile are listed.
pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/aashutoshagrawal",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/aashutosh-agrawal/",
    },
];

/// A hero button that scrolls to a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub text: &'static str,
    /// Section anchor id, without the leading `#`.
    pub anchor: &'static str,
    pub primary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub greeting: &'static str,
    pub roles: &'static [&'static str],
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub calls_to_action: &'static [CallToAction],
}

pub static HERO: HeroContent = HeroContent {
    greeting: "Hi, I'm",
    roles: &[
        "Product Manager",
        "AI/ML Product Specialist",
        "Data-Driven Problem Solver",
        "Technical Product Leader",
    ],
    headline: "Building AI-Powered Products That Create Measurable Impact",
    subheadline: "I specialize in delivering data-driven, user-centric products that combine technical depth with strategic business value, from fintech platforms serving 14M+ users to enterprise tools supporting 30,000+ consultants.",
    calls_to_action: &[
        CallToAction {
            text: "View My Work",
            anchor: "projects",
            primary: true,
        },
        CallToAction {
            text: "Get In Touch",
            anchor: "contact",
            primary: false,
        },
    ],
};

/// One screen of the hero's terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalScenario {
    pub command: &'static str,
    pub output: &'static [&'static str],
    /// Second command run in the same screen, if any.
    pub follow_up: Option<TerminalFollowUp>,
}

/// A second command whose output is a list of labelled status rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFollowUp {
    pub command: &'static str,
    pub rows: &'static [StatusRow],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// Trails the value with a blinking cursor.
    pub cursor: bool,
}

pub static TERMINAL_SCENARIOS: &[TerminalScenario] = &[
    TerminalScenario {
        command: "cat about_me.txt",
        output: &[
            "📍 Boston, MA | 🎓 IIT → Goldman → McKinsey → NEU",
            "♟️ Chess enthusiast | 🤖 AI tinkerer | 📊 Data nerd",
        ],
        follow_up: Some(TerminalFollowUp {
            command: "./current_status.sh",
            rows: &[
                StatusRow {
                    icon: "⚡",
                    label: "Status:",
                    value: "actively_building",
                    cursor: false,
                },
                StatusRow {
                    icon: "🎯",
                    label: "Seeking:",
                    value: "AI_PM_roles",
                    cursor: false,
                },
                StatusRow {
                    icon: "✓",
                    label: "Available for:",
                    value: "your_company_here",
                    cursor: true,
                },
            ],
        }),
    },
    TerminalScenario {
        command: "cat skills.json",
        output: &[
            r#"{ "product": ["strategy", "roadmaps", "user_research"],"#,
            r#"  "tech": ["python", "SQL", "ML/AI", "APIs"],"#,
            r#"  "impact": "14M+ users, $50M+ revenue" }"#,
        ],
        follow_up: None,
    },
    TerminalScenario {
        command: "git log --oneline",
        output: &[
            "🚀 Built AI models at Goldman (14M users)",
            "📈 Led analytics at McKinsey (30K users)",
            "🎓 Mastering Product @ Northeastern",
        ],
        follow_up: None,
    },
    TerminalScenario {
        command: "npm run interests",
        output: &[
            "♟️ Chess: Because strategy matters",
            "🤖 AI/ML: The future is here",
            "📊 Data: Stories in numbers",
            "🏗️ Building: Products people love",
        ],
        follow_up: None,
    },
    TerminalScenario {
        command: "./get_random_fact.sh",
        output: &[
            "💡 Did you know?",
            "I've analyzed data for 14M+ users",
            "Built ML models in production",
            "And still make time for chess puzzles ♟️",
        ],
        follow_up: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutContent {
    pub heading: SectionHeading,
    /// Year the career started; the intro derives years of experience from it.
    pub career_start_year: i32,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub interests: &'static [&'static str],
}

impl AboutContent {
    /// Opening sentence, with years of experience computed for `current_year`.
    pub fn intro(&self, current_year: i32) -> String {
        let years = (current_year - self.career_start_year).max(0);
        format!(
            "I'm a Product Manager with {years} years of experience building AI-powered, data-driven products at leading firms like Goldman Sachs and McKinsey."
        )
    }
}

pub static ABOUT: AboutContent = AboutContent {
    heading: SectionHeading {
        title: "About Me",
        subtitle: "Get to know me better",
    },
    career_start_year: 2020,
    paragraphs: &[
        "With a Computer Science background from IIT Guwahati and a Master's in Engineering Management from Northeastern, I bridge the gap between technical complexity and business value.",
        "I'm passionate about leveraging ML/AI to solve real user problems, whether it's personalizing financial insights for 14M+ users or streamlining knowledge discovery for 30,000+ consultants. I thrive in cross-functional environments where data analysis meets user empathy.",
        "When I'm not building products, you can find me playing chess (1400+ rating), working on startup prototypes, or mentoring students as a Teaching Assistant.",
    ],
    highlights: &[
        Highlight {
            number: "5+",
            label: "Years Experience",
        },
        Highlight {
            number: "14M+",
            label: "Users Impacted",
        },
        Highlight {
            number: "35%",
            label: "Engagement Increase",
        },
        Highlight {
            number: "4.0",
            label: "Graduate GPA",
        },
    ],
    interests: &[
        "Product Management",
        "AI/ML Integration",
        "Data Analytics",
        "User Research",
        "Strategic Thinking",
        "Chess Strategy",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency from 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILLS_HEADING: SectionHeading = SectionHeading {
    title: "Skills & Expertise",
    subtitle: "Technologies and tools I work with",
};

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Product Management",
        skills: &[
            Skill { name: "Product Strategy", level: 95, icon: "🎯" },
            Skill { name: "Data Analysis", level: 92, icon: "📊" },
            Skill { name: "A/B Testing", level: 88, icon: "🧪" },
            Skill { name: "User Research", level: 90, icon: "👥" },
            Skill { name: "Roadmapping", level: 93, icon: "🗺️" },
            Skill { name: "Stakeholder Mgmt", level: 91, icon: "🤝" },
        ],
    },
    SkillCategory {
        name: "Technical Skills",
        skills: &[
            Skill { name: "SQL", level: 90, icon: "🗃️" },
            Skill { name: "Python", level: 85, icon: "🐍" },
            Skill { name: "ML/AI Integration", level: 87, icon: "🤖" },
            Skill { name: "Git", level: 82, icon: "📦" },
            Skill { name: "Java", level: 78, icon: "☕" },
            Skill { name: "C++", level: 75, icon: "⚙️" },
        ],
    },
    SkillCategory {
        name: "Tools & Platforms",
        skills: &[
            Skill { name: "JIRA", level: 92, icon: "📋" },
            Skill { name: "Figma", level: 88, icon: "🎨" },
            Skill { name: "Heap Analytics", level: 85, icon: "📈" },
            Skill { name: "Tableau", level: 82, icon: "📊" },
            Skill { name: "Confluence", level: 90, icon: "📝" },
            Skill { name: "Lovable", level: 80, icon: "⚡" },
        ],
    },
];

/// How a contact field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFieldSpec {
    /// Field name; also the key the form state uses.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactContent {
    pub heading: SectionHeading,
    pub description: &'static str,
    pub fields: &'static [FormFieldSpec],
    pub submit_label: &'static str,
}

pub static CONTACT: ContactContent = ContactContent {
    heading: SectionHeading {
        title: "Get In Touch",
        subtitle: "Let's work together",
    },
    description: "I'm always interested in hearing about new product opportunities and collaboration. Whether you have a question or just want to connect, feel free to reach out!",
    fields: &[
        FormFieldSpec {
            name: "name",
            label: "Your Name",
            kind: FieldKind::Text,
            placeholder: "John Doe",
        },
        FormFieldSpec {
            name: "email",
            label: "Your Email",
            kind: FieldKind::Email,
            placeholder: "john@example.com",
        },
        FormFieldSpec {
            name: "subject",
            label: "Subject",
            kind: FieldKind::Text,
            placeholder: "Product Discussion",
        },
        FormFieldSpec {
            name: "message",
            label: "Message",
            kind: FieldKind::TextArea { rows: 5 },
            placeholder: "Tell me about your project or opportunity...",
        },
    ],
    submit_label: "Send Message",
};

/// Footer legal links as (label, href).
pub static LEGAL_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Sitemap", "/sitemap"),
];
