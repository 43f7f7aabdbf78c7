//! Testimonials cycled by the home page carousel.

use crate::profile::SectionHeading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    /// Star rating out of five.
    pub rating: u8,
    pub link: &'static str,
    pub link_text: &'static str,
}

pub static TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    title: "Testimonials",
    subtitle: "What colleagues and collaborators say",
};

const PROFILE_LINK: &str = "https://www.linkedin.com/in/aashutosh-agrawal/";
const VERIFY: &str = "Verify Testimonial";

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Dipankar Bose",
        role: "Vice President (Risk & Compliance)",
        company: "Goldman Sachs",
        image: "https://ui-avatars.com/api/?name=Dipankar+Bose&size=128&background=4F46E5&color=fff&bold=true",
        quote: "Aashutosh has been instrumental in working on end to end product development of a Reporting dashboard with advanced Analytics capabilities. He deep dives into business problems and follows structured frameworks in solution design. Possessing robust technical skills especially in Systems design, he's been able to work very closely with the engineering team on tech trade-offs.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 2,
        name: "Sarah Chen",
        role: "Senior Engineering Manager",
        company: "Goldman Sachs",
        image: "https://i.pravatar.cc/150?img=1",
        quote: "Aashutosh has an exceptional ability to translate complex technical requirements into actionable product strategies. His work on the Marcus platform directly contributed to our $200M+ revenue growth.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 3,
        name: "Michael Rodriguez",
        role: "Principal Consultant",
        company: "McKinsey & Company",
        image: "https://i.pravatar.cc/150?img=12",
        quote: "Working with Aashutosh on Platform McKinsey was transformative. His data-driven approach and user empathy resulted in a 25% increase in platform adoption across 30,000+ consultants.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 4,
        name: "Dr. Emily Watson",
        role: "Head of Product",
        company: "Healthcare Startup",
        image: "https://i.pravatar.cc/150?img=5",
        quote: "Aashutosh's DiaBeat prototype demonstrates his ability to identify real user pain points and build solutions that matter. His research methodology and execution were outstanding.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 5,
        name: "James Park",
        role: "VP of Engineering",
        company: "Goldman Sachs",
        image: "https://i.pravatar.cc/150?img=15",
        quote: "The ML-powered surveillance platform Aashutosh built reduced case resolution time by 50% and saved millions in potential compliance fines. He's a rare blend of technical depth and product vision.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 6,
        name: "Rachel Thompson",
        role: "Product Director",
        company: "Grad Planner",
        image: "https://i.pravatar.cc/150?img=9",
        quote: "Aashutosh took Grad Planner from concept to 97% adoption at Santa Clara University in just a few months. His leadership and product intuition are exceptional.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
    Testimonial {
        id: 7,
        name: "David Kumar",
        role: "CTO",
        company: "SISU VR",
        image: "https://i.pravatar.cc/150?img=13",
        quote: "Aashutosh increased our VR training effectiveness from 42% to 94% through rigorous testing and competitive analysis. He has a keen eye for what drives real product impact.",
        rating: 5,
        link: PROFILE_LINK,
        link_text: VERIFY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
