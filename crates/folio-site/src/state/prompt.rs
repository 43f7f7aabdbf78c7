//! Terminal-style path prompt in the navbar.

use super::SectionId;

/// Resolves typed input to a section. Unknown input resolves to nothing.
pub fn resolve_command(input: &str) -> Option<SectionId> {
    let input = input.trim().to_lowercase();
    let section = match input.as_str() {
        "" | "~" | "home" => SectionId::Home,
        "about" => SectionId::About,
        "projects" | "work" => SectionId::Projects,
        "skills" => SectionId::Skills,
        "experience" | "exp" => SectionId::Experience,
        "gallery" | "photos" => SectionId::Gallery,
        "contact" => SectionId::Contact,
        _ => return None,
    };
    Some(section)
}

/// Whether the path segment is shown or being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PromptState {
    #[default]
    Idle,
    Editing(String),
}

impl PromptState {
    /// Opens the editor, prefilled with the path of `active`.
    pub fn start(&mut self, active: SectionId) {
        let initial = match active {
            SectionId::Home => String::new(),
            other => other.anchor().to_string(),
        };
        *self = PromptState::Editing(initial);
    }

    pub fn input(&mut self, value: String) {
        if let PromptState::Editing(text) = self {
            *text = value;
        }
    }

    /// Closes the editor without navigating (Escape or blur).
    pub fn cancel(&mut self) {
        *self = PromptState::Idle;
    }

    /// Closes the editor and returns where the input points, if anywhere.
    pub fn submit(&mut self) -> Option<SectionId> {
        match std::mem::take(self) {
            PromptState::Editing(text) => resolve_command(&text),
            PromptState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, PromptState::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(resolve_command("work"), Some(SectionId::Projects));
        assert_eq!(resolve_command("exp"), Some(SectionId::Experience));
        assert_eq!(resolve_command("photos"), Some(SectionId::Gallery));
        assert_eq!(resolve_command("~"), Some(SectionId::Home));
        assert_eq!(resolve_command("   "), Some(SectionId::Home));
    }

    #[test]
    fn test_input_is_normalised() {
        assert_eq!(resolve_command("  Contact "), Some(SectionId::Contact));
        assert_eq!(resolve_command("SKILLS"), Some(SectionId::Skills));
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(resolve_command("rm -rf /"), None);
        assert_eq!(resolve_command("testimonials"), None);
    }

    #[test]
    fn test_every_section_resolves_by_anchor() {
        for section in SectionId::ALL {
            assert_eq!(resolve_command(section.anchor()), Some(section));
        }
    }

    #[test]
    fn test_edit_cycle() {
        let mut prompt = PromptState::default();
        prompt.start(SectionId::About);
        assert_eq!(prompt, PromptState::Editing("about".to_string()));

        prompt.input("work".to_string());
        assert_eq!(prompt.submit(), Some(SectionId::Projects));
        assert!(!prompt.is_editing());
    }

    #[test]
    fn test_start_on_home_is_empty() {
        let mut prompt = PromptState::default();
        prompt.start(SectionId::Home);
        assert_eq!(prompt, PromptState::Editing(String::new()));
    }

    #[test]
    fn test_cancel_and_unknown_submit() {
        let mut prompt = PromptState::default();
        prompt.start(SectionId::Gallery);
        prompt.cancel();
        assert!(!prompt.is_editing());
        assert_eq!(prompt.submit(), None);

        prompt.start(SectionId::Home);
        prompt.input("nowhere".to_string());
        assert_eq!(prompt.submit(), None);
        assert!(!prompt.is_editing());
    }
}
