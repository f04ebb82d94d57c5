// shortcuts.rs
use crate::core::actions::Action;

pub struct Shortcuts;

impl Shortcuts {
    /// THE ONE PLACE TO CHANGE SHORTCUTS
    /// Format: (Key with Ctrl held, Action, Description)
    pub fn get_mappings() -> Vec<(char, Action, &'static str)> {
        vec![
            ('O', Action::OpenFile, "Open file"),
            ('L', Action::ClearLinesContaining, "Clear lines containing text"),
            ('E', Action::ClearEmptyLines, "Clear empty lines"),
            ('H', Action::ManageShades, "Manage shades"),
            ('Q', Action::Quit, "Quit program"),
        ]
    }

    // shortcut label shown next to menu entries
    pub fn label_for(action: Action) -> Option<String> {
        Self::get_mappings()
            .into_iter()
            .find(|(_, mapped, _)| *mapped == action)
            .map(|(key, _, _)| format!("Ctrl+{key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_unique() {
        let mut keys: Vec<char> = Shortcuts::get_mappings().iter().map(|(k, _, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Shortcuts::get_mappings().len());
    }

    #[test]
    fn test_label_for() {
        assert_eq!(Shortcuts::label_for(Action::OpenFile).as_deref(), Some("Ctrl+O"));
        assert_eq!(Shortcuts::label_for(Action::ToggleShortcuts), None);
    }
}
