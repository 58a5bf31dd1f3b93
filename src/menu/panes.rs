use std::collections::HashMap;
use std::hash::Hash;

/// One navigable pane: the handler it runs, the glyph that triggers it and its pane name.
#[derive(Debug, Clone, Copy)]
pub struct PaneEntry<P: 'static> {
    pub pane: P,
    pub emoji: &'static str,
    pub name: &'static str,
}

/// A static emoji-to-pane table for one menu. Glyphs are unique, names are not.
#[derive(Debug)]
pub struct PaneRegistry<P: 'static> {
    pub entries: &'static [PaneEntry<P>],
    /// pane names that respond to their glyph but are never offered as a reaction
    pub hidden: &'static [&'static str],
}

impl<P: Copy + Eq + Hash> PaneRegistry<P> {
    fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(&name)
    }

    /// Visible glyphs in registration order.
    pub fn emoji_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !self.is_hidden(e.name))
            .map(|e| e.emoji.to_string())
            .collect()
    }

    pub fn transitions(&self) -> HashMap<&'static str, P> {
        self.entries.iter().map(|e| (e.emoji, e.pane)).collect()
    }

    pub fn transition(&self, emoji: &str) -> Option<P> {
        self.entries.iter().find(|e| e.emoji == emoji).map(|e| e.pane)
    }

    /// Pane name to pane. Names shared by several entries map to the last one registered.
    pub fn pane_types(&self) -> HashMap<&'static str, P> {
        self.entries
            .iter()
            .filter(|e| !e.name.is_empty() && !self.is_hidden(e.name))
            .map(|e| (e.name, e.pane))
            .collect()
    }

    pub fn emoji_name_to_emoji(&self, name: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.emoji)
    }

    pub fn emoji_name_to_function(&self, name: &str) -> Option<P> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.pane)
    }

    pub fn emoji_for(&self, pane: P) -> Option<&'static str> {
        self.entries.iter().find(|e| e.pane == pane).map(|e| e.emoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Pane {
        Home,
        Pick(usize),
        Refresh,
    }

    const REGISTRY: PaneRegistry<Pane> = PaneRegistry {
        entries: &[
            PaneEntry { pane: Pane::Home, emoji: "h", name: "home" },
            PaneEntry { pane: Pane::Pick(0), emoji: "a", name: "pick" },
            PaneEntry { pane: Pane::Pick(1), emoji: "b", name: "pick" },
            PaneEntry { pane: Pane::Refresh, emoji: "r", name: "refresh" },
        ],
        hidden: &["home", "refresh"],
    };

    #[test]
    fn hidden_panes_are_not_offered() {
        assert_eq!(REGISTRY.emoji_names(), vec!["a", "b"]);
    }

    #[test]
    fn hidden_panes_still_dispatch() {
        assert_eq!(REGISTRY.transition("r"), Some(Pane::Refresh));
        assert_eq!(REGISTRY.transition("z"), None);
        assert_eq!(REGISTRY.transitions().len(), 4);
    }

    #[test]
    fn shared_names_resolve() {
        let types = REGISTRY.pane_types();
        assert_eq!(types.len(), 1);
        assert_eq!(types.get("pick"), Some(&Pane::Pick(1)));
        assert_eq!(REGISTRY.emoji_name_to_function("pick"), Some(Pane::Pick(0)));
        assert_eq!(REGISTRY.emoji_name_to_emoji("pick"), Some("a"));
        assert_eq!(REGISTRY.emoji_name_to_emoji("missing"), None);
    }
}
