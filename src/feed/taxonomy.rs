use std::collections::{HashMap, HashSet};

/// Fixed sidebar group: a heading plus the category labels listed under it.
/// Children are display entries; whether each is backed by a live backend
/// category is decided per dataset through [`CategoryTreeIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub children: &'static [&'static str],
    pub expanded_by_default: bool,
}

pub const CATEGORY_TREE: [CategoryGroup; 3] = [
    CategoryGroup {
        id: "global_intel",
        label: "GLOBAL INTEL",
        icon: "globe",
        children: &["NEWS", "SCIENCE", "HISTORY", "Civilization"],
        expanded_by_default: true,
    },
    CategoryGroup {
        id: "tech_ai",
        label: "TECH & AI",
        icon: "cpu",
        children: &["AI", "TECH", "DEV", "LLM Agents"],
        expanded_by_default: true,
    },
    CategoryGroup {
        id: "cyber_ops",
        label: "CYBER OPS",
        icon: "shield",
        children: &["CYBERSEC", "CRYPTO", "Hacking"],
        expanded_by_default: false,
    },
];

/// Reconciles the static tree against the dynamic category list the backend
/// currently serves, and tracks per-group expansion.
pub struct CategoryTreeIndex {
    live: HashSet<String>,
    expanded: HashMap<&'static str, bool>,
}

impl CategoryTreeIndex {
    pub fn new(live_categories: impl IntoIterator<Item = String>) -> Self {
        let expanded = CATEGORY_TREE
            .iter()
            .map(|group| (group.id, group.expanded_by_default))
            .collect();

        Self {
            live: live_categories.into_iter().collect(),
            expanded,
        }
    }

    pub fn groups(&self) -> &'static [CategoryGroup] {
        &CATEGORY_TREE
    }

    /// Whether a child entry names a category the backend actually serves.
    pub fn is_real_category(&self, child: &str) -> bool {
        self.live.contains(child)
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.get(group_id).copied().unwrap_or(false)
    }

    /// Flips exactly one group; unknown ids are ignored.
    pub fn toggle(&mut self, group_id: &str) {
        if let Some(open) = self.expanded.get_mut(group_id) {
            *open = !*open;
        }
    }

    pub fn set_live_categories(&mut self, live_categories: impl IntoIterator<Item = String>) {
        self.live = live_categories.into_iter().collect();
    }
}
