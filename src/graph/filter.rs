use std::collections::{BTreeSet, HashSet};

use super::model::{SignalGraph, SignalId, SignalLink, SignalNode};

pub const ALL_TAG: &str = "ALL";

/// Tag side of the filter state. `All` is the sentinel the selector UI shows
/// as "ALL"; concrete tags are matched verbatim against stored tag casing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TAG {
            Self::All
        } else {
            Self::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    fn admits(&self, node: &SignalNode) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => node.has_tag(tag),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_tag: TagFilter,
    pub search_query: String,
}

/// Filtered node/link subset. Derived, never mutated in place; every
/// recomputation produces a fresh value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleGraph {
    pub nodes: Vec<SignalNode>,
    pub links: Vec<SignalLink>,
}

impl VisibleGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn contains(&self, id: &SignalId) -> bool {
        self.nodes.iter().any(|node| &node.id == id)
    }

    pub fn node(&self, id: &SignalId) -> Option<&SignalNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn as_graph(&self) -> SignalGraph {
        SignalGraph {
            nodes: self.nodes.clone(),
            links: self.links.clone(),
        }
    }
}

/// Applies the filter state to a raw dataset. The tag and search predicates
/// are conjunctive and independent, so their order is immaterial; links
/// survive only when both resolved endpoints survive.
pub fn filter(raw: &SignalGraph, state: &FilterState) -> VisibleGraph {
    let query = state.search_query.trim().to_lowercase();

    let nodes = raw
        .nodes
        .iter()
        .filter(|node| state.active_tag.admits(node))
        .filter(|node| {
            if query.is_empty() {
                return true;
            }
            node.display_label()
                .is_some_and(|label| label.to_lowercase().contains(&query))
        })
        .cloned()
        .collect::<Vec<_>>();

    let kept = nodes.iter().map(|node| &node.id).collect::<HashSet<_>>();
    let links = raw
        .links
        .iter()
        .filter(|link| {
            let (source, target) = link.endpoints();
            kept.contains(source) && kept.contains(target)
        })
        .cloned()
        .collect::<Vec<_>>();

    VisibleGraph { nodes, links }
}

/// Distinct tags across the raw dataset, with the `ALL` sentinel first and
/// the rest in lexicographic order. Always computed from the unfiltered
/// dataset so narrowing never removes selector entries.
pub fn unique_tags(raw: &SignalGraph) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for node in &raw.nodes {
        for tag in &node.tags {
            tags.insert(tag.clone());
        }
    }

    let mut out = Vec::with_capacity(tags.len() + 1);
    out.push(ALL_TAG.to_string());
    out.extend(tags.into_iter().filter(|tag| tag != ALL_TAG));
    out
}
