use std::fmt;

use serde::{Deserialize, Serialize};

use super::content::NodeContent;

/// Node identifier. Backends serialize these as JSON strings or integers
/// depending on age of the record; both decode to the same opaque key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SignalId(String);

impl SignalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SignalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SignalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for SignalId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for SignalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self(text),
            Repr::Number(number) => Self(number.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignalNode {
    pub id: SignalId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub tags: Vec<String>,
    #[serde(default, alias = "fullContent")]
    pub full_content: Option<String>,
}

/// Untagged records arrive with `"tags": null` as well as with the field
/// missing; both decode as no tags.
fn tags_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SignalNode {
    /// Stored display label, preferring `label` over the legacy `name` field.
    /// Empty strings count as absent, as they do on the wire.
    pub fn display_label(&self) -> Option<&str> {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| self.name.as_deref().filter(|name| !name.is_empty()))
    }

    /// Display title with the `Node <id>` fallback for unlabeled records.
    pub fn title(&self) -> String {
        match self.display_label() {
            Some(label) => label.to_string(),
            None => format!("Node {}", self.id),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    pub fn content(&self) -> NodeContent {
        NodeContent::parse(self.full_content.as_deref().unwrap_or_default())
    }
}

/// Link endpoint as it appears on the wire: either a bare id, or a node
/// reference the collaborator already resolved in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LinkEnd {
    Bare(SignalId),
    Resolved { id: SignalId },
}

impl LinkEnd {
    pub fn resolved_id(&self) -> &SignalId {
        match self {
            Self::Bare(id) => id,
            Self::Resolved { id } => id,
        }
    }
}

impl From<SignalId> for LinkEnd {
    fn from(id: SignalId) -> Self {
        Self::Bare(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignalLink {
    pub source: LinkEnd,
    pub target: LinkEnd,
}

impl SignalLink {
    pub fn new(source: impl Into<SignalId>, target: impl Into<SignalId>) -> Self {
        Self {
            source: LinkEnd::Bare(source.into()),
            target: LinkEnd::Bare(target.into()),
        }
    }

    pub fn endpoints(&self) -> (&SignalId, &SignalId) {
        (self.source.resolved_id(), self.target.resolved_id())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignalGraph {
    #[serde(default)]
    pub nodes: Vec<SignalNode>,
    #[serde(default)]
    pub links: Vec<SignalLink>,
}

impl SignalGraph {
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
}
