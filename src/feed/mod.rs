use serde::{Deserialize, Serialize};

mod taxonomy;

pub use taxonomy::{CATEGORY_TREE, CategoryGroup, CategoryTreeIndex};

/// Category names the feed endpoint accepts.
pub const FEED_CATEGORIES: [&str; 4] = ["ALL", "AI / TECH", "SCIENCE", "CYBERSEC"];

/// One feed item as the backend serializes it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Article {
    pub id: String,
    pub source: String,
    pub category: String,
    pub title: String,
    pub link: String,
    pub time: String,
    pub summary: String,
    #[serde(rename = "isLive")]
    pub is_live: bool,
}

/// AI annotation attached to an article. Wire keys are a mix of camel and
/// snake case; they are pinned here exactly as the analyst emits them.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Analysis {
    pub summary: String,
    #[serde(rename = "aiInsight")]
    pub ai_insight: String,
    pub action: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub impact_score: u32,
    #[serde(default)]
    pub trend_label: String,
    #[serde(default)]
    pub one_line_hook: String,
}
