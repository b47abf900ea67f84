use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use super::model::{SignalGraph, SignalLink, SignalNode};

/// Decodes a raw dataset. Only syntactically invalid JSON is an error; a
/// well-formed value with the wrong shape degrades to the empty graph, and
/// undecodable or dangling elements are dropped individually.
pub fn parse_dataset(raw: &str) -> Result<SignalGraph> {
    let parsed: Value = serde_json::from_str(raw).context("invalid dataset JSON")?;
    Ok(dataset_from_value(&parsed))
}

fn dataset_from_value(parsed: &Value) -> SignalGraph {
    let Some(object) = parsed.as_object() else {
        warn!("dataset is not a JSON object; treating as empty");
        return SignalGraph::default();
    };

    let (Some(raw_nodes), Some(raw_links)) = (
        object.get("nodes").and_then(Value::as_array),
        object.get("links").and_then(Value::as_array),
    ) else {
        warn!("dataset is missing nodes or links; treating as empty");
        return SignalGraph::default();
    };

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for value in raw_nodes {
        match SignalNode::deserialize(value) {
            Ok(node) => nodes.push(node),
            Err(error) => warn!("skipping undecodable node: {error}"),
        }
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    let before = nodes.len();
    nodes.retain(|node| seen.insert(node.id.clone()));
    let duplicates = before - nodes.len();
    if duplicates > 0 {
        warn!("dropped {duplicates} nodes with duplicate ids");
    }

    let mut links = Vec::with_capacity(raw_links.len());
    for value in raw_links {
        match SignalLink::deserialize(value) {
            Ok(link) => links.push(link),
            Err(error) => warn!("skipping undecodable link: {error}"),
        }
    }

    let known = nodes.iter().map(|node| node.id.clone()).collect::<HashSet<_>>();
    let before = links.len();
    links.retain(|link| {
        let (source, target) = link.endpoints();
        known.contains(source) && known.contains(target)
    });
    let dangling = before - links.len();
    if dangling > 0 {
        warn!("dropped {dangling} links referencing unknown nodes");
    }

    debug!("dataset: {} nodes, {} links", nodes.len(), links.len());
    SignalGraph { nodes, links }
}
