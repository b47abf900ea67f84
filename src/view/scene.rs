use serde::Serialize;

use crate::graph::{SignalId, VisibleGraph};
use crate::palette;

pub const NODE_SIZE: f32 = 15.0;
pub const NODE_SHAPE: &str = "dot";
pub const LABEL_COLOR: &str = "#fff";
pub const LABEL_FONT_SIZE: u32 = 12;
pub const LABEL_FONT_FACE: &str = "monospace";
pub const EDGE_COLOR: &str = "#06b6d4";
pub const EDGE_OPACITY: f32 = 0.2;
pub const EDGE_WIDTH: f32 = 1.0;

/// Render payload handed to the layout collaborator: one entry per visible
/// node and link, with display encodings already resolved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LabelFont {
    pub color: &'static str,
    pub size: u32,
    pub face: &'static str,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            color: LABEL_COLOR,
            size: LABEL_FONT_SIZE,
            face: LABEL_FONT_FACE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: SignalId,
    pub label: String,
    pub color: &'static str,
    pub size: f32,
    pub shape: &'static str,
    pub font: LabelFont,
    /// Hover tooltip. The raw content blob when present, else the label.
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneEdge {
    pub from: SignalId,
    pub to: SignalId,
    pub color: &'static str,
    pub opacity: f32,
    pub width: f32,
}

pub fn build_scene(visible: &VisibleGraph) -> Scene {
    let nodes = visible
        .nodes
        .iter()
        .map(|node| {
            let label = node.title();
            let title = node
                .full_content
                .as_deref()
                .filter(|content| !content.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| label.clone());

            SceneNode {
                id: node.id.clone(),
                color: palette::primary_color(&node.tags),
                size: NODE_SIZE,
                shape: NODE_SHAPE,
                font: LabelFont::default(),
                title,
                label,
            }
        })
        .collect();

    let edges = visible
        .links
        .iter()
        .map(|link| {
            let (source, target) = link.endpoints();
            SceneEdge {
                from: source.clone(),
                to: target.clone(),
                color: EDGE_COLOR,
                opacity: EDGE_OPACITY,
                width: EDGE_WIDTH,
            }
        })
        .collect();

    Scene { nodes, edges }
}
