use log::{debug, warn};

use crate::graph::{
    FilterState, SignalGraph, SignalId, SignalNode, TagFilter, VisibleGraph, filter, unique_tags,
};

mod scene;

pub use scene::{
    EDGE_COLOR, EDGE_OPACITY, EDGE_WIDTH, LABEL_COLOR, LABEL_FONT_FACE, LABEL_FONT_SIZE,
    LabelFont, NODE_SHAPE, NODE_SIZE, Scene, SceneEdge, SceneNode, build_scene,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// Owner of all interactive graph state. Every mutation goes through a named
/// transition here; the visible subset is recomputed whenever a transition
/// actually changes one of its inputs, and reads stay cheap in between.
pub struct GraphViewState {
    raw: SignalGraph,
    filter_state: FilterState,
    selected: Option<SignalId>,
    hovered: Option<SignalId>,
    viewport: ViewportSize,
    render_revision: u64,
    visible_cache: VisibleGraph,
}

impl Default for GraphViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphViewState {
    pub fn new() -> Self {
        Self {
            raw: SignalGraph::default(),
            filter_state: FilterState::default(),
            selected: None,
            hovered: None,
            viewport: ViewportSize::default(),
            render_revision: 0,
            visible_cache: VisibleGraph::default(),
        }
    }

    pub fn with_graph(raw: SignalGraph) -> Self {
        let mut state = Self::new();
        state.set_raw_graph(raw);
        state
    }

    /// Wholesale dataset replacement. Selection survives when the new dataset
    /// still carries the selected id; the rebuild afterwards clears it if the
    /// active filter now hides it.
    pub fn set_raw_graph(&mut self, raw: SignalGraph) {
        if let Some(selected) = &self.selected
            && !raw.contains(selected)
        {
            self.selected = None;
        }
        self.raw = raw;
        self.rebuild_visible();
    }

    /// Applies a completed refresh. A failed fetch leaves every field as it
    /// was; stale data beats no data.
    pub fn absorb_refresh(&mut self, result: Result<SignalGraph, String>) {
        match result {
            Ok(raw) => self.set_raw_graph(raw),
            Err(error) => warn!("graph refresh failed; keeping current dataset: {error}"),
        }
    }

    pub fn set_active_tag(&mut self, tag: TagFilter) {
        if self.filter_state.active_tag != tag {
            self.filter_state.active_tag = tag;
            self.rebuild_visible();
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter_state.search_query != query {
            self.filter_state.search_query = query;
            self.rebuild_visible();
        }
    }

    /// Selects a node from the current visible subset. Hidden or unknown ids
    /// are ignored; returns whether the selection landed.
    pub fn select_node(&mut self, id: &SignalId) -> bool {
        if self.visible_cache.contains(id) {
            self.selected = Some(id.clone());
            true
        } else {
            debug!("ignoring selection of hidden node {id}");
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn on_hover(&mut self, id: Option<&SignalId>) {
        self.hovered = id.filter(|&id| self.visible_cache.contains(id)).cloned();
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = ViewportSize { width, height };
    }

    pub fn visible(&self) -> &VisibleGraph {
        &self.visible_cache
    }

    pub fn unique_tags(&self) -> Vec<String> {
        unique_tags(&self.raw)
    }

    pub fn raw_graph(&self) -> &SignalGraph {
        &self.raw
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    pub fn selected_id(&self) -> Option<&SignalId> {
        self.selected.as_ref()
    }

    /// Full record behind the selection, for the detail panel.
    pub fn selected_node(&self) -> Option<&SignalNode> {
        self.selected
            .as_ref()
            .and_then(|id| self.visible_cache.node(id))
    }

    pub fn hovered_id(&self) -> Option<&SignalId> {
        self.hovered.as_ref()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Bumped once per recomputation of the visible subset.
    pub fn render_revision(&self) -> u64 {
        self.render_revision
    }

    fn rebuild_visible(&mut self) {
        self.render_revision = self.render_revision.wrapping_add(1);
        self.visible_cache = filter(&self.raw, &self.filter_state);

        if let Some(selected) = &self.selected
            && !self.visible_cache.contains(selected)
        {
            self.selected = None;
        }
        if let Some(hovered) = &self.hovered
            && !self.visible_cache.contains(hovered)
        {
            self.hovered = None;
        }
    }
}
