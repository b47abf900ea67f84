pub mod feed;
pub mod graph;
pub mod layout;
pub mod palette;
pub mod util;
pub mod view;

pub use graph::{FilterState, SignalGraph, SignalId, TagFilter, VisibleGraph};
pub use view::GraphViewState;
