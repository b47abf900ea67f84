mod content;
mod filter;
mod model;
mod parse;

pub use content::NodeContent;
pub use filter::{ALL_TAG, FilterState, TagFilter, VisibleGraph, filter, unique_tags};
pub use model::{LinkEnd, SignalGraph, SignalId, SignalLink, SignalNode};
pub use parse::parse_dataset;
