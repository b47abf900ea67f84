use anyhow::{Context, Result};
use clap::Parser;

use signal_lattice::graph::{TagFilter, parse_dataset};
use signal_lattice::layout::PhysicsProfile;
use signal_lattice::palette;
use signal_lattice::util::ellipsize;
use signal_lattice::view::{GraphViewState, build_scene};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a dataset JSON file ({"nodes": [...], "links": [...]})
    #[arg(long)]
    dataset: String,

    /// Keep only nodes carrying this tag
    #[arg(long)]
    tag: Option<String>,

    /// Keep only nodes whose label contains this text (case-insensitive)
    #[arg(long)]
    query: Option<String>,

    /// Print the tag selector entries for the dataset and exit
    #[arg(long)]
    list_tags: bool,

    /// Emit the annotated scene as JSON instead of the plain report
    #[arg(long)]
    scene: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.dataset)
        .with_context(|| format!("failed to read dataset from {}", args.dataset))?;
    let graph = parse_dataset(&raw)?;

    let mut state = GraphViewState::with_graph(graph);
    if let Some(tag) = &args.tag {
        state.set_active_tag(TagFilter::from_label(tag));
    }
    if let Some(query) = &args.query {
        state.set_search_query(query.clone());
    }

    if args.list_tags {
        for tag in state.unique_tags() {
            println!("{tag}");
        }
        return Ok(());
    }

    if args.scene {
        let payload = serde_json::json!({
            "scene": build_scene(state.visible()),
            "physics": PhysicsProfile::default(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let raw_nodes = state.raw_graph().node_count();
    let raw_links = state.raw_graph().link_count();
    let visible = state.visible();

    for node in &visible.nodes {
        println!(
            "{:>8}  {:<48}  {}",
            node.id.to_string(),
            ellipsize(&node.title(), 48),
            palette::primary_color(&node.tags),
        );
    }
    println!(
        "visible: {} of {} nodes, {} of {} links (tag: {})",
        visible.node_count(),
        raw_nodes,
        visible.link_count(),
        raw_links,
        state.filter_state().active_tag.label(),
    );

    Ok(())
}
