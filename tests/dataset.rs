use signal_lattice::graph::{SignalId, parse_dataset};

#[test]
fn legacy_name_field_backs_the_label() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "name": "Old Record", "tags": []}], "links": []}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.nodes[0].display_label(), Some("Old Record"));
    assert_eq!(graph.nodes[0].title(), "Old Record");
}

#[test]
fn unlabeled_nodes_fall_back_to_their_id() {
    let graph =
        parse_dataset(r#"{"nodes": [{"id": 42}], "links": []}"#).expect("dataset should parse");

    assert_eq!(graph.nodes[0].display_label(), None);
    assert_eq!(graph.nodes[0].title(), "Node 42");
}

#[test]
fn camel_case_content_key_is_accepted() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "label": "X",
                       "fullContent": "X | Tags: AI | Insight: hidden channel"}],
            "links": []}"#,
    )
    .expect("dataset should parse");

    let content = graph.nodes[0].content();
    assert_eq!(content.tags, vec!["AI"]);
    assert_eq!(content.insight, "hidden channel");
}

#[test]
fn extra_link_fields_are_ignored() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1}, {"id": 2}],
            "links": [{"source": 1, "target": 2, "value": 3, "kind": "related"}]}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.link_count(), 1);
}

#[test]
fn duplicate_ids_keep_the_first_record() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "label": "first"}, {"id": 1, "label": "second"}],
            "links": []}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.node_count(), 1);
    let node = graph.node(&SignalId::from(1)).expect("node 1 survives");
    assert_eq!(node.display_label(), Some("first"));
}

#[test]
fn undecodable_elements_are_skipped_not_fatal() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "label": "good"}, {"label": "missing id"}, 7],
            "links": [{"source": 1, "target": 1}, "junk"]}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.link_count(), 1);
}

#[test]
fn null_tags_decode_as_an_untagged_node() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "label": "Null tags", "tags": null}], "links": []}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.node_count(), 1);
    assert!(graph.nodes[0].tags.is_empty());
    assert_eq!(graph.nodes[0].display_label(), Some("Null tags"));
}

#[test]
fn empty_labels_fall_back_like_missing_ones() {
    let graph = parse_dataset(
        r#"{"nodes": [{"id": 1, "label": "", "name": "Legacy Title"},
                      {"id": 2, "label": "", "name": ""}],
            "links": []}"#,
    )
    .expect("dataset should parse");

    assert_eq!(graph.nodes[0].display_label(), Some("Legacy Title"));
    assert_eq!(graph.nodes[0].title(), "Legacy Title");
    assert_eq!(graph.nodes[1].display_label(), None);
    assert_eq!(graph.nodes[1].title(), "Node 2");
}
