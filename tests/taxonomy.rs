use signal_lattice::feed::CategoryTreeIndex;

fn live_index() -> CategoryTreeIndex {
    CategoryTreeIndex::new(
        ["AI", "TECH", "SCIENCE", "NEWS", "CYBERSEC"]
            .into_iter()
            .map(str::to_string),
    )
}

#[test]
fn default_expansion_matches_the_sidebar_layout() {
    let index = live_index();
    assert!(index.is_expanded("global_intel"));
    assert!(index.is_expanded("tech_ai"));
    assert!(!index.is_expanded("cyber_ops"));
}

#[test]
fn toggle_flips_exactly_one_group() {
    let mut index = live_index();

    index.toggle("cyber_ops");
    assert!(index.is_expanded("cyber_ops"));
    assert!(index.is_expanded("global_intel"));
    assert!(index.is_expanded("tech_ai"));

    index.toggle("cyber_ops");
    assert!(!index.is_expanded("cyber_ops"));
}

#[test]
fn unknown_group_ids_are_ignored() {
    let mut index = live_index();
    index.toggle("no_such_group");
    assert!(!index.is_expanded("no_such_group"));
    assert!(index.is_expanded("global_intel"));
}

#[test]
fn children_are_marked_real_only_when_the_backend_serves_them() {
    let index = live_index();

    assert!(index.is_real_category("AI"));
    assert!(index.is_real_category("CYBERSEC"));
    assert!(!index.is_real_category("Hacking"));
    assert!(!index.is_real_category("Civilization"));
}

#[test]
fn live_categories_can_be_replaced() {
    let mut index = live_index();
    assert!(index.is_real_category("AI"));

    index.set_live_categories(["HISTORY".to_string()]);
    assert!(!index.is_real_category("AI"));
    assert!(index.is_real_category("HISTORY"));
}

#[test]
fn every_group_exposes_its_static_children() {
    let index = live_index();
    let groups = index.groups();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].label, "GLOBAL INTEL");
    assert_eq!(groups[1].children, ["AI", "TECH", "DEV", "LLM Agents"]);
    assert_eq!(groups[2].icon, "shield");
}
