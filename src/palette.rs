pub const DEFAULT_COLOR: &str = "#06b6d4";

/// Display color for a tag, matched case-insensitively against the fixed
/// registry. Unknown tags fall back to [`DEFAULT_COLOR`].
pub fn color_of(tag: &str) -> &'static str {
    match tag.to_uppercase().as_str() {
        "TECH" => "#06b6d4",    // cyan
        "SCIENCE" => "#8b5cf6", // violet
        "SPACE" => "#6366f1",   // indigo
        "AI" => "#ec4899",      // pink
        "MEDICAL" => "#10b981", // emerald
        "HISTORY" => "#f59e0b", // amber
        _ => DEFAULT_COLOR,
    }
}

/// Color for a node's tag list: the first tag decides, no tags means default.
pub fn primary_color(tags: &[String]) -> &'static str {
    tags.first()
        .map(|tag| color_of(tag))
        .unwrap_or(DEFAULT_COLOR)
}
