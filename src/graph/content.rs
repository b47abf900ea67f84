const TAGS_MARKER: &str = "| Tags: ";
const INSIGHT_MARKER: &str = "| Insight: ";
const LINK_MARKER: &str = "| Link: ";

/// Structured view of a node's `full_content` blob. The wire convention is a
/// single pipe-delimited string: a leading title, then optional labeled
/// segments for tags, insight text, and a source link. A literal `|` inside a
/// segment cannot be represented; the segment ends at the next pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeContent {
    pub title: String,
    pub tags: Vec<String>,
    pub insight: String,
    pub link: Option<String>,
}

impl NodeContent {
    /// Extracts the labeled segments. Total: absent segments come back empty,
    /// arbitrary junk yields at worst an empty record.
    pub fn parse(raw: &str) -> Self {
        let title = raw.split('|').next().unwrap_or(raw).trim().to_string();

        let tags = labeled_segment(raw, TAGS_MARKER)
            .map(|segment| {
                segment
                    .split(',')
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let insight = labeled_segment(raw, INSIGHT_MARKER)
            .unwrap_or_default()
            .to_string();

        let link = labeled_segment(raw, LINK_MARKER)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Self {
            title,
            tags,
            insight,
            link,
        }
    }

    /// Renders the record back into the wire convention, skipping empty
    /// segments. `parse(compose(..))` returns the same record as long as no
    /// field contains a pipe.
    pub fn compose(&self) -> String {
        let mut out = self.title.trim().to_string();

        if !self.tags.is_empty() {
            out.push_str(" | Tags: ");
            out.push_str(&self.tags.join(", "));
        }

        if !self.insight.trim().is_empty() {
            out.push_str(" | Insight: ");
            out.push_str(self.insight.trim());
        }

        if let Some(link) = self.link.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            out.push_str(" | Link: ");
            out.push_str(link);
        }

        out
    }
}

fn labeled_segment<'a>(raw: &'a str, marker: &str) -> Option<&'a str> {
    let start = raw.find(marker)? + marker.len();
    let rest = &raw[start..];
    let segment = match rest.find('|') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(segment.trim())
}
