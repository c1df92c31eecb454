//! Icon mapping for tree visualization

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type,
/// as reported by [`Node::node_type`](crate::model::Node::node_type).
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "List" => "☰",
        "ListItem" => "•",
        "Quote" => "\"",
        "Link" => "⊕",
        "LineBreak" => "↵",
        "Text" => "◦",
        _ => "○",
    }
}
