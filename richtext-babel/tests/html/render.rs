//! Rendering tests for the HTML format (Lexical JSON → HTML fragment)
//!
//! These go through the JSON boundary, the way the site calls the renderer.

use crate::common::load_fixture;
use insta::assert_snapshot;
use richtext_babel::formats::html::{
    render_nodes, serialize_to_html, HtmlOptions, DEFAULT_MAX_DEPTH,
};
use richtext_babel::model::from_json::nodes_from_value;
use richtext_babel::{render, render_document};
use serde_json::{json, Value};

fn html(nodes: Value) -> String {
    render(&nodes)
}

fn trusted(nodes: Value) -> String {
    render_nodes(&nodes_from_value(&nodes), &HtmlOptions::trusted())
}

// ============================================================================
// EMPTY AND MALFORMED INPUT
// ============================================================================

#[test]
fn test_malformed_documents_render_empty() {
    for doc in [
        Value::Null,
        json!({}),
        json!({"root": {}}),
        json!({"root": {"children": []}}),
        json!({"root": {"children": null}}),
        json!("<p>not a document</p>"),
    ] {
        assert_eq!(render_document(&doc), "", "{doc}");
    }
}

#[test]
fn test_non_sequence_renders_empty() {
    assert_eq!(html(Value::Null), "");
    assert_eq!(html(json!({"type": "paragraph", "children": []})), "");
    assert_eq!(html(json!(7)), "");
    assert_eq!(html(json!([])), "");
}

#[test]
fn test_unknown_childless_nodes_render_empty() {
    let nodes = json!([
        {"type": "upload", "value": {"id": 1}},
        {"type": "horizontalrule"},
        {"text": "no type"},
        {},
        null
    ]);
    assert_eq!(html(nodes), "");
}

#[test]
fn test_containers_without_children_render_empty_wrappers() {
    let nodes = json!([
        {"type": "paragraph"},
        {"type": "quote", "children": "oops"},
        {"type": "listitem"}
    ]);
    assert_eq!(html(nodes), "<p></p><blockquote></blockquote><li></li>");
}

// ============================================================================
// BLOCKS
// ============================================================================

#[test]
fn test_paragraph_end_to_end() {
    let nodes = json!([{
        "type": "paragraph",
        "children": [
            {"type": "text", "text": "Hello", "format": 1},
            {"type": "linebreak"},
            {"type": "text", "text": "world"}
        ]
    }]);
    assert_eq!(html(nodes), "<p><strong>Hello</strong><br />world</p>");
}

#[test]
fn test_heading_tag_fallback() {
    let nodes = json!([{"type": "heading", "tag": "h9", "children": [{"type": "text", "text": "X"}]}]);
    assert_eq!(html(nodes), "<h3>X</h3>");

    let nodes = json!([{"type": "heading", "children": [{"type": "text", "text": "X"}]}]);
    assert_eq!(html(nodes), "<h3>X</h3>");
}

#[test]
fn test_heading_levels() {
    let nodes = json!([
        {"type": "heading", "tag": "h1", "children": [{"type": "text", "text": "a"}]},
        {"type": "heading", "tag": "h6", "children": [{"type": "text", "text": "b"}]}
    ]);
    assert_eq!(html(nodes), "<h1>a</h1><h6>b</h6>");
}

#[test]
fn test_legacy_heading_types() {
    let nodes = json!([
        {"type": "h2", "children": [{"type": "text", "text": "Equipo"}]},
        {"type": "h4", "tag": "h1", "children": []}
    ]);
    assert_eq!(html(nodes), "<h2>Equipo</h2><h4></h4>");
}

#[test]
fn test_ordered_list() {
    let nodes = json!([{
        "type": "list",
        "listType": "number",
        "children": [
            {"type": "listitem", "children": [{"type": "text", "text": "one"}]},
            {"type": "li", "children": [{"type": "text", "text": "two"}]}
        ]
    }]);
    assert_eq!(html(nodes), "<ol><li>one</li><li>two</li></ol>");

    let nodes = json!([{"type": "list", "tag": "ol", "children": []}]);
    assert_eq!(html(nodes), "<ol></ol>");
}

#[test]
fn test_unordered_list() {
    let nodes = json!([{
        "type": "list",
        "children": [{"type": "listitem", "children": [{"type": "text", "text": "one"}]}]
    }]);
    assert_eq!(html(nodes), "<ul><li>one</li></ul>");

    let nodes = json!([{"type": "list", "listType": "check", "children": []}]);
    assert_eq!(html(nodes), "<ul></ul>");
}

#[test]
fn test_nested_list() {
    let nodes = json!([{
        "type": "list",
        "children": [{
            "type": "listitem",
            "children": [
                {"type": "text", "text": "outer"},
                {"type": "list", "listType": "number", "children": [
                    {"type": "listitem", "children": [{"type": "text", "text": "inner"}]}
                ]}
            ]
        }]
    }]);
    assert_eq!(html(nodes), "<ul><li>outer<ol><li>inner</li></ol></li></ul>");
}

#[test]
fn test_quote() {
    let nodes = json!([{"type": "quote", "children": [{"type": "text", "text": "Menos es más", "format": 2}]}]);
    assert_snapshot!(html(nodes), @"<blockquote><em>Menos es más</em></blockquote>");
}

// ============================================================================
// LINKS
// ============================================================================

#[test]
fn test_link_new_tab_gets_default_rel() {
    let nodes = json!([{
        "type": "link",
        "url": "https://x.test",
        "newTab": true,
        "children": [{"type": "text", "text": "go"}]
    }]);
    assert_snapshot!(html(nodes), @r#"<a href="https://x.test" target="_blank" rel="noopener noreferrer">go</a>"#);
}

#[test]
fn test_link_same_tab_has_no_rel() {
    let nodes = json!([{"type": "link", "url": "/work/7", "children": [{"type": "text", "text": "Casa"}]}]);
    assert_snapshot!(html(nodes), @r#"<a href="/work/7">Casa</a>"#);
}

#[test]
fn test_link_explicit_rel_wins() {
    let nodes = json!([{
        "type": "link",
        "url": "https://x.test",
        "newTab": true,
        "rel": "nofollow",
        "children": []
    }]);
    assert_snapshot!(html(nodes), @r#"<a href="https://x.test" target="_blank" rel="nofollow"></a>"#);
}

#[test]
fn test_link_url_from_fields() {
    let nodes = json!([{
        "type": "link",
        "fields": {"url": "mailto:hola@studio.test", "newTab": false},
        "children": [{"type": "text", "text": "Escríbenos"}]
    }]);
    assert_snapshot!(html(nodes), @r#"<a href="mailto:hola@studio.test">Escríbenos</a>"#);
}

#[test]
fn test_link_without_url_points_to_hash() {
    let nodes = json!([{"type": "link", "children": [{"type": "text", "text": "x"}]}]);
    assert_snapshot!(html(nodes), @r##"<a href="#">x</a>"##);
}

#[test]
fn test_link_with_script_scheme_is_neutralized() {
    let nodes = json!([{"type": "link", "url": "javascript:alert(1)", "children": []}]);
    assert_eq!(html(nodes.clone()), r##"<a href="#"></a>"##);
    assert_eq!(trusted(nodes), r#"<a href="javascript:alert(1)"></a>"#);
}

// ============================================================================
// TEXT FORMATTING
// ============================================================================

#[test]
fn test_format_zero_is_bare_text() {
    assert_eq!(html(json!([{"type": "text", "text": "TEXT", "format": 0}])), "TEXT");
    assert_eq!(html(json!([{"type": "text", "text": "TEXT"}])), "TEXT");
}

#[test]
fn test_bold_italic_nesting() {
    let nodes = json!([{"type": "text", "text": "TEXT", "format": 3}]);
    assert_eq!(html(nodes), "<em><strong>TEXT</strong></em>");
}

#[test]
fn test_each_format_bit() {
    let cases = [
        (1, "<strong>t</strong>"),
        (2, "<em>t</em>"),
        (4, "<u>t</u>"),
        (8, "<s>t</s>"),
        (16, "<code>t</code>"),
        (32, "<sub>t</sub>"),
        (64, "<sup>t</sup>"),
    ];
    for (bit, expected) in cases {
        let nodes = json!([{"type": "text", "text": "t", "format": bit}]);
        assert_eq!(html(nodes), expected, "format {bit}");
    }
}

#[test]
fn test_code_is_innermost() {
    let nodes = json!([{"type": "text", "text": "x", "format": 16 | 1 | 64}]);
    assert_eq!(html(nodes), "<sup><strong><code>x</code></strong></sup>");
}

#[test]
fn test_style_wraps_outermost() {
    let nodes = json!([{"type": "text", "text": "x", "format": 1, "style": "color: #c00"}]);
    assert_snapshot!(html(nodes), @r#"<span style="color: #c00"><strong>x</strong></span>"#);
}

#[test]
fn test_empty_style_is_ignored() {
    let nodes = json!([{"type": "text", "text": "x", "style": ""}]);
    assert_eq!(html(nodes), "x");
}

// ============================================================================
// PASS-THROUGH AND ORDER
// ============================================================================

#[test]
fn test_unknown_wrapper_passes_through() {
    let paragraph = json!({"type": "paragraph", "children": [{"type": "text", "text": "inside"}]});
    let wrapped = json!([{"type": "block", "fields": {"blockType": "banner"}, "children": [paragraph.clone()]}]);
    assert_eq!(html(wrapped), html(json!([paragraph])));
}

#[test]
fn test_untyped_node_with_children_passes_through() {
    let nodes = json!([{"children": [{"type": "linebreak"}, {"type": "text", "text": "a"}]}]);
    assert_eq!(html(nodes), "<br />a");
}

#[test]
fn test_siblings_concatenate_in_order() {
    let a = json!({"type": "paragraph", "children": [{"type": "text", "text": "A"}]});
    let b = json!({"type": "quote", "children": [{"type": "text", "text": "B"}]});
    let joined = html(json!([a.clone(), b.clone()]));
    assert_eq!(joined, format!("{}{}", html(json!([a])), html(json!([b]))));
    assert_eq!(joined, "<p>A</p><blockquote>B</blockquote>");
}

// ============================================================================
// ESCAPING
// ============================================================================

#[test]
fn test_text_is_escaped_by_default() {
    let nodes = json!([{"type": "paragraph", "children": [{"type": "text", "text": "Tom & <Jerry>"}]}]);
    assert_eq!(html(nodes.clone()), "<p>Tom &amp; &lt;Jerry&gt;</p>");
    assert_eq!(trusted(nodes), "<p>Tom & <Jerry></p>");
}

#[test]
fn test_style_attribute_is_escaped_by_default() {
    let nodes = json!([{"type": "text", "text": "x", "style": "\"><script>"}]);
    assert_snapshot!(html(nodes), @r#"<span style="&quot;&gt;&lt;script&gt;">x</span>"#);
}

// ============================================================================
// DEPTH LIMIT
// ============================================================================

fn nested_quotes(depth: usize) -> Value {
    let mut node = json!({"type": "text", "text": "bottom"});
    for _ in 0..depth {
        node = json!({"type": "quote", "children": [node]});
    }
    json!([node])
}

#[test]
fn test_depth_limit_truncates_deep_content() {
    let nodes = nodes_from_value(&nested_quotes(3));
    let options = HtmlOptions::default().with_max_depth(Some(3));
    assert_eq!(
        render_nodes(&nodes, &options),
        "<blockquote><blockquote><blockquote></blockquote></blockquote></blockquote>"
    );

    let options = HtmlOptions::default().with_max_depth(Some(4));
    assert_eq!(
        render_nodes(&nodes, &options),
        "<blockquote><blockquote><blockquote>bottom</blockquote></blockquote></blockquote>"
    );
}

/// Take a nested value apart one level at a time; dropping it whole would
/// recurse once per level.
fn dismantle(mut value: Value) {
    while let Some(children) = value.get_mut(0).and_then(|node| node.get_mut("children")) {
        let next = children.take();
        value = next;
    }
}

#[test]
fn test_thousands_of_levels_render_up_to_the_limit() {
    let nodes = nested_quotes(5_000);
    let expected = format!(
        "{}{}",
        "<blockquote>".repeat(DEFAULT_MAX_DEPTH),
        "</blockquote>".repeat(DEFAULT_MAX_DEPTH)
    );

    assert_eq!(render(&nodes), expected);

    let mut doc = json!({"root": {"children": nodes}});
    assert_eq!(render_document(&doc), expected);

    dismantle(doc["root"]["children"].take());
}

#[test]
fn test_default_depth_renders_realistic_nesting() {
    let html = render(&nested_quotes(20));
    assert!(html.contains("bottom"));
    assert_eq!(html.matches("<blockquote>").count(), 20);
}

// ============================================================================
// FULL DOCUMENTS
// ============================================================================

#[test]
fn test_project_description_fixture() {
    let doc = load_fixture("project_description.json");
    assert_snapshot!(
        serialize_to_html(&doc, &HtmlOptions::default()),
        @r#"<h2>Casa en la ladera</h2><p>Vivienda unifamiliar de <strong>madera y piedra</strong> en la sierra.<br />Superficie: 180 m<sup>2</sup></p><ul><li>Estructura de CLT</li><li><em>Cubierta vegetal</em></li></ul><blockquote>La casa mira al valle.</blockquote><p>Fotografía: <a href="https://photo.example/ladera" target="_blank" rel="noopener noreferrer">Estudio Foto</a></p>"#
    );
}

#[test]
fn test_trusted_mode_matches_default_for_plain_content() {
    let doc = load_fixture("project_description.json");
    assert_eq!(
        serialize_to_html(&doc, &HtmlOptions::trusted()),
        serialize_to_html(&doc, &HtmlOptions::default())
    );
}
