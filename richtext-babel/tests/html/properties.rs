//! Property tests for the HTML renderer.

use proptest::prelude::*;
use richtext_babel::render;
use serde_json::{json, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        ("[a-zA-Z0-9 &<>\"']{0,12}", 0u32..256)
            .prop_map(|(text, format)| json!({"type": "text", "text": text, "format": format})),
        Just(json!({"type": "linebreak"})),
        Just(json!({"type": "upload", "value": {"id": 1}})),
        Just(json!(null)),
    ]
}

fn node() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4);
        prop_oneof![
            children
                .clone()
                .prop_map(|c| json!({"type": "paragraph", "children": c})),
            (children.clone(), prop::option::of("h[0-9]"))
                .prop_map(|(c, tag)| json!({"type": "heading", "tag": tag, "children": c})),
            (children.clone(), any::<bool>()).prop_map(|(c, ordered)| {
                let list_type = if ordered { "number" } else { "bullet" };
                json!({"type": "list", "listType": list_type, "children": c})
            }),
            children
                .clone()
                .prop_map(|c| json!({"type": "listitem", "children": c})),
            children
                .clone()
                .prop_map(|c| json!({"type": "quote", "children": c})),
            (children.clone(), any::<bool>()).prop_map(|(c, new_tab)| {
                json!({"type": "link", "url": "https://x.test/a", "newTab": new_tab, "children": c})
            }),
            children.prop_map(|c| json!({"type": "block", "children": c})),
        ]
    })
}

fn nodes() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(node(), 0..6)
}

proptest! {
    #[test]
    fn siblings_render_independently(items in nodes()) {
        let whole = render(&Value::Array(items.clone()));
        let pieces: String = items
            .into_iter()
            .map(|item| render(&Value::Array(vec![item])))
            .collect();
        prop_assert_eq!(whole, pieces);
    }

    #[test]
    fn unknown_wrappers_are_transparent(items in nodes(), kind in "[a-z]{1,10}") {
        prop_assume!(!matches!(
            kind.as_str(),
            "paragraph" | "heading" | "list" | "listitem" | "li" | "quote" | "link"
                | "linebreak" | "text"
        ));
        let wrapped = json!([{"type": kind, "children": items.clone()}]);
        prop_assert_eq!(render(&wrapped), render(&Value::Array(items)));
    }

    #[test]
    fn text_markup_is_always_escaped(text in "[a-z<>&]{1,16}", format in 0u32..128) {
        let html = render(&json!([{"type": "text", "text": &text, "format": format}]));
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        prop_assert!(html.contains(&escaped), "{html} does not contain {escaped}");

        let mut stripped = html.clone();
        for tag in ["code", "strong", "em", "u", "s", "sub", "sup"] {
            stripped = stripped
                .replace(&format!("<{tag}>"), "")
                .replace(&format!("</{tag}>"), "");
        }
        prop_assert_eq!(stripped, escaped);
    }

    #[test]
    fn arbitrary_json_renders_without_panicking(value in arbitrary_json()) {
        let _ = render(&value);
        let _ = richtext_babel::render_document(&json!({"root": {"children": value}}));
    }
}

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(Value::from),
        prop_oneof![
            Just("text"),
            Just("paragraph"),
            Just("link"),
            Just("heading"),
            Just("list"),
            Just("x"),
        ]
        .prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("type".to_string()),
                        Just("children".to_string()),
                        Just("text".to_string()),
                        Just("format".to_string()),
                        Just("url".to_string()),
                        Just("newTab".to_string()),
                        Just("fields".to_string()),
                        Just("tag".to_string()),
                    ],
                    inner
                ),
                0..6
            )
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}
