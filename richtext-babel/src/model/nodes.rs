//! Core data structures for the document model.

use std::fmt;

/// Root of a rich-text field: the top-level node sequence of `root.children`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A single node of the document tree.
///
/// Every known Lexical node type has its own variant. Anything else lands in
/// [`Node::Unknown`], which keeps its children (if it had a children array) so
/// renderers can pass through it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Vec<Node>),
    Heading {
        level: HeadingLevel,
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        children: Vec<Node>,
    },
    ListItem(Vec<Node>),
    Quote(Vec<Node>),
    Link(Link),
    LineBreak,
    Text(Text),
    Unknown {
        kind: Option<String>,
        children: Option<Vec<Node>>,
    },
}

impl Node {
    /// Name of the node kind, used by tree visualizations and logs.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "Paragraph",
            Node::Heading { .. } => "Heading",
            Node::List { .. } => "List",
            Node::ListItem(_) => "ListItem",
            Node::Quote(_) => "Quote",
            Node::Link(_) => "Link",
            Node::LineBreak => "LineBreak",
            Node::Text(_) => "Text",
            Node::Unknown { .. } => "Unknown",
        }
    }

    /// Child nodes; empty for leaves and for unknown nodes without children.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(children)
            | Node::ListItem(children)
            | Node::Quote(children)
            | Node::Heading { children, .. }
            | Node::List { children, .. } => children,
            Node::Link(link) => &link.children,
            Node::Unknown {
                children: Some(children),
                ..
            } => children,
            Node::Unknown { children: None, .. } | Node::LineBreak | Node::Text(_) => &[],
        }
    }
}

/// Heading levels h1 through h6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Parse an `h1`..`h6` tag name. Anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// An inline link. `url` is `None` when neither the node nor its `fields`
/// carried one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub url: Option<String>,
    pub new_tab: bool,
    pub rel: Option<String>,
    pub children: Vec<Node>,
}

impl Link {
    /// The `rel` value to emit: the explicit one, or `noopener noreferrer`
    /// for links opening in a new tab.
    pub fn effective_rel(&self) -> Option<&str> {
        match &self.rel {
            Some(rel) => Some(rel.as_str()),
            None if self.new_tab => Some("noopener noreferrer"),
            None => None,
        }
    }
}

/// A run of text with its inline formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub text: String,
    pub format: TextFormat,
    pub style: Option<String>,
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn formatted(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
            style: None,
        }
    }
}

/// Lexical's inline format bitmask.
///
/// Bits outside the seven known flags are kept (so normalization is lossless)
/// but ignored by every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const NONE: TextFormat = TextFormat(0);
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 2);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 3);
    pub const CODE: TextFormat = TextFormat(1 << 4);
    pub const SUBSCRIPT: TextFormat = TextFormat(1 << 5);
    pub const SUPERSCRIPT: TextFormat = TextFormat(1 << 6);

    /// Known flags paired with their names, in wrapping order
    /// (innermost first).
    pub const FLAGS: [(TextFormat, &'static str); 7] = [
        (TextFormat::CODE, "code"),
        (TextFormat::BOLD, "bold"),
        (TextFormat::ITALIC, "italic"),
        (TextFormat::UNDERLINE, "underline"),
        (TextFormat::STRIKETHROUGH, "strikethrough"),
        (TextFormat::SUBSCRIPT, "subscript"),
        (TextFormat::SUPERSCRIPT, "superscript"),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        TextFormat(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: TextFormat) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Names of the known flags that are set, in wrapping order.
    pub fn names(self) -> Vec<&'static str> {
        Self::FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}
