//! Owned HTML node tree walked by the converter.
//!
//! The parser boundary in [`crate::html`] copies the parsed document into this
//! structure. The tree is owned top-down and is only ever read by the walker.

/// The kind of a node, fixed when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Synthesized document root
    Document,
    /// Element node with a tag name and attributes
    Element,
    /// Text node with a payload
    Text,
}

/// A node in the parsed HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    node_type: NodeType,

    /// Lowercase tag name, empty unless this is an element
    tag: String,

    /// Attributes in source order, only populated for elements
    attributes: Vec<(String, String)>,

    /// Text payload, only present for text nodes
    value: Option<String>,

    /// Child nodes in document order
    children: Vec<Node>,
}

impl Node {
    /// Create the document root
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            tag: String::new(),
            attributes: Vec::new(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag_name.to_lowercase(),
            attributes: Vec::new(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag: String::new(),
            attributes: Vec::new(),
            value: Some(content.to_string()),
            children: Vec::new(),
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Lowercase tag name; empty for text and document nodes
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Text payload of a text node
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Get an attribute value by name (names compare case-insensitively)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Add a child node.
    ///
    /// Text nodes never have children; a child added to one is dropped.
    pub fn add_child(&mut self, child: Node) {
        if self.is_text() {
            return;
        }
        self.children.push(child);
    }

    /// Concatenated text of this node and its descendants.
    ///
    /// Lets callers of [`crate::parse_html`] inspect the parsed text before rendering.
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value.clone().unwrap_or_default(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }
}

/// A reference to a node together with its parent's tag.
///
/// The tree carries no parent pointers, so the walker threads the parent tag
/// down alongside each child.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub node: &'a Node,
    parent_tag: Option<&'a str>,
}

impl<'a> NodeRef<'a> {
    /// Create a NodeRef without parent context (the root)
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            parent_tag: None,
        }
    }

    /// Create a NodeRef whose parent is `parent`.
    ///
    /// Only element parents contribute a tag.
    pub fn child_of(node: &'a Node, parent: &'a Node) -> Self {
        Self {
            node,
            parent_tag: parent.is_element().then(|| parent.tag_name()),
        }
    }

    /// Tag name of the immediate parent element, if any
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent_tag
    }

    /// Iterate over children, each carrying this node as parent context
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let parent = self.node;
        parent
            .children
            .iter()
            .map(move |child| NodeRef::child_of(child, parent))
    }
}
