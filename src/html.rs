/// Attributes of an html node, rendered in insertion order
pub type Props = Vec<(String, String)>;

/// Node of the rendered html tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children. An untagged leaf is raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        props: Props,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        props: Props,
    },
}

impl HtmlNode {
    /// Untagged text node.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            props: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            props: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            props: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => {
                props.push((name.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn props(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Serialize the node and its children.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                props,
            } => {
                open_tag(tag, props, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            HtmlNode::Parent {
                tag,
                children,
                props,
            } => {
                open_tag(tag, props, out);
                for child in children {
                    child.write_html(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

/// Render attributes as ` name="value"` pairs, empty when there are none.
pub fn props_to_html(props: &[(String, String)]) -> String {
    props
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

fn open_tag(tag: &str, props: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&props_to_html(props));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
