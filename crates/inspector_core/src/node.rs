use crate::artifact::DownloadArtifact;
use crate::classify::ImageFormat;

/// The two falsy markers. Both are shown with the `falsy` class but stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falsy {
    Null,
    Undefined,
}

impl Falsy {
    pub fn label(self) -> &'static str {
        match self {
            Falsy::Null => "null",
            Falsy::Undefined => "undefined",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Scalar(String),
    Falsy(Falsy),
    StringLiteral(String),
    TextBlock(String),
    Image {
        format: ImageFormat,
        width: u32,
        height: u32,
        /// Inline preview reference (a data URI).
        preview: String,
    },
    Array,
    Object,
    Har {
        document: serde_json::Value,
        /// Set on the one HAR node that should be handed to the HAR viewer.
        opens_viewer: bool,
    },
    Diagnostic(String),
}

impl NodeKind {
    /// Presentation class for the kind.
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeKind::Scalar(_) => "scalar",
            NodeKind::Falsy(_) => "falsy",
            NodeKind::StringLiteral(_) => "string-literal",
            NodeKind::TextBlock(_) => "text-block",
            NodeKind::Image { .. } => "image",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
            NodeKind::Har { .. } => "har",
            NodeKind::Diagnostic(_) => "diagnostic",
        }
    }
}

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode {
    /// Originating key; `None` for the root and for array elements.
    pub label: Option<String>,
    pub kind: NodeKind,
    pub children: Vec<DisplayNode>,
    pub artifacts: Vec<DownloadArtifact>,
}

impl DisplayNode {
    pub fn leaf(label: Option<String>, kind: NodeKind) -> Self {
        Self {
            label,
            kind,
            children: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn child(&self, label: &str) -> Option<&DisplayNode> {
        self.children
            .iter()
            .find(|child| child.label.as_deref() == Some(label))
    }

    /// Depth-first, pre-order walk over the node and all its descendants.
    pub fn walk(&self) -> Vec<&DisplayNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}
