use inspector_logging::inspector_warn;

use crate::artifact::{DownloadArtifact, PayloadEncoding};
use crate::classify::{ClassifiedString, ContentClassifier};
use crate::har::is_har_document;
use crate::node::{DisplayNode, Falsy, NodeKind};
use crate::order::ordered_keys;
use crate::value::{DecodedResult, Scalar};

/// Builds display trees from decoded results.
///
/// One renderer lives for a whole page session: the HAR viewer latch it owns makes
/// sure only the first HAR document ever rendered is flagged for the viewer.
#[derive(Debug)]
pub struct ValueRenderer {
    classifier: ContentClassifier,
    har_viewer_loaded: bool,
}

impl ValueRenderer {
    pub fn new(classifier: ContentClassifier) -> Self {
        Self {
            classifier,
            har_viewer_loaded: false,
        }
    }

    pub fn har_viewer_loaded(&self) -> bool {
        self.har_viewer_loaded
    }

    /// Renders `value` from scratch. `file_base` names the downloadable artifacts.
    pub fn render(&mut self, value: &DecodedResult, file_base: &str) -> DisplayNode {
        self.render_node(None, value, file_base)
    }

    fn render_node(
        &mut self,
        label: Option<String>,
        value: &DecodedResult,
        file_base: &str,
    ) -> DisplayNode {
        match value {
            DecodedResult::Scalar(scalar) => DisplayNode::leaf(label, scalar_kind(scalar)),
            DecodedResult::Text(text) => self.render_text(label, text, file_base),
            DecodedResult::Record(_) if is_har_document(value) => {
                self.render_har(label, value, file_base)
            }
            DecodedResult::Record(entries) => {
                let mut node = DisplayNode::leaf(label, NodeKind::Object);
                for key in ordered_keys(entries.iter().map(|(key, _)| key.as_str())) {
                    if let Some(child) = value.get(key) {
                        let rendered = self.render_node(Some(key.to_string()), child, file_base);
                        node.children.push(rendered);
                    }
                }
                node
            }
            DecodedResult::Sequence(items) => {
                let mut node = DisplayNode::leaf(label, NodeKind::Array);
                for item in items {
                    let rendered = self.render_node(None, item, file_base);
                    node.children.push(rendered);
                }
                node
            }
            DecodedResult::Opaque(description) => {
                inspector_warn!("cannot render value: {description}");
                DisplayNode::leaf(label, NodeKind::Diagnostic("cannot render".to_string()))
            }
        }
    }

    fn render_text(&self, label: Option<String>, text: &str, file_base: &str) -> DisplayNode {
        match self.classifier.classify(text) {
            ClassifiedString::ShortLiteral(escaped) => {
                DisplayNode::leaf(label, NodeKind::StringLiteral(escaped))
            }
            ClassifiedString::LongBlock(block) => {
                let artifact = DownloadArtifact::build(
                    file_base,
                    "txt",
                    "text/plain",
                    PayloadEncoding::Utf8,
                    block.as_str(),
                );
                let mut node = DisplayNode::leaf(label, NodeKind::TextBlock(block));
                node.artifacts.push(artifact);
                node
            }
            ClassifiedString::ImagePayload {
                data,
                format,
                width,
                height,
            } => {
                let artifact = DownloadArtifact::build(
                    file_base,
                    format.subtype(),
                    &format.mime_type(),
                    PayloadEncoding::Base64,
                    data,
                );
                let preview = artifact.data_uri();
                let mut node = DisplayNode::leaf(
                    label,
                    NodeKind::Image {
                        format,
                        width,
                        height,
                        preview,
                    },
                );
                node.artifacts.push(artifact);
                node
            }
        }
    }

    fn render_har(
        &mut self,
        label: Option<String>,
        value: &DecodedResult,
        file_base: &str,
    ) -> DisplayNode {
        let document = value.to_json();
        let artifact = DownloadArtifact::build(
            file_base,
            "har",
            "application/json",
            PayloadEncoding::Utf8,
            document.to_string(),
        );
        let opens_viewer = !self.har_viewer_loaded;
        self.har_viewer_loaded = true;

        let mut node = DisplayNode::leaf(
            label,
            NodeKind::Har {
                document,
                opens_viewer,
            },
        );
        node.artifacts.push(artifact);
        node
    }
}

fn scalar_kind(scalar: &Scalar) -> NodeKind {
    match scalar {
        Scalar::Null => NodeKind::Falsy(Falsy::Null),
        Scalar::Absent => NodeKind::Falsy(Falsy::Undefined),
        Scalar::Bool(b) => NodeKind::Scalar(b.to_string()),
        Scalar::Number(n) => NodeKind::Scalar(n.to_string()),
    }
}
