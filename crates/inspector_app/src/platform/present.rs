//! Terminal presentation of the page view model.

use inspector_core::{
    DisplayNode, ErrorReport, HarViewer, HarViewerSetup, NodeKind, PageViewModel,
};
use serde_json::Value;

const BLOCK_PREVIEW_CHARS: usize = 72;

/// Lines for the whole page: status, then the tree or the error panel.
pub fn render_page(view: &PageViewModel) -> Vec<String> {
    let mut lines = vec![format!("Status: {}", view.status_text)];
    if let Some(reason) = &view.abort_reason {
        lines.push(format!("  {reason}"));
    }
    if let Some(report) = &view.error {
        lines.extend(render_error(report));
    }
    if let Some(tree) = &view.tree {
        render_node(tree, None, 0, &mut lines);
    }
    lines
}

pub fn render_error(report: &ErrorReport) -> Vec<String> {
    let mut lines = vec![format!("HTTP Error: {}", report.status_line())];
    if let Some(type_string) = &report.type_string {
        lines.push(format!("Type: {type_string}"));
    }
    if let Some(description) = &report.description {
        lines.push(format!("Description: {description}"));
    }
    if let Some(message) = &report.message {
        lines.push(format!("Message: {message}"));
    }
    lines.push("Response:".to_string());
    lines.extend(report.body.lines().map(|line| format!("  {line}")));
    lines
}

fn render_node(node: &DisplayNode, index: Option<usize>, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let label = match (&node.label, index) {
        (Some(label), _) => format!("{label}: "),
        (None, Some(index)) => format!("{index}: "),
        (None, None) => String::new(),
    };
    lines.push(format!("{indent}{label}{}{}", describe(&node.kind), artifact_suffix(node)));

    let is_array = matches!(node.kind, NodeKind::Array);
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, is_array.then_some(i), depth + 1, lines);
    }
}

fn describe(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Scalar(text) => text.clone(),
        NodeKind::Falsy(falsy) => falsy.label().to_string(),
        NodeKind::StringLiteral(escaped) => format!("\"{escaped}\""),
        NodeKind::TextBlock(text) => {
            let total = text.chars().count();
            let head: String = text
                .chars()
                .take(BLOCK_PREVIEW_CHARS)
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            if total > BLOCK_PREVIEW_CHARS {
                format!("<text, {total} chars> {head}...")
            } else {
                format!("<text, {total} chars> {head}")
            }
        }
        NodeKind::Image {
            format,
            width,
            height,
            ..
        } => format!("<{format} image {width}x{height}>"),
        NodeKind::Array => "[".to_string(),
        NodeKind::Object => "{".to_string(),
        NodeKind::Har {
            document,
            opens_viewer,
        } => {
            let entries = har_entries(document).len();
            let viewer = if *opens_viewer { ", in viewer" } else { "" };
            format!("<HAR, {entries} entries{viewer}>")
        }
        NodeKind::Diagnostic(message) => format!("!! {message}"),
    }
}

fn artifact_suffix(node: &DisplayNode) -> String {
    if node.artifacts.is_empty() {
        return String::new();
    }
    let names: Vec<_> = node
        .artifacts
        .iter()
        .map(|artifact| artifact.suggested_file_name.as_str())
        .collect();
    format!("  [{}]", names.join(", "))
}

fn har_entries(document: &Value) -> &[Value] {
    document["log"]["entries"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// HAR viewer that prints a request waterfall summary to the terminal.
#[derive(Debug, Default)]
pub struct TerminalHarViewer {
    setup: Option<HarViewerSetup>,
    lines: Vec<String>,
}

impl TerminalHarViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl HarViewer for TerminalHarViewer {
    fn pre_init(&mut self, setup: &HarViewerSetup) {
        self.setup = Some(setup.clone());
    }

    fn append_preview(&mut self, har: &Value) {
        let entries = har_entries(har);
        self.lines.push(format!("HAR: {} requests", entries.len()));
        for entry in entries {
            let request = &entry["request"];
            self.lines.push(format!(
                "  {} {} -> {} ({} ms)",
                request["method"].as_str().unwrap_or("?"),
                request["url"].as_str().unwrap_or("?"),
                entry["response"]["status"],
                entry["time"],
            ));
        }

        let Some(setup) = &self.setup else {
            return;
        };
        let timings = &har["log"]["pages"][0]["pageTimings"];
        for timing in &setup.page_timings {
            if let Some(at) = timings.get(timing.name).filter(|value| !value.is_null()) {
                self.lines
                    .push(format!("  {} at {} ms", timing.description, at));
            }
        }
    }
}
