//! HAR documents: structural detection and the external viewer hand-off.

use crate::node::{DisplayNode, NodeKind};
use crate::value::DecodedResult;
use inspector_logging::inspector_info;

/// `log.creator.name` of HAR documents produced by the rendering service.
pub const HAR_CREATOR_NAME: &str = "Splash";

/// True when the value is a record whose `log.creator.name` is the service's
/// creator name. Checked structurally on every call.
pub fn is_har_document(value: &DecodedResult) -> bool {
    value
        .get("log")
        .and_then(|log| log.get("creator"))
        .and_then(|creator| creator.get("name"))
        .and_then(DecodedResult::as_text)
        == Some(HAR_CREATOR_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTiming {
    pub name: &'static str,
    pub description: &'static str,
    pub classes: String,
}

impl PageTiming {
    fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            classes: format!("customEventBar {name}"),
        }
    }
}

/// Customization applied to the HAR viewer before its first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarViewerSetup {
    pub removed_tabs: Vec<&'static str>,
    pub show_tab_bar: bool,
    pub removed_preview_buttons: Vec<&'static str>,
    pub page_timings: Vec<PageTiming>,
    pub show_stats: bool,
}

impl Default for HarViewerSetup {
    fn default() -> Self {
        Self {
            removed_tabs: vec!["Home", "DOM", "About", "Schema"],
            show_tab_bar: false,
            removed_preview_buttons: vec!["download", "clear", "showTimeline"],
            page_timings: vec![
                PageTiming::new("_onStarted", "Page processing is started"),
                PageTiming::new("_onPrepareStart", "Rendering begins"),
                PageTiming::new("_onFullViewportSet", "Viewport is changed to full"),
                PageTiming::new("_onCustomJsExecuted", "Custom JavaScript is executed"),
                PageTiming::new("_onScreenshotPrepared", "Screenshot is taken"),
                PageTiming::new("_onPngRendered", "Screenshot is encoded"),
                PageTiming::new("_onHtmlRendered", "HTML is rendered"),
                PageTiming::new("_onIframesRendered", "Iframes info is calculated"),
            ],
            show_stats: true,
        }
    }
}

/// The external HAR viewer widget.
pub trait HarViewer {
    fn pre_init(&mut self, setup: &HarViewerSetup);
    fn append_preview(&mut self, har: &serde_json::Value);
}

/// Hands the HAR node flagged by the renderer (if any) to the viewer, configuring
/// it first. Returns whether the viewer was invoked.
pub fn launch_har_viewer(tree: &DisplayNode, viewer: &mut dyn HarViewer) -> bool {
    let flagged = tree.walk().into_iter().find_map(|node| match &node.kind {
        NodeKind::Har {
            document,
            opens_viewer: true,
        } => Some(document),
        _ => None,
    });

    match flagged {
        Some(document) => {
            inspector_info!("Launching HAR viewer");
            viewer.pre_init(&HarViewerSetup::default());
            viewer.append_preview(document);
            true
        }
        None => false,
    }
}
