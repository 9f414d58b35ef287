//! Inspector core: result interpretation, display-tree construction and the pure
//! page state machine. No IO happens here.
mod artifact;
mod classify;
mod completions;
mod effect;
mod har;
mod msg;
mod node;
mod order;
mod outcome;
mod render;
mod request;
mod state;
mod update;
mod value;
mod view_model;

pub use artifact::{page_file_base, DownloadArtifact, PayloadEncoding};
pub use classify::{
    escape_literal, ClassifiedString, ContentClassifier, ImageDimensions, ImageFormat,
    ImageProbe, ProbeError, CANDIDATE_FORMATS, SHORT_LITERAL_LIMIT,
};
pub use completions::{CatalogError, Completion, CompletionCatalog, NAMESPACE};
pub use effect::Effect;
pub use har::{
    is_har_document, launch_har_viewer, HarViewer, HarViewerSetup, PageTiming, HAR_CREATOR_NAME,
};
pub use msg::Msg;
pub use node::{DisplayNode, Falsy, NodeKind};
pub use order::{ordered_keys, PRIORITY_KEYS};
pub use outcome::{ErrorReport, InspectionOutcome, ServiceError, ServiceErrorInfo};
pub use render::ValueRenderer;
pub use request::{normalize_address, Mode, RenderRequest, DEFAULT_WAIT, EXAMPLE_SCRIPT};
pub use state::{PageState, PageStatus, RequestId};
pub use update::update;
pub use value::{DecodedResult, Scalar};
pub use view_model::PageViewModel;
