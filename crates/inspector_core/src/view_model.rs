use crate::node::DisplayNode;
use crate::outcome::ErrorReport;
use crate::{PageStatus, RequestId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub status: PageStatus,
    pub status_text: String,
    pub tree: Option<DisplayNode>,
    pub error: Option<ErrorReport>,
    pub abort_reason: Option<String>,
    pub in_flight: Option<RequestId>,
    pub dirty: bool,
}
