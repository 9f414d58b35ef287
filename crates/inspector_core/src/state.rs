use crate::node::DisplayNode;
use crate::outcome::{ErrorReport, InspectionOutcome};
use crate::view_model::PageViewModel;

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    #[default]
    Idle,
    Rendering,
    Success,
    EmptyResult,
    Error,
    Aborted,
}

impl PageStatus {
    pub fn text(self) -> &'static str {
        match self {
            PageStatus::Idle => "Initializing...",
            PageStatus::Rendering => "Rendering, please wait..",
            PageStatus::Success => "Success",
            PageStatus::EmptyResult => "Empty result",
            PageStatus::Error => "Error occurred",
            PageStatus::Aborted => "Request failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    status: PageStatus,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    tree: Option<DisplayNode>,
    error: Option<ErrorReport>,
    abort_reason: Option<String>,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            status: self.status,
            status_text: self.status.text().to_string(),
            tree: self.tree.clone(),
            error: self.error.clone(),
            abort_reason: self.abort_reason.clone(),
            in_flight: self.in_flight,
            dirty: self.dirty,
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Starts a new request, discarding everything shown for the previous one.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.status = PageStatus::Rendering;
        self.tree = None;
        self.error = None;
        self.abort_reason = None;
        self.dirty = true;
        request_id
    }

    pub(crate) fn apply_outcome(&mut self, outcome: InspectionOutcome) {
        self.in_flight = None;
        self.status = match outcome {
            InspectionOutcome::Rendered(tree) => {
                self.tree = Some(tree);
                PageStatus::Success
            }
            InspectionOutcome::Empty => PageStatus::EmptyResult,
            InspectionOutcome::Failed(report) => {
                self.error = Some(report);
                PageStatus::Error
            }
        };
        self.dirty = true;
    }

    pub(crate) fn apply_abort(&mut self, reason: String) {
        self.in_flight = None;
        self.status = PageStatus::Aborted;
        self.abort_reason = Some(reason);
        self.dirty = true;
    }
}
