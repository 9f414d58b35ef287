use crate::outcome::InspectionOutcome;
use crate::request::RenderRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User asked for a page to be rendered.
    RenderRequested(RenderRequest),
    /// The engine finished a request and interpreted the response.
    InspectionFinished {
        request_id: crate::RequestId,
        outcome: InspectionOutcome,
    },
    /// No response could be obtained or decoded.
    InspectionAborted {
        request_id: crate::RequestId,
        reason: String,
    },
}
