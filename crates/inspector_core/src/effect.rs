use crate::request::RenderRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send the request to the rendering service.
    Submit {
        request_id: crate::RequestId,
        request: RenderRequest,
    },
}
