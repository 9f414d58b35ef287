use std::sync::Arc;

use inspector_core::{
    page_file_base, ContentClassifier, ErrorReport, InspectionOutcome, RenderRequest,
    ValueRenderer,
};
use inspector_logging::{inspector_debug, inspector_info};

use crate::decode::{decode_body, decode_text};
use crate::probe::DecodingImageProbe;
use crate::transport::Transport;
use crate::{DecodedResponse, FailureKind, TransportError};

/// Request -> response -> decoded value -> display tree, for one page session.
pub struct Inspector {
    transport: Arc<dyn Transport>,
    renderer: ValueRenderer,
}

impl Inspector {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let classifier = ContentClassifier::new(Arc::new(DecodingImageProbe));
        Self::with_renderer(transport, ValueRenderer::new(classifier))
    }

    pub fn with_renderer(transport: Arc<dyn Transport>, renderer: ValueRenderer) -> Self {
        Self {
            transport,
            renderer,
        }
    }

    /// Sends the request and decodes the body by its content type.
    pub async fn exchange(&self, request: &RenderRequest) -> Result<DecodedResponse, TransportError> {
        let response = self.transport.submit(request.mode, &request.body()).await?;
        let content_type = response.content_type.as_deref();
        let body = match decode_body(&response.bytes, content_type) {
            Ok(body) => body,
            // Error pages keep their status even when the body is not what it claims.
            Err(err) if !response.is_success() => {
                inspector_debug!("error body kept as text: {err}");
                decode_text(&response.bytes, content_type)
            }
            Err(err) => {
                return Err(TransportError::new(FailureKind::InvalidBody, err.to_string()));
            }
        };
        Ok(DecodedResponse {
            status: response.status,
            status_text: response.status_text,
            content_type: response.content_type,
            body,
        })
    }

    /// Turns a decoded response into what the page shows. Rendering blocks while
    /// long strings are probed for image data.
    pub fn interpret(&mut self, request: &RenderRequest, response: DecodedResponse) -> InspectionOutcome {
        if !response.is_success() {
            inspector_info!("service answered {} {}", response.status, response.status_text);
            return InspectionOutcome::Failed(ErrorReport::new(
                response.status,
                &response.status_text,
                &response.body,
            ));
        }
        if response.body.is_empty_result() {
            return InspectionOutcome::Empty;
        }

        let file_base = page_file_base(request.target_address());
        InspectionOutcome::Rendered(self.renderer.render(&response.body, &file_base))
    }

    pub fn har_viewer_loaded(&self) -> bool {
        self.renderer.har_viewer_loaded()
    }
}
