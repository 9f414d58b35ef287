mod support;

use std::sync::{Arc, Mutex};

use inspector_core::{InspectionOutcome, Mode, RenderRequest};
use inspector_engine::{
    FailureKind, InspectorEvent, InspectorHandle, ServiceResponse, Transport, TransportError,
    TransportSettings,
};
use pretty_assertions::assert_eq;
use support::init_logging;

/// Answers every request with a canned body and records what it was sent.
struct CannedTransport {
    body: &'static str,
    seen: Mutex<Vec<(Mode, serde_json::Value)>>,
}

#[async_trait::async_trait]
impl Transport for CannedTransport {
    async fn submit(
        &self,
        mode: Mode,
        body: &serde_json::Value,
    ) -> Result<ServiceResponse, TransportError> {
        self.seen.lock().unwrap().push((mode, body.clone()));
        Ok(ServiceResponse {
            status: 200,
            status_text: "OK".to_string(),
            content_type: Some("application/json".to_string()),
            bytes: self.body.as_bytes().to_vec(),
        })
    }
}

#[test]
fn worker_answers_requests_in_order() {
    init_logging();
    let transport = Arc::new(CannedTransport {
        body: r#"{"title": "Example"}"#,
        seen: Mutex::new(Vec::new()),
    });
    let handle = InspectorHandle::with_transport(transport.clone()).unwrap();

    handle.submit(1, RenderRequest::new(Mode::Render, "example.com"));
    handle.submit(2, RenderRequest::script("example.org", "return 1"));

    let mut ids = Vec::new();
    for _ in 0..2 {
        let Some(InspectorEvent::Completed { request_id, result }) = handle.recv() else {
            panic!("worker stopped early");
        };
        let Ok(InspectionOutcome::Rendered(tree)) = result else {
            panic!("expected a rendered tree");
        };
        assert_eq!(tree.child("title").unwrap().kind.class_name(), "string-literal");
        ids.push(request_id);
    }
    assert_eq!(ids, vec![1, 2]);

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0].0, Mode::Render);
    assert_eq!(seen[1].0, Mode::Script);
    assert_eq!(seen[1].1["lua_source"], "return 1");
    assert_eq!(seen[1].1["url"], "http://example.org");
}

#[test]
fn unreachable_service_reports_transport_error() {
    init_logging();
    let handle =
        InspectorHandle::new(TransportSettings::new("http://127.0.0.1:9").unwrap()).unwrap();
    handle.submit(7, RenderRequest::new(Mode::Render, "example.com"));

    let Some(InspectorEvent::Completed { request_id, result }) = handle.recv() else {
        panic!("worker stopped early");
    };
    assert_eq!(request_id, 7);
    assert_eq!(result.unwrap_err().kind, FailureKind::Network);
}
