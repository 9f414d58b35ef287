mod support;

use inspector_core::{DecodedResult, Mode, RenderRequest, Scalar};
use inspector_engine::{
    decode_body, FailureKind, ReqwestTransport, Transport, TransportSettings,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{init_logging, png_bytes, PNG_1X1};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> ReqwestTransport {
    init_logging();
    ReqwestTransport::new(TransportSettings::new(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn script_mode_posts_json_to_execute() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"url": "http://example.com", "lua_source": "return 1"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw("1", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RenderRequest::script("example.com", "return 1");
    let response = transport_for(&server)
        .submit(request.mode, &request.body())
        .await
        .expect("submit ok");

    assert_eq!(response.status, 200);
    assert_eq!(response.bytes, b"1");
    assert_eq!(
        decode_body(&response.bytes, response.content_type.as_deref()).unwrap(),
        DecodedResult::from(json!(1))
    );
}

#[tokio::test]
async fn render_mode_posts_to_render_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/render.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RenderRequest::new(Mode::Render, "example.com");
    let response = transport_for(&server)
        .submit(request.mode, &request.body())
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn image_body_decodes_to_raw_base64_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(), "image/png"))
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .submit(Mode::Script, &json!({"url": "http://example.com"}))
        .await
        .unwrap();
    let decoded = decode_body(&response.bytes, response.content_type.as_deref()).unwrap();
    assert_eq!(decoded, DecodedResult::Text(PNG_1X1.to_string()));
}

#[tokio::test]
async fn text_body_is_wrapped_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .submit(Mode::Script, &json!({}))
        .await
        .unwrap();
    let decoded = decode_body(&response.bytes, response.content_type.as_deref()).unwrap();
    assert_eq!(decoded, DecodedResult::Text("<html>ok</html>".to_string()));
}

#[tokio::test]
async fn error_status_is_a_response_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"type":"BadOption","description":"bad","info":{"message":"m"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .submit(Mode::Render, &json!({}))
        .await
        .unwrap();
    assert_eq!(response.status, 400);
    assert_eq!(response.status_text, "Bad Request");
    assert!(!response.is_success());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("01234567890", "text/plain"))
        .mount(&server)
        .await;

    let settings = TransportSettings {
        max_bytes: 10,
        ..TransportSettings::new(&server.uri()).unwrap()
    };
    let err = ReqwestTransport::new(settings)
        .unwrap()
        .submit(Mode::Render, &json!({}))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    init_logging();
    let transport =
        ReqwestTransport::new(TransportSettings::new("http://127.0.0.1:9").unwrap()).unwrap();
    let err = transport.submit(Mode::Render, &json!({})).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[test]
fn empty_json_body_is_absent() {
    assert_eq!(
        decode_body(b"", Some("application/json")).unwrap(),
        DecodedResult::Scalar(Scalar::Absent)
    );
    assert_eq!(
        decode_body(b"null", Some("application/json")).unwrap(),
        DecodedResult::Scalar(Scalar::Null)
    );
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(decode_body(b"{not json", Some("application/json")).is_err());
}

#[test]
fn latin1_text_honours_charset() {
    let decoded = decode_body(b"caf\xe9", Some("text/plain; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded, DecodedResult::Text("café".to_string()));
}

#[test]
fn undecodable_bytes_become_opaque() {
    let decoded = decode_body(&[0xc3, 0x28, 0xa0, 0xa1], Some("application/octet-stream")).unwrap();
    assert!(matches!(decoded, DecodedResult::Opaque(_)));
}
