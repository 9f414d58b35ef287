use inspector_core::{DecodedResult, ErrorReport};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn nested_type_is_composed() {
    let body = DecodedResult::from(json!({
        "type": "ScriptError",
        "description": "bad script",
        "info": {"message": "syntax error", "type": "LuaError"}
    }));
    let report = ErrorReport::new(400, "Bad Request", &body);

    assert_eq!(report.type_string.as_deref(), Some("ScriptError -> LuaError"));
    assert_eq!(report.message.as_deref(), Some("syntax error"));
    assert_eq!(report.description.as_deref(), Some("bad script"));
    assert_eq!(report.status_line(), "400 (Bad Request)");
    assert!(report.body.contains("\n    \"description\": \"bad script\""));
}

#[test]
fn type_alone_without_info_type() {
    let body = DecodedResult::from(json!({
        "type": "BadOption",
        "description": "Incorrect HTTP API arguments",
        "info": {"message": "url is required"}
    }));
    let report = ErrorReport::new(400, "Bad Request", &body);
    assert_eq!(report.type_string.as_deref(), Some("BadOption"));
}

#[test]
fn unexpected_body_is_still_shown() {
    let body = DecodedResult::Text("upstream proxy error".to_string());
    let report = ErrorReport::new(502, "Bad Gateway", &body);

    assert_eq!(report.body, "upstream proxy error");
    assert_eq!(report.type_string, None);
    assert_eq!(report.message, None);
    assert_eq!(report.description, None);
}
