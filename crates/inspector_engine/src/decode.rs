use base64::{engine::general_purpose, Engine as _};
use encoding_rs::{Encoding, UTF_8};
use inspector_core::DecodedResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Image,
    Json,
    Text,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response declared as JSON could not be parsed: {0}")]
    InvalidJson(String),
}

/// Decoding strategy for a declared content type.
pub fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(content_type) = content_type else {
        return BodyKind::Text;
    };
    let lowered = content_type.to_ascii_lowercase();
    let media_type = lowered.split(';').next().unwrap_or_default().trim();
    if media_type.starts_with("image/") {
        BodyKind::Image
    } else if lowered.contains("json") {
        BodyKind::Json
    } else {
        BodyKind::Text
    }
}

/// Decode a response body according to its content type:
/// image -> base64 text, JSON -> value tree, anything else -> text.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedResult, DecodeError> {
    match body_kind(content_type) {
        BodyKind::Image => Ok(DecodedResult::Text(general_purpose::STANDARD.encode(bytes))),
        BodyKind::Json => decode_json(bytes),
        BodyKind::Text => Ok(decode_text(bytes, content_type)),
    }
}

fn decode_json(bytes: &[u8]) -> Result<DecodedResult, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(DecodedResult::absent());
    }
    serde_json::from_slice::<serde_json::Value>(bytes)
        .map(DecodedResult::from)
        .map_err(|err| DecodeError::InvalidJson(err.to_string()))
}

/// BOM -> Content-Type charset -> UTF-8. Undecodable bytes become an opaque value.
pub(crate) fn decode_text(bytes: &[u8], content_type: Option<&str>) -> DecodedResult {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(extract_charset)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or(UTF_8);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return DecodedResult::Opaque(format!(
            "{} bytes of binary data ({})",
            bytes.len(),
            content_type.unwrap_or("no content type")
        ));
    }
    DecodedResult::Text(text.into_owned())
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        })
        .next()
}
