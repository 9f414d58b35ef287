use serde_json::{Map, Number, Value};

/// A decoded service result. Built once per request/response cycle and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResult {
    Scalar(Scalar),
    Text(String),
    Sequence(Vec<DecodedResult>),
    /// Keys are unique; order is the order the decoder produced.
    Record(Vec<(String, DecodedResult)>),
    /// A body the decoder could not map onto any other shape (e.g. bytes that are
    /// not valid text). Carries a short description for diagnostics.
    Opaque(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    /// No value at all (empty body), distinct from an explicit `null`.
    Absent,
    Bool(bool),
    Number(Number),
}

impl DecodedResult {
    pub fn absent() -> Self {
        DecodedResult::Scalar(Scalar::Absent)
    }

    /// Looks up a key of a `Record`; `None` for every other shape.
    pub fn get(&self, key: &str) -> Option<&DecodedResult> {
        match self {
            DecodedResult::Record(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedResult::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True for results the page reports as "empty" rather than rendering.
    pub fn is_empty_result(&self) -> bool {
        match self {
            DecodedResult::Scalar(Scalar::Null | Scalar::Absent) => true,
            DecodedResult::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Converts back to JSON. `Absent` becomes `null`; opaque values become their
    /// description string.
    pub fn to_json(&self) -> Value {
        match self {
            DecodedResult::Scalar(Scalar::Null | Scalar::Absent) => Value::Null,
            DecodedResult::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            DecodedResult::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            DecodedResult::Text(text) => Value::String(text.clone()),
            DecodedResult::Sequence(items) => {
                Value::Array(items.iter().map(DecodedResult::to_json).collect())
            }
            DecodedResult::Record(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json());
                }
                Value::Object(map)
            }
            DecodedResult::Opaque(description) => Value::String(description.clone()),
        }
    }
}

impl From<Value> for DecodedResult {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DecodedResult::Scalar(Scalar::Null),
            Value::Bool(b) => DecodedResult::Scalar(Scalar::Bool(b)),
            Value::Number(n) => DecodedResult::Scalar(Scalar::Number(n)),
            Value::String(s) => DecodedResult::Text(s),
            Value::Array(items) => {
                DecodedResult::Sequence(items.into_iter().map(DecodedResult::from).collect())
            }
            Value::Object(map) => DecodedResult::Record(
                map.into_iter()
                    .map(|(key, value)| (key, DecodedResult::from(value)))
                    .collect(),
            ),
        }
    }
}
