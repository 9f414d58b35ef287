use serde_json::{Map, Value};

/// Example script offered when script mode is used without a source.
pub const EXAMPLE_SCRIPT: &str = r#"function main(splash)
  local url = splash.args.url
  assert(splash:go(url))
  assert(splash:wait(0.5))
  return {
    html = splash:html(),
    png = splash:png(),
    har = splash:har(),
  }
end"#;

pub const DEFAULT_WAIT: f64 = 0.5;

/// Which service endpoint a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run a browsing script.
    Script,
    /// Plain render returning JSON.
    Render,
}

impl Mode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Script => "execute",
            Mode::Render => "render.json",
        }
    }
}

/// A rendering request: endpoint mode plus the free-form JSON parameter object.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub mode: Mode,
    params: Map<String, Value>,
}

impl RenderRequest {
    /// Request with the default parameters for `target`.
    pub fn new(mode: Mode, target: &str) -> Self {
        let mut params = Map::new();
        params.insert("url".into(), Value::String(normalize_address(target)));
        params.insert("wait".into(), Value::from(DEFAULT_WAIT));
        for flag in ["images", "expand", "har", "png", "html"] {
            params.insert(flag.into(), Value::from(1));
        }
        Self { mode, params }
    }

    pub fn script(target: &str, lua_source: &str) -> Self {
        Self::new(Mode::Script, target).with_param("lua_source", Some(lua_source))
    }

    /// Sets a parameter; `None` removes it.
    pub fn with_param<V: Into<Value>>(mut self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.params.insert(name.to_string(), value.into());
            }
            None => {
                self.params.remove(name);
            }
        }
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    pub fn target_address(&self) -> &str {
        self.params
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn body(&self) -> Value {
        Value::Object(self.params.clone())
    }
}

/// Addresses without an `http`/`https` prefix get `http://`.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    if trimmed.to_ascii_lowercase().starts_with("http") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
