//! Autocomplete candidates for the script editor.
//!
//! The documentation document maps `splash:<method>` and `splash.<attribute>` keys to
//! records carrying at least a `short` description.

use std::collections::BTreeMap;

use serde::Deserialize;

pub const NAMESPACE: &str = "splash";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid documentation document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub name: String,
    pub short_doc: String,
}

#[derive(Debug, Deserialize)]
struct DocRecord {
    #[serde(default)]
    short: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionCatalog {
    commands: Vec<Completion>,
    properties: Vec<Completion>,
}

impl CompletionCatalog {
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let records: BTreeMap<String, DocRecord> = serde_json::from_str(document)?;
        let mut catalog = Self::default();
        for (key, record) in records {
            let Some(rest) = key.strip_prefix(NAMESPACE) else {
                continue;
            };
            let mut chars = rest.chars();
            let separator = chars.next();
            let name = chars.as_str();
            if name.is_empty() {
                continue;
            }
            let completion = Completion {
                name: name.to_string(),
                short_doc: record.short.unwrap_or_default(),
            };
            match separator {
                Some(':') => catalog.commands.push(completion),
                Some('.') => catalog.properties.push(completion),
                _ => {}
            }
        }
        Ok(catalog)
    }

    pub fn commands(&self) -> &[Completion] {
        &self.commands
    }

    pub fn properties(&self) -> &[Completion] {
        &self.properties
    }

    /// Candidates for the text left of the cursor. Only a trailing
    /// `splash:<ident>` or `splash.<ident>` produces suggestions.
    pub fn complete(&self, line: &str) -> Vec<Completion> {
        let typed_len = line
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_lowercase() || *c == '_')
            .count();
        let (head, typed) = line.split_at(line.len() - typed_len);

        let candidates = if head.ends_with(&format!("{NAMESPACE}:")) {
            &self.commands
        } else if head.ends_with(&format!("{NAMESPACE}.")) {
            &self.properties
        } else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|c| c.name.starts_with(typed))
            .cloned()
            .collect()
    }
}
