use crate::error::{LogTableError, Result};
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Raw author name → canonical display name.
///
/// Loaded from a JSON object such as
/// `{ "jdoe": "Jane Doe", "Jane D.": "Jane Doe" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AuthorAliases {
    map: HashMap<String, String>,
}

impl AuthorAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LogTableError::io(path, e))?;
        let aliases = Self::from_json(&text).map_err(|e| LogTableError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!("Loaded {} author aliases from {}", aliases.len(), path.display());
        Ok(aliases)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Canonical name for `author`; unmapped or blank aliases fall back to the raw name.
    pub fn resolve<'a>(&'a self, author: &'a str) -> &'a str {
        match self.map.get(author) {
            Some(canonical) if !canonical.is_empty() => canonical.as_str(),
            _ => author,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AuthorAliases {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
