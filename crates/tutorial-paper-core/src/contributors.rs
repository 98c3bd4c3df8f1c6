use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{PaperError, PaperResult};

/// A single entry of `CONTRIBUTORS.yaml`. Fields other than `name` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contributor {
    pub name: Option<String>,
}

impl Contributor {
    /// Entries that are not mappings, or whose `name` is not a string, carry
    /// no display name.
    fn from_value(value: &Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Mapping from contributor identifier to its directory entry.
#[derive(Debug, Clone, Default)]
pub struct ContributorDirectory {
    entries: HashMap<String, Contributor>,
}

impl ContributorDirectory {
    pub fn load(path: &Path) -> PaperResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|source| PaperError::Contributors {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries: Option<HashMap<String, Value>> = serde_yaml::from_str(yaml)?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|(id, value)| (id, Contributor::from_value(&value)))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name for `id`, falling back to the identifier itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        match self.entries.get(id) {
            Some(Contributor { name: Some(name) }) => name.as_str(),
            Some(_) => id,
            None => {
                log::warn!("contributor '{id}' is not listed in the contributor directory");
                id
            }
        }
    }
}

impl FromIterator<(String, Contributor)> for ContributorDirectory {
    fn from_iter<T: IntoIterator<Item = (String, Contributor)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
