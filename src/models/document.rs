use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{DOCUMENT_EXTENSION, NAME_SEPARATOR};

/// The `identity.language.topic` triple a generated document is named after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentName {
    pub identity: String,
    pub language: String,
    pub topic: String,
}

impl DocumentName {
    pub fn new(identity: &str, language: &str, topic: &str) -> Self {
        Self {
            identity: identity.to_string(),
            language: language.to_string(),
            topic: topic.to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.identity,
            self.language,
            self.topic,
            DOCUMENT_EXTENSION,
            sep = NAME_SEPARATOR
        )
    }

    pub fn path_in(&self, directory: &Path) -> PathBuf {
        directory.join(self.file_name())
    }

    /// Splits a file name of the form `identity.language.topic.md`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(&format!("{}{}", NAME_SEPARATOR, DOCUMENT_EXTENSION))?;
        let mut parts = stem.split(NAME_SEPARATOR);
        let identity = parts.next().filter(|s| !s.is_empty())?;
        let language = parts.next().filter(|s| !s.is_empty())?;
        let topic = parts.next().filter(|s| !s.is_empty())?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(identity, language, topic))
    }
}

/// A document produced by one generator iteration, already persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub name: DocumentName,
    pub used_fallback: bool,
}
