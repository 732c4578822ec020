use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

use crate::constants::{
    limits, DEFAULT_DIRECTORIES, DEFAULT_IDENTITIES, DEFAULT_LANGUAGES,
};
use crate::error::{AppError, Result};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("catalog name pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageTopics {
    pub name: String,
    pub topics: Vec<String>,
}

/// Immutable set of values the generator samples from.
///
/// Languages keep their declaration order; each owns its own topic list and
/// topics are only ever drawn from the list of the language already chosen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub identities: Vec<String>,
    pub languages: Vec<LanguageTopics>,
    pub directories: Vec<String>,
    #[serde(default = "default_min_files")]
    pub min_files: usize,
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_min_files() -> usize {
    limits::MIN_FILES_PER_DIR
}

fn default_max_files() -> usize {
    limits::MAX_FILES_PER_DIR
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            identities: DEFAULT_IDENTITIES.iter().map(|s| s.to_string()).collect(),
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|(name, topics)| LanguageTopics {
                    name: name.to_string(),
                    topics: topics.iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
            directories: DEFAULT_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
            min_files: limits::MIN_FILES_PER_DIR,
            max_files: limits::MAX_FILES_PER_DIR,
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(input).map_err(|e| AppError::Config(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        log::debug!("Loaded catalog from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn topics_for(&self, language: &str) -> Option<&[String]> {
        self.languages
            .iter()
            .find(|l| l.name == language)
            .map(|l| l.topics.as_slice())
    }

    pub fn validate(&self) -> Result<()> {
        if self.identities.is_empty() {
            return Err(invalid("Catalog has no identities"));
        }
        if self.languages.is_empty() {
            return Err(invalid("Catalog has no languages"));
        }
        if self.directories.is_empty() {
            return Err(invalid("Catalog has no target directories"));
        }
        if self.min_files == 0 || self.min_files > self.max_files {
            return Err(invalid(format!(
                "Invalid file count bounds: {}..={}",
                self.min_files, self.max_files
            )));
        }

        for (idx, identity) in self.identities.iter().enumerate() {
            check_name("identity", identity)?;
            if self.identities[..idx].contains(identity) {
                return Err(invalid(format!("Duplicate identity '{}'", identity)));
            }
        }

        for (idx, language) in self.languages.iter().enumerate() {
            check_name("language", &language.name)?;
            if self.languages[..idx].iter().any(|l| l.name == language.name) {
                return Err(invalid(format!("Duplicate language '{}'", language.name)));
            }
            if language.topics.is_empty() {
                return Err(invalid(format!(
                    "Language '{}' has no topics",
                    language.name
                )));
            }
            for topic in &language.topics {
                check_name("topic", topic)?;
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_name(kind: &str, name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(invalid(format!(
            "Invalid {} name '{}': only letters, digits, '-' and '_' are allowed",
            kind, name
        )))
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::InvalidInput {
        message: message.into(),
    }
}
