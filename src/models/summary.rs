use serde::Serialize;
use std::path::PathBuf;

use super::GeneratedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryStatus {
    Processed,
    Created,
    Skipped,
}

impl DirectoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryStatus::Processed => "processed",
            DirectoryStatus::Created => "created",
            DirectoryStatus::Skipped => "skipped",
        }
    }

    pub fn exists(&self) -> bool {
        !matches!(self, DirectoryStatus::Skipped)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    pub directory: PathBuf,
    pub status: DirectoryStatus,
    pub generated: Vec<GeneratedFile>,
    /// Every file present in the directory once the run finished.
    pub present: Vec<String>,
}

impl DirectoryReport {
    pub fn skipped(directory: PathBuf) -> Self {
        Self {
            directory,
            status: DirectoryStatus::Skipped,
            generated: Vec::new(),
            present: Vec::new(),
        }
    }

    pub fn files_created(&self) -> usize {
        self.generated.len()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub directories: Vec<DirectoryReport>,
}

impl RunSummary {
    pub fn total_files(&self) -> usize {
        self.directories.iter().map(|d| d.files_created()).sum()
    }

    /// Directories that existed (or were created) and had documents written.
    pub fn directories_processed(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status.exists())
            .count()
    }

    pub fn directories_skipped(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status == DirectoryStatus::Skipped)
            .count()
    }

    pub fn fallback_documents(&self) -> usize {
        self.directories
            .iter()
            .flat_map(|d| d.generated.iter())
            .filter(|f| f.used_fallback)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentName;

    fn generated(dir: &str, fallback: bool) -> GeneratedFile {
        let name = DocumentName::new("alexChen", "react", "performance");
        GeneratedFile {
            path: name.path_in(std::path::Path::new(dir)),
            name,
            used_fallback: fallback,
        }
    }

    #[test]
    fn test_totals() {
        let summary = RunSummary {
            directories: vec![
                DirectoryReport {
                    directory: PathBuf::from("a"),
                    status: DirectoryStatus::Processed,
                    generated: vec![generated("a", true), generated("a", false)],
                    present: vec![],
                },
                DirectoryReport::skipped(PathBuf::from("b")),
            ],
        };

        assert_eq!(summary.total_files(), 2);
        assert_eq!(summary.directories_processed(), 1);
        assert_eq!(summary.directories_skipped(), 1);
        assert_eq!(summary.fallback_documents(), 1);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&DirectoryStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
        assert_eq!(DirectoryStatus::Created.as_str(), "created");
        assert!(!DirectoryStatus::Skipped.exists());
    }
}
