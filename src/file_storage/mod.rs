use std::fs;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AppError, Result};

/// Persists generated documents.
pub trait DocumentWriter {
    /// Creates or overwrites `path` with `content`. The parent directory must
    /// already exist.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl DocumentWriter for FsWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        write_document(path, content)
    }
}

pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension(format!("md.tmp-{}", uuid::Uuid::new_v4()));

    let result = write_then_rename(&temp_path, path, content);
    if result.is_err() && temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }

    result.map_err(|source| AppError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    {
        let mut file = fs::File::create(temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(temp_path, path)
}

pub fn check_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else if path.exists() {
        Err(AppError::NotADirectory {
            path: path.to_path_buf(),
        })
    } else {
        Err(AppError::MissingDirectory {
            path: path.to_path_buf(),
        })
    }
}

/// File names directly inside `dir`, sorted.
pub fn list_documents(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| AppError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    names.sort();
    Ok(names)
}
