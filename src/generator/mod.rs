//! Drives a seeding run: for every target directory in catalog order, draws
//! a file count, then for each file an identity, a language and one of that
//! language's topics, and writes the resolved guideline document.
//!
//! A missing directory is reported and skipped. The first write failure ends
//! the run; documents already written stay on disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::{BANNER_WIDTH, NAMING_PATTERN};
use crate::error::{AppError, Result};
use crate::file_storage::{self, DocumentWriter};
use crate::models::{
    Catalog, DirectoryReport, DirectoryStatus, DocumentName, GeneratedFile, RunSummary,
};
use crate::selector::{pick_count, pick_one, RandomSelector};
use crate::templates::TemplateRegistry;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Create absent target directories instead of skipping them.
    pub create_missing: bool,
    /// Never reuse an identity within one directory.
    pub distinct_identities: bool,
}

pub struct Generator<'a, S, W>
where
    S: RandomSelector,
    W: DocumentWriter,
{
    registry: &'a TemplateRegistry,
    selector: S,
    writer: W,
    options: GenerateOptions,
}

impl<'a, S, W> Generator<'a, S, W>
where
    S: RandomSelector,
    W: DocumentWriter,
{
    pub fn new(
        registry: &'a TemplateRegistry,
        selector: S,
        writer: W,
        options: GenerateOptions,
    ) -> Self {
        Self {
            registry,
            selector,
            writer,
            options,
        }
    }

    /// Runs every directory of `catalog`, resolved against `root`, writing
    /// progress lines to `out`.
    pub fn run(
        &mut self,
        catalog: &Catalog,
        root: &Path,
        out: &mut dyn Write,
    ) -> Result<RunSummary> {
        catalog.validate()?;

        log::info!(
            "Seeding {} directories under '{}'",
            catalog.directories.len(),
            root.display()
        );

        writeln!(out, "Generating developer files...")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

        let mut summary = RunSummary::default();
        for directory in &catalog.directories {
            let target = root.join(directory);
            let report = self.process_directory(catalog, &target, out)?;
            summary.directories.push(report);
        }

        for report in summary.directories.iter_mut() {
            if report.status.exists() {
                report.present = file_storage::list_documents(&report.directory)?;
            }
        }

        log::info!(
            "Seeding finished: {} files, {} directories skipped, {} fallback documents",
            summary.total_files(),
            summary.directories_skipped(),
            summary.fallback_documents()
        );

        Ok(summary)
    }

    fn process_directory(
        &mut self,
        catalog: &Catalog,
        target: &Path,
        out: &mut dyn Write,
    ) -> Result<DirectoryReport> {
        let status = match file_storage::check_directory(target) {
            Ok(()) => DirectoryStatus::Processed,
            Err(AppError::MissingDirectory { path }) if self.options.create_missing => {
                writeln!(out, "📁 Creating directory: {}", path.display())?;
                fs::create_dir_all(&path)?;
                DirectoryStatus::Created
            }
            Err(AppError::MissingDirectory { path }) => {
                log::warn!("Skipping missing directory '{}'", path.display());
                writeln!(out, "\n⚠️  Skipping missing directory: {}", path.display())?;
                return Ok(DirectoryReport::skipped(path));
            }
            Err(AppError::NotADirectory { path }) => {
                log::warn!("Skipping '{}': not a directory", path.display());
                writeln!(out, "\n⚠️  Skipping {}: not a directory", path.display())?;
                return Ok(DirectoryReport::skipped(path));
            }
            Err(e) => return Err(e),
        };

        writeln!(out, "\n📁 Directory: {}", target.display())?;

        let mut count = pick_count(&mut self.selector, catalog.min_files, catalog.max_files)?;
        if self.options.distinct_identities {
            count = count.min(catalog.identities.len());
        }
        log::debug!("Generating {} files in '{}'", count, target.display());

        let mut identity_pool: Vec<&str> = catalog.identities.iter().map(String::as_str).collect();
        let mut generated = Vec::with_capacity(count);

        for _ in 0..count {
            let identity = self.draw_identity(&mut identity_pool)?;
            let name = self.draw_name(catalog, &identity)?;
            let path = name.path_in(target);

            let resolved = self.registry.resolve_document(&name.language, &name.topic);

            if let Err(e) = self.writer.write(&path, &resolved.content) {
                log::error!("Aborting run: {}", e);
                writeln!(out, "❌ {}", e)?;
                return Err(e);
            }

            writeln!(out, "Created: {}", path.display())?;
            generated.push(GeneratedFile {
                path,
                name,
                used_fallback: resolved.used_fallback,
            });
        }

        writeln!(out, "   Created {} files", generated.len())?;
        log::debug!(
            "Directory '{}' {} with {} files",
            target.display(),
            status.as_str(),
            generated.len()
        );

        Ok(DirectoryReport {
            directory: target.to_path_buf(),
            status,
            generated,
            present: Vec::new(),
        })
    }

    fn draw_identity(&mut self, pool: &mut Vec<&str>) -> Result<String> {
        let identity = pick_one(&mut self.selector, pool.as_slice())?.to_string();
        if self.options.distinct_identities {
            pool.retain(|candidate| *candidate != identity);
        }
        Ok(identity)
    }

    fn draw_name(&mut self, catalog: &Catalog, identity: &str) -> Result<DocumentName> {
        let language = pick_one(&mut self.selector, &catalog.languages)?;
        let topic = pick_one(&mut self.selector, &language.topics)?;
        Ok(DocumentName::new(identity, &language.name, topic))
    }
}

pub fn print_summary(summary: &RunSummary, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(
        out,
        "✅ Successfully created {} files across {} directories",
        summary.total_files(),
        summary.directories_processed()
    )?;
    if summary.directories_skipped() > 0 {
        writeln!(
            out,
            "⚠️  {} directories skipped (missing or not a directory)",
            summary.directories_skipped()
        )?;
    }

    for report in summary.directories.iter().filter(|r| r.status.exists()) {
        writeln!(out, "\n📂 {} ({} files):", report.directory.display(), report.present.len())?;
        for name in &report.present {
            writeln!(out, "   - {}", name)?;
        }
    }

    writeln!(out, "\nFile naming pattern: {}", NAMING_PATTERN)?;
    writeln!(
        out,
        "Each file contains relevant rules and guidelines for the specified topic."
    )?;
    Ok(())
}
