pub mod constants;
pub mod error;
pub mod file_storage;
pub mod generator;
pub mod models;
pub mod selector;
pub mod templates;

use std::io::Write;
use std::path::PathBuf;

use error::Result;
use file_storage::FsWriter;
use generator::{GenerateOptions, Generator};
use models::{Catalog, RunSummary};
use selector::StdRngSelector;

#[derive(Debug, Clone, Default)]
pub struct SeedRequest {
    pub root: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub options: GenerateOptions,
    pub json: bool,
}

pub fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    match path {
        Some(p) => Catalog::from_toml_file(p),
        None => Ok(Catalog::builtin()),
    }
}

/// Seeds every catalog directory under `root` and returns what was written.
pub fn seed(
    catalog: &Catalog,
    root: &std::path::Path,
    seed: Option<u64>,
    options: GenerateOptions,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let selector = StdRngSelector::new(seed);
    let mut generator = Generator::new(&templates::REGISTRY, selector, FsWriter, options);
    generator.run(catalog, root, out)
}

pub fn run_cli(request: SeedRequest) -> Result<()> {
    let catalog = load_catalog(request.catalog_path.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if request.json {
        let summary = seed(
            &catalog,
            &request.root,
            request.seed,
            request.options,
            &mut std::io::sink(),
        )?;
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        let summary = seed(&catalog, &request.root, request.seed, request.options, &mut out)?;
        generator::print_summary(&summary, &mut out)?;
    }

    Ok(())
}
