use clap::Parser;
use std::path::PathBuf;

use devseed_lib::generator::GenerateOptions;
use devseed_lib::SeedRequest;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base directory the target directories are resolved against
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// TOML catalog replacing the built-in identities, languages and directories
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Create target directories that do not exist instead of skipping them
    #[arg(long)]
    create_missing: bool,

    /// Never reuse an identity within one directory
    #[arg(long)]
    distinct_identities: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("Parsed arguments: {:?}", args);

    let request = SeedRequest {
        root: args.root.unwrap_or_default(),
        catalog_path: args.catalog,
        seed: args.seed,
        options: GenerateOptions {
            create_missing: args.create_missing,
            distinct_identities: args.distinct_identities,
        },
        json: args.json,
    };

    if let Err(e) = devseed_lib::run_cli(request) {
        log::error!("Seeding failed: {}", e);
        eprintln!("devseed error: {}", e);
        std::process::exit(1);
    }
}
