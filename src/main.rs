use anyhow::{Context, Result};
use clap::Parser;
use dacfprep::{
    cases::{self, OUTPUT_FOLDER},
    codegen, extract,
};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Unzip DACF power-grid test-case archives and generate the Java test
/// boilerplate referencing the extracted files.
#[derive(Parser)]
#[command(name = "dacfprep")]
#[command(version)]
struct Cli {
    /// Directory holding one DACF zip archive per TSO
    dataset: PathBuf,

    /// Java package name for the generated sources
    package: String,

    /// Base location used for the generated data-path constants
    base: String,

    /// Extract the archives ("yes", "true", "t" or "1"); anything else
    /// only lists them and generates code
    extract: String,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse arguments ──────────────────────────────────────────
    let cli = Cli::parse();
    let extract = is_truthy(&cli.extract);
    let base = format!("{}/{}", cli.base, OUTPUT_FOLDER);
    info!(
        dataset = %cli.dataset.display(),
        package = %cli.package,
        base = %base,
        extract,
        "startup"
    );

    run(&cli.dataset, &cli.package, &base, extract)
}

fn is_truthy(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "yes" | "true" | "t" | "1")
}

/// Process every top-level zip archive in the dataset directory.
fn run(dataset: &Path, package: &str, base: &str, extract: bool) -> Result<()> {
    let pattern = format!("{}/*.zip", dataset.display());
    let mut archives: Vec<PathBuf> = glob(&pattern)?.collect::<std::result::Result<_, _>>()?;
    archives.sort();
    if archives.is_empty() {
        info!("no archives found; exit");
        return Ok(());
    }
    info!(count = archives.len(), "TSO archives to process");

    for archive in &archives {
        let name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("non-UTF-8 archive name {}", archive.display()))?;
        let tso = cases::tso_from_archive_name(name)?;
        info!(tso = %tso, file = %name, "processing TSO archive");

        let test_cases = extract::process_tso_archive(dataset, archive, &tso, extract)?;
        codegen::generate_all(dataset, package, base, &test_cases)?;
    }

    info!("all done");
    Ok(())
}
