// src/codegen/mod.rs
//
// Java boilerplate generation: one catalog class and two test classes per
// TSO, written into a `temp-code` folder under the dataset root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cases::TestCaseSet;

pub mod catalog;
pub mod conversion;
pub mod loadflow;

pub const CATALOG: &str = "CasesCatalog";
pub const TEST_CONVERSION: &str = "ConversionTest";
pub const TEST_LOADFLOW: &str = "LoadFlowTest";

/// Subfolder of the dataset root that receives the generated sources.
pub const CODE_FOLDER: &str = "temp-code";

/// Write the three generated files for one TSO. Returns the paths written.
pub fn generate_all(
    dataset_root: impl AsRef<Path>,
    package: &str,
    base: &str,
    cases: &TestCaseSet,
) -> Result<Vec<PathBuf>> {
    let out_dir = dataset_root.as_ref().join(CODE_FOLDER);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating code directory {}", out_dir.display()))?;

    let paths = vec![
        write_class(&out_dir, CATALOG, cases, catalog::render(package, base, cases))?,
        write_class(&out_dir, TEST_CONVERSION, cases, conversion::render(package, cases))?,
        write_class(&out_dir, TEST_LOADFLOW, cases, loadflow::render(package, cases))?,
    ];
    for p in &paths {
        info!(file = %p.display(), "generated");
    }
    Ok(paths)
}

fn write_class(
    out_dir: &Path,
    suffix: &str,
    cases: &TestCaseSet,
    source: String,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}{}.java", cases.class_prefix(), suffix));
    fs::write(&path, source).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
