// src/extract/mod.rs

use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use zip::ZipArchive;

use crate::cases::{self, TestCaseSet, OUTPUT_FOLDER};

/// Process one top-level TSO archive: create `unzipped/<tso>/`, list the
/// archive to collect the date-hour cases and create one folder per case,
/// then optionally extract everything and unpack the nested archives.
///
/// The case list is always computed so code generation works with
/// extraction disabled.
#[instrument(level = "info", skip(dataset_root, archive_path), fields(archive = %archive_path.as_ref().display()))]
pub fn process_tso_archive(
    dataset_root: impl AsRef<Path>,
    archive_path: impl AsRef<Path>,
    tso: &str,
    extract: bool,
) -> Result<TestCaseSet> {
    let archive_path = archive_path.as_ref();
    let tso_dir = dataset_root.as_ref().join(OUTPUT_FOLDER).join(tso);
    fs::create_dir_all(&tso_dir)
        .with_context(|| format!("creating TSO directory {}", tso_dir.display()))?;

    let file = File::open(archive_path)
        .with_context(|| format!("opening archive {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("reading archive {}", archive_path.display()))?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let test_cases = TestCaseSet::from_entry_names(tso, names.iter().map(String::as_str));
    info!(tso, count = test_cases.date_hours.len(), "date-hour cases");

    for dh in &test_cases.date_hours {
        let dh_dir = tso_dir.join(dh);
        fs::create_dir_all(&dh_dir)
            .with_context(|| format!("creating case directory {}", dh_dir.display()))?;
    }

    if extract {
        archive
            .extract(&tso_dir)
            .with_context(|| format!("extracting {}", archive_path.display()))?;
        extract_nested(&tso_dir)?;
    }

    Ok(test_cases)
}

/// Scan a freshly extracted TSO folder for nested archives. Date-hour zips
/// are unpacked into their case folder, the boundary zip into the TSO
/// folder itself; both are deleted afterwards.
fn extract_nested(tso_dir: &Path) -> Result<()> {
    let pattern = format!("{}/*", tso_dir.display());
    // Snapshot the listing up front so files we unpack are not re-visited.
    let entries: Vec<PathBuf> = glob(&pattern)?.collect::<std::result::Result<_, _>>()?;

    for path in entries {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if cases::is_date_hour_zip(&name) {
            let dh_dir = tso_dir.join(cases::date_hour_from_name(&name));
            info!(file = %name, into = %dh_dir.display(), "extracting case archive");
            unzip_into(&path, &dh_dir)?;
            fs::remove_file(&path)
                .with_context(|| format!("removing nested archive {}", path.display()))?;
        } else if cases::is_boundary_name(&name) {
            info!(file = %name, "extracting boundary archive");
            unzip_into(&path, tso_dir)?;
            fs::remove_file(&path)
                .with_context(|| format!("removing boundary archive {}", path.display()))?;
        }
    }
    Ok(())
}

fn unzip_into(zip_path: &Path, dest: &Path) -> Result<()> {
    let file =
        File::open(zip_path).with_context(|| format!("opening {}", zip_path.display()))?;
    let mut archive =
        ZipArchive::new(file).with_context(|| format!("reading {}", zip_path.display()))?;
    archive
        .extract(dest)
        .with_context(|| format!("extracting {} into {}", zip_path.display(), dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use zip::write::{ExtendedFileOptions, FileOptions};
    use zip::CompressionMethod;
    use zip::ZipWriter;

    fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut writer = ZipWriter::new(Cursor::new(&mut buf));
            for (name, data) in entries {
                let options = FileOptions::<ExtendedFileOptions>::default()
                    .compression_method(CompressionMethod::Stored);
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            writer.finish().unwrap();
        }
        buf
    }

    fn write_fixture_archive(dir: &Path) -> PathBuf {
        let dh1 = zip_bytes(&[("case1.xml", b"<rdf/>")]);
        let dh2 = zip_bytes(&[("case2.xml", b"<rdf/>")]);
        let boundary = zip_bytes(&[("boundary.xml", b"<bd/>")]);
        let main = zip_bytes(&[
            ("20180221T0130Z_1D_RTE0_001.zip", dh1.as_slice()),
            ("20180222T0230Z_1D_RTE0_001.zip", dh2.as_slice()),
            ("20180221_ENTSO-E_BD_001.zip", boundary.as_slice()),
            ("notes.txt", b"ignored".as_slice()),
        ]);
        let path = dir.join("20180221_0130_FO3_RTE0.zip");
        fs::write(&path, main).unwrap();
        path
    }

    #[test]
    fn listing_without_extract_only_creates_folders() -> Result<()> {
        let dataset = TempDir::new()?;
        let archive = write_fixture_archive(dataset.path());

        let cases = process_tso_archive(dataset.path(), &archive, "RTE0", false)?;
        assert_eq!(cases.date_hours, ["20180221T0130Z", "20180222T0230Z"]);

        let tso_dir = dataset.path().join(OUTPUT_FOLDER).join("RTE0");
        assert!(tso_dir.join("20180221T0130Z").is_dir());
        assert!(tso_dir.join("20180222T0230Z").is_dir());
        // nothing extracted
        assert!(!tso_dir.join("notes.txt").exists());
        assert!(!tso_dir.join("20180221T0130Z").join("case1.xml").exists());
        Ok(())
    }

    #[test]
    fn extract_unpacks_nested_and_boundary_archives() -> Result<()> {
        let dataset = TempDir::new()?;
        let archive = write_fixture_archive(dataset.path());

        let cases = process_tso_archive(dataset.path(), &archive, "RTE0", true)?;
        assert_eq!(cases.date_hours.len(), 2);

        let tso_dir = dataset.path().join(OUTPUT_FOLDER).join("RTE0");
        // case archives unpacked into their date-hour folder and removed
        assert!(tso_dir.join("20180221T0130Z").join("case1.xml").is_file());
        assert!(tso_dir.join("20180222T0230Z").join("case2.xml").is_file());
        assert!(!tso_dir.join("20180221T0130Z_1D_RTE0_001.zip").exists());
        assert!(!tso_dir.join("20180222T0230Z_1D_RTE0_001.zip").exists());
        // boundary unpacked into the TSO folder and removed
        assert!(tso_dir.join("boundary.xml").is_file());
        assert!(!tso_dir.join("20180221_ENTSO-E_BD_001.zip").exists());
        // plain files from the main archive are kept
        assert!(tso_dir.join("notes.txt").is_file());
        Ok(())
    }

    #[test]
    fn missing_archive_is_fatal() {
        let dataset = TempDir::new().unwrap();
        let missing = dataset.path().join("nope.zip");
        assert!(process_tso_archive(dataset.path(), &missing, "RTE0", false).is_err());
    }
}
