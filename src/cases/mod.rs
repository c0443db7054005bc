// src/cases/mod.rs
//
// Naming rules for DACF dataset archives: which entries are date-hour test
// cases, which are boundary sets, and how TSO identifiers turn into Java
// class/method/constant names.

use std::collections::BTreeSet;

use anyhow::{bail, Result};

/// Marker in an entry name identifying the shared boundary-set archive.
pub const BOUNDARY_MARKER: &str = "ENTSO-E_BD";

/// Subfolder of the dataset root that receives extracted archives.
pub const OUTPUT_FOLDER: &str = "unzipped";

/// Derive the TSO identifier from a top-level archive filename.
/// The name is underscore-delimited and the 4th field is the TSO,
/// e.g. `20180221_0130_FO3_RTE0.zip` → `RTE0`.
pub fn tso_from_archive_name(filename: &str) -> Result<String> {
    let stem = filename.strip_suffix(".zip").unwrap_or(filename);
    match stem.split('_').nth(3) {
        Some(tso) if !tso.is_empty() => Ok(tso.to_string()),
        _ => bail!("cannot derive a TSO id from archive name {:?}", filename),
    }
}

/// First underscore-delimited token of an entry name, used as the
/// date-hour identifier.
pub fn date_hour_from_name(filename: &str) -> &str {
    filename.split('_').next().unwrap_or(filename)
}

pub fn is_boundary_name(filename: &str) -> bool {
    filename.contains(BOUNDARY_MARKER)
}

/// A date-hour entry is any zip that is not the boundary archive.
pub fn is_date_hour_zip(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".zip") && !is_boundary_name(filename)
}

/// Title-case a TSO identifier for use in class names: the first letter of
/// every alphabetic run is uppercased, the rest lowercased, everything else
/// kept as-is. `RTE0` → `Rte0`, `50hertz` → `50Hertz`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// The set of date-hour test cases found in one TSO archive.
#[derive(Debug, Clone)]
pub struct TestCaseSet {
    pub tso: String,
    /// Distinct date-hour ids, sorted so downstream output is deterministic.
    pub date_hours: Vec<String>,
}

impl TestCaseSet {
    /// Collect the distinct date-hour ids from an archive listing.
    pub fn from_entry_names<'a, I>(tso: &str, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let dhs: BTreeSet<String> = names
            .into_iter()
            .filter(|n| is_date_hour_zip(n))
            .map(|n| date_hour_from_name(n).to_string())
            .collect();
        Self {
            tso: tso.to_string(),
            date_hours: dhs.into_iter().collect(),
        }
    }

    /// Prefix for generated class names.
    pub fn class_prefix(&self) -> String {
        title_case(&self.tso)
    }

    /// Prefix for generated method names.
    pub fn method_prefix(&self) -> String {
        self.tso.to_lowercase()
    }

    /// Name of the generated data-path constant.
    pub fn path_const(&self) -> String {
        self.tso.to_uppercase()
    }
}
