//! vcardkit - integration test support.
//!
//! Locates the on-disk fixtures and loads their JSON expectations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub use vcardkit_app::render;
pub use vcardkit_core::config;
pub use vcardkit_rfc::rfc::vcard;

/// Expected content of one parsed card: property name to values, in order.
pub type CardExpectation = BTreeMap<String, Vec<String>>;

/// Expectation file stored next to each valid `.vcf` fixture.
#[derive(Debug, Deserialize)]
pub struct Expectation {
    pub cards: Vec<CardExpectation>,
}

/// Root of the fixture tree.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Lists the `.vcf` files of a fixture subdirectory, sorted by name.
///
/// ## Errors
/// Returns an error if the directory cannot be read.
pub fn vcf_fixtures(subdir: &str) -> Result<Vec<PathBuf>> {
    let dir = fixtures_dir().join(subdir);
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext == vcardkit_core::constants::VCARD_FILE_EXTENSION)
        {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Loads the `.json` expectation that sits next to `vcf`.
///
/// ## Errors
/// Returns an error if the file is missing or malformed.
pub fn load_expectation(vcf: &Path) -> Result<Expectation> {
    let path = vcf.with_extension("json");
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Loads the negative fixture table: file name to expected error kind.
///
/// ## Errors
/// Returns an error if the table is missing or malformed.
pub fn load_negative_table() -> Result<BTreeMap<String, String>> {
    let path = fixtures_dir().join("negative").join("expected_errors.json");
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
