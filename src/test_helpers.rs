//! Shared test utilities for the planted test suite.
//!
//! Provides fixture setup and manifest lookup helpers for tests that
//! exercise the scan pipeline end to end.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let plant = find_plant(&manifest, "lavender");
//! assert_eq!(plant.document.title, "Lavender");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{DocumentFailure, GuideEntry, Manifest, PlantEntry, ScanError};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a plant entry by slug. Panics if not found.
pub fn find_plant<'a>(manifest: &'a Manifest, slug: &str) -> &'a PlantEntry {
    manifest
        .plants
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs = plant_slugs(manifest);
            panic!("plant '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a guide entry by slug. Panics if not found.
pub fn find_guide<'a>(manifest: &'a Manifest, slug: &str) -> &'a GuideEntry {
    manifest
        .guides
        .iter()
        .find(|g| g.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.guides.iter().map(|g| g.slug.as_str()).collect();
            panic!("guide '{slug}' not found. Available: {slugs:?}")
        })
}

/// All plant slugs in manifest order.
pub fn plant_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.plants.iter().map(|p| p.slug.as_str()).collect()
}

// =========================================================================
// Scan result helpers
// =========================================================================

/// Unwrap a scan result expected to fail validation, returning the
/// failures. Panics on success or on any other error kind.
pub fn expect_invalid(result: Result<Manifest, ScanError>) -> Vec<DocumentFailure> {
    match result {
        Err(ScanError::Invalid(failures)) => failures,
        Err(other) => panic!("expected validation failure, got error: {other}"),
        Ok(manifest) => panic!(
            "expected validation failure, but scan succeeded with {} plants",
            manifest.plants.len()
        ),
    }
}
