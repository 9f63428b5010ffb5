//! Content scanning and manifest generation.
//!
//! Walks the content directory, validates every document, and produces the
//! JSON manifest the external page renderer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── plants/
//! │   ├── bedroom/                 # Directory name = category slug
//! │   │   ├── lavender.mdx
//! │   │   └── snake-plant.mdx
//! │   └── pet-safe/
//! │       └── spider-plant.mdx
//! └── guides/
//!     ├── getting-started.mdx
//!     └── low-light-plants.mdx
//! ```
//!
//! ## Validation
//!
//! The scanner is all-or-nothing per document and exhaustive across
//! documents: every file is parsed and validated (in parallel — documents
//! are independent), and if any fail, the scan fails with **every**
//! document's full violation list. A failing document never reaches the
//! manifest, and a failing scan halts the build; nothing is silently
//! dropped.
//!
//! Scan-level rules on top of the per-document schema:
//! - a plant's category directory must match its declared `category`
//!   (checked by the validator, fed with the directory name from here)
//! - a plant body must contain a `## Setup Guide` section
//! - slugs (file stems) must be unique within their collection
//!
//! ## Output
//!
//! A [`Manifest`] with the site config echo, the category taxonomy, and
//! one entry per document carrying its canonical URL, schema.org records,
//! and pre-computed display strings. Entries are sorted by slug so the
//! manifest is deterministic regardless of directory order or worker
//! interleaving.

use crate::config::{self, SiteMeta};
use crate::display;
use crate::frontmatter;
use crate::schema::{self, Violation, ViolationKind};
use crate::seo::{self, ArticleSchema, BreadcrumbSchema, Crumb};
use crate::taxonomy::{CategoryEntry, Taxonomy};
use crate::types::{Coded, GuideDoc, PlantDoc};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

/// Markdown extensions the scanner picks up.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Section every plant body must carry.
const REQUIRED_PLANT_SECTION: &str = "Setup Guide";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{} document(s) failed validation", .0.len())]
    Invalid(Vec<DocumentFailure>),
    #[error("duplicate {collection} slug \"{slug}\" ({first} and {second})")]
    DuplicateSlug {
        collection: &'static str,
        slug: String,
        first: String,
        second: String,
    },
}

/// All violations for one rejected document.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// Path relative to the content root.
    pub path: String,
    pub violations: Vec<Violation>,
}

/// Manifest output from the scan. This is the contract with the external
/// renderer; field names are camelCase like the front-matter they echo.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub site: SiteMeta,
    pub categories: Vec<CategoryEntry>,
    pub plants: Vec<PlantEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guides: Vec<GuideEntry>,
}

/// One validated plant page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantEntry {
    /// File stem; used in URLs and `relatedPlants` references.
    pub slug: String,
    /// Source path relative to the content root.
    pub source_path: String,
    /// Canonical page URL.
    pub url: String,
    pub document: PlantDoc,
    pub display: PlantDisplay,
    pub schema: ArticleSchema,
    pub breadcrumbs: BreadcrumbSchema,
}

/// Pre-computed display strings for a plant page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDisplay {
    pub category_label: String,
    pub category_icon: String,
    pub light: String,
    pub water: String,
    pub difficulty: String,
}

/// One validated guide page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEntry {
    pub slug: String,
    pub source_path: String,
    pub url: String,
    pub document: GuideDoc,
    pub breadcrumbs: BreadcrumbSchema,
}

/// A content file queued for validation.
struct SourceFile {
    /// Path relative to the content root.
    rel_path: String,
    /// Name of the containing directory (the expected category for plants).
    directory: String,
    /// File stem.
    slug: String,
    contents: String,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let site_config = config::load_config(root)?;
    let taxonomy = Taxonomy::stock();

    let plant_files = collect_files(root, &root.join("plants"), 2)?;
    let guide_files = collect_files(root, &root.join("guides"), 1)?;

    // Documents are independent; validate them in parallel and collect
    // every failure before deciding the scan's fate.
    let plant_results: Vec<Result<(SourceFile, PlantDoc), DocumentFailure>> = plant_files
        .into_par_iter()
        .map(|file| {
            let doc = validate_plant_file(&file)?;
            Ok((file, doc))
        })
        .collect();
    let guide_results: Vec<Result<(SourceFile, GuideDoc), DocumentFailure>> = guide_files
        .into_par_iter()
        .map(|file| {
            let doc = validate_guide_file(&file)?;
            Ok((file, doc))
        })
        .collect();

    let mut failures: Vec<DocumentFailure> = Vec::new();
    let mut plants: Vec<(SourceFile, PlantDoc)> = Vec::new();
    for result in plant_results {
        match result {
            Ok(ok) => plants.push(ok),
            Err(failure) => failures.push(failure),
        }
    }
    let mut guides: Vec<(SourceFile, GuideDoc)> = Vec::new();
    for result in guide_results {
        match result {
            Ok(ok) => guides.push(ok),
            Err(failure) => failures.push(failure),
        }
    }

    if !failures.is_empty() {
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        return Err(ScanError::Invalid(failures));
    }

    plants.sort_by(|a, b| a.0.slug.cmp(&b.0.slug));
    guides.sort_by(|a, b| a.0.slug.cmp(&b.0.slug));
    reject_duplicate_slugs("plant", plants.iter().map(|(f, _)| f))?;
    reject_duplicate_slugs("guide", guides.iter().map(|(f, _)| f))?;

    let site = site_config.site.clone();
    let plants = plants
        .into_iter()
        .map(|(file, doc)| plant_entry(file, doc, &site, &taxonomy))
        .collect();
    let guides = guides
        .into_iter()
        .map(|(file, doc)| guide_entry(file, doc, &site))
        .collect();

    Ok(Manifest {
        site,
        categories: taxonomy.all().to_vec(),
        plants,
        guides,
    })
}

/// Collect content files `depth` levels under `base`, with their
/// root-relative paths, containing directory name, and slug.
///
/// A missing `base` directory yields an empty list — a site with no
/// guides (yet) is not an error.
fn collect_files(root: &Path, base: &Path, depth: usize) -> Result<Vec<SourceFile>, ScanError> {
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(base)
        .min_depth(depth)
        .max_depth(depth)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ScanError::Io(e.into()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_document(path) {
            continue;
        }

        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let directory = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let contents = fs::read_to_string(path)?;

        files.push(SourceFile {
            rel_path,
            directory,
            slug,
            contents,
        });
    }
    Ok(files)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Split, parse, and validate one plant file, including the body rule.
fn validate_plant_file(file: &SourceFile) -> Result<PlantDoc, DocumentFailure> {
    let (raw, body) = parse_frontmatter(file)?;
    let mut violations = Vec::new();

    let doc = match schema::validate_plant(&raw, &file.directory) {
        Ok(doc) => Some(doc),
        Err(mut schema_violations) => {
            violations.append(&mut schema_violations);
            None
        }
    };

    if !frontmatter::has_section(body, REQUIRED_PLANT_SECTION) {
        violations.push(Violation::new(
            "body",
            ViolationKind::MissingSection {
                heading: REQUIRED_PLANT_SECTION,
            },
        ));
    }

    match doc {
        Some(doc) if violations.is_empty() => Ok(doc),
        _ => Err(DocumentFailure {
            path: file.rel_path.clone(),
            violations,
        }),
    }
}

fn validate_guide_file(file: &SourceFile) -> Result<GuideDoc, DocumentFailure> {
    let (raw, _body) = parse_frontmatter(file)?;
    schema::validate_guide(&raw).map_err(|violations| DocumentFailure {
        path: file.rel_path.clone(),
        violations,
    })
}

/// Extract and parse the front-matter block, mapping the two ways it can
/// fail (no block, broken YAML) to document failures.
fn parse_frontmatter(file: &SourceFile) -> Result<(serde_yaml::Value, &str), DocumentFailure> {
    let Some((block, body)) = frontmatter::split(&file.contents) else {
        return Err(DocumentFailure {
            path: file.rel_path.clone(),
            violations: vec![Violation::new("frontmatter", ViolationKind::Missing)],
        });
    };
    match frontmatter::parse(block) {
        Ok(value) => Ok((value, body)),
        Err(err) => Err(DocumentFailure {
            path: file.rel_path.clone(),
            violations: vec![Violation::new(
                "frontmatter",
                ViolationKind::Unparseable {
                    message: err.to_string(),
                },
            )],
        }),
    }
}

/// Slugs are URL identities; two documents may not share one.
/// Expects `files` sorted by slug.
fn reject_duplicate_slugs<'a>(
    collection: &'static str,
    files: impl Iterator<Item = &'a SourceFile>,
) -> Result<(), ScanError> {
    let files: Vec<&SourceFile> = files.collect();
    for pair in files.windows(2) {
        if pair[0].slug == pair[1].slug {
            return Err(ScanError::DuplicateSlug {
                collection,
                slug: pair[0].slug.clone(),
                first: pair[0].rel_path.clone(),
                second: pair[1].rel_path.clone(),
            });
        }
    }
    Ok(())
}

fn plant_entry(
    file: SourceFile,
    doc: PlantDoc,
    site: &SiteMeta,
    taxonomy: &Taxonomy,
) -> PlantEntry {
    let category = doc.category.code();
    let url = site.url(&format!("/plants/{category}/{}/", file.slug));
    let category_url = site.url(&format!("/categories/{category}/"));

    let schema = seo::article_schema(
        &doc.title,
        &doc.scientific_name,
        &doc.description,
        doc.image.as_ref().map(|i| i.src.as_str()),
        &url,
    );
    let breadcrumbs = seo::breadcrumb_schema(&[
        Crumb::new("Home", site.url("/")),
        Crumb::new(taxonomy.label(category), category_url),
        Crumb::new(doc.title.clone(), url.clone()),
    ]);
    let display = PlantDisplay {
        category_label: taxonomy.label(category).to_string(),
        category_icon: taxonomy.icon(category).to_string(),
        light: display::format_light(doc.light.code()).to_string(),
        water: display::format_water(doc.water.code()).to_string(),
        difficulty: display::capitalize(doc.difficulty.code()),
    };

    PlantEntry {
        slug: file.slug,
        source_path: file.rel_path,
        url,
        document: doc,
        display,
        schema,
        breadcrumbs,
    }
}

fn guide_entry(file: SourceFile, doc: GuideDoc, site: &SiteMeta) -> GuideEntry {
    let url = site.url(&format!("/guides/{}/", file.slug));
    let breadcrumbs = seo::breadcrumb_schema(&[
        Crumb::new("Home", site.url("/")),
        Crumb::new("Guides", site.url("/guides/")),
        Crumb::new(doc.title.clone(), url.clone()),
    ]);

    GuideEntry {
        slug: file.slug,
        source_path: file.rel_path,
        url,
        document: doc,
        breadcrumbs,
    }
}
