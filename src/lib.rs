//! # Planted
//!
//! Content pipeline for the Planted plant-care catalog. Your filesystem is
//! the data source: markdown documents with YAML front-matter, stored under
//! category-named directories, become validated records in a single JSON
//! manifest that the page renderer consumes.
//!
//! # Architecture: Validate, Then Render
//!
//! ```text
//! content/  →  scan (validate + enrich)  →  manifest.json  →  renderer
//! ```
//!
//! The scan stage is the sole gate into the manifest. Every document is
//! checked against its kind's schema — collecting *every* violation, not
//! just the first — and a failing document halts the build with a full
//! report. Documents that pass come out fully typed, with defaults
//! applied, canonical URLs assigned, schema.org records attached, and
//! display strings pre-computed. Rendering never makes a validity
//! decision.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content tree, validates every document, produces the manifest |
//! | [`schema`] | Field-level document validation: `plant` and `guide` kinds |
//! | [`frontmatter`] | YAML front-matter splitting/parsing, body section checks |
//! | [`types`] | Document types and the closed code sets behind enum fields |
//! | [`taxonomy`] | The 8-category lookup table: labels, icons, ordering |
//! | [`display`] | Care-level display phrases and `capitalize` |
//! | [`seo`] | schema.org Article and BreadcrumbList builders |
//! | [`config`] | `config.toml` loading, merging, validation |
//! | [`output`] | CLI output formatting — inventory and failure reports |
//!
//! # Design Decisions
//!
//! ## One Enum, Three Consumers
//!
//! The category set exists once, as a Rust enum ([`types::Category`]).
//! The validator parses codes through it, the taxonomy describes it with
//! an exhaustive `match`, and the formatters go through the same codes.
//! The original sin this guards against: a category accepted by the
//! schema but missing from the display table, silently degrading labels
//! to raw slugs.
//!
//! ## Collect Violations, Don't Throw
//!
//! A content author fixing a document wants the whole list, not a
//! fix-one-rerun loop. Validators return
//! `Result<Doc, Vec<Violation>>` and every field check runs regardless
//! of earlier failures. The scan aggregates per-document failures the
//! same way across the whole tree.
//!
//! ## Total Lookups
//!
//! Display lookups never fail: unknown category slugs echo back, unknown
//! icons fall back to stock glyphs. Rendering stays resilient to a
//! half-filled table; validation — not display — is where unknown codes
//! are rejected.
//!
//! ## Manifest Over Templates
//!
//! This crate stops at the manifest. HTML templating, image compositing
//! for Open Graph cards, and deployment belong to external tools that
//! consume `manifest.json`; keeping them out means the pipeline has no
//! opinion about the front-end stack.

pub mod config;
pub mod display;
pub mod frontmatter;
pub mod output;
pub mod scan;
pub mod schema;
pub mod seo;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
