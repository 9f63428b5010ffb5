//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display
//! for every entity (category, plant, guide) is its semantic identity —
//! display name and positional index — with filesystem paths shown as
//! secondary context via indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan / Check
//!
//! ```text
//! Categories
//! 001 Bedroom & Sleep (2 plants)
//!     001 Lavender
//!         Source: plants/bedroom/lavender.mdx
//!     002 Snake Plant
//!         Source: plants/bedroom/snake-plant.mdx
//!
//! Guides
//! 001 Getting Started With Houseplants
//!     Source: guides/getting-started.mdx
//!
//! 3 plants in 2 categories, 1 guide
//! ```
//!
//! ## Failures
//!
//! ```text
//! Validation failures
//! plants/bedroom/broken.mdx
//!     title: required field is missing
//!     light: not one of: low, low-medium, medium, bright-indirect, direct
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::{DocumentFailure, Manifest, PlantEntry};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Bedroom & Sleep (2 plants)
/// 001 Getting Started With Houseplants
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 plant)", format_index(index), title),
        Some(n) => format!("{} {} ({} plants)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

fn plant_line(index: usize, plant: &PlantEntry) -> String {
    let mut line = format!("{} {}", format_index(index), plant.document.title);
    if plant.document.draft {
        line.push_str(" (draft)");
    }
    line
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scan inventory: categories with their plants, then guides,
/// then a one-line summary.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Categories".to_string());
    let mut populated = 0usize;
    for entry in &manifest.categories {
        let plants: Vec<&PlantEntry> = manifest
            .plants
            .iter()
            .filter(|p| p.document.category == entry.category)
            .collect();
        if plants.is_empty() {
            continue;
        }
        populated += 1;
        lines.push(entity_header(populated, entry.name, Some(plants.len())));
        for (i, plant) in plants.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), plant_line(i + 1, plant)));
            lines.push(format!("{}Source: {}", indent(2), plant.source_path));
        }
    }
    if populated == 0 {
        lines.push(format!("{}(no plants)", indent(1)));
    }

    if !manifest.guides.is_empty() {
        lines.push(String::new());
        lines.push("Guides".to_string());
        for (i, guide) in manifest.guides.iter().enumerate() {
            lines.push(entity_header(i + 1, &guide.document.title, None));
            lines.push(format!("{}Source: {}", indent(1), guide.source_path));
        }
    }

    lines.push(String::new());
    lines.push(summary_line(manifest, populated));
    lines
}

fn summary_line(manifest: &Manifest, populated: usize) -> String {
    let plants = manifest.plants.len();
    let guides = manifest.guides.len();
    format!(
        "{} {} in {} {}, {} {}",
        plants,
        pluralize(plants, "plant"),
        populated,
        pluralize(populated, "category"),
        guides,
        pluralize(guides, "guide"),
    )
}

fn pluralize(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else if word == "category" {
        "categories".to_string()
    } else {
        format!("{word}s")
    }
}

/// Print the scan inventory to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// Failure report
// ============================================================================

/// Format the validation failure report: one block per document, one
/// indented line per violation.
pub fn format_failure_report(failures: &[DocumentFailure]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Validation failures".to_string());
    for failure in failures {
        lines.push(failure.path.clone());
        for violation in &failure.violations {
            lines.push(format!("{}{}", indent(1), violation));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{} {} failed validation",
        failures.len(),
        pluralize(failures.len(), "document"),
    ));
    lines
}

/// Print the validation failure report to stdout.
pub fn print_failure_report(failures: &[DocumentFailure]) {
    for line in format_failure_report(failures) {
        println!("{line}");
    }
}
