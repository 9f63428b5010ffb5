//! Category taxonomy: display names, descriptions, icons, ordering.
//!
//! The taxonomy is built once at startup with [`Taxonomy::stock`] and passed
//! by reference to whatever needs display strings — there is no mutable
//! global table. The descriptor for each category comes from an exhaustive
//! `match` over [`Category`], so adding a category to the schema without
//! giving it display metadata is a compile error, not a silent raw-slug
//! fallback.
//!
//! Lookups are total. Unrecognized slugs never panic and never return an
//! empty string: labels echo the slug back, icons fall back to a stock
//! glyph. This keeps rendering resilient when a document references a slug
//! the table does not know.

use crate::types::{Category, Coded};
use serde::Serialize;

/// Icon used when a category slug is not recognized.
pub const DEFAULT_CATEGORY_ICON: &str = "🌱";

/// Icon used when a guide group is absent or not recognized.
pub const DEFAULT_GROUP_ICON: &str = "📗";

/// Guide group icons, shown on guide cards and section headers.
const GROUP_ICONS: &[(&str, &str)] = &[
    ("health", "💚"),
    ("life", "🏠"),
    ("practical", "🎯"),
    ("reference", "📖"),
];

/// Display metadata for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    #[serde(rename = "slug")]
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub order: u8,
}

/// Descriptor for a category. Exhaustive by construction.
fn describe(category: Category) -> CategoryEntry {
    let (name, description, icon, order) = match category {
        Category::Bedroom => (
            "Bedroom & Sleep",
            "Plants that purify air, promote calm, and improve sleep quality",
            "🌙",
            1,
        ),
        Category::HomeOffice => (
            "Home Office",
            "Focus-enhancing, screen-fatigue-reducing, desk-friendly plants",
            "💻",
            2,
        ),
        Category::KitchenHerbs => (
            "Kitchen & Herbs",
            "Culinary herbs, antimicrobial plants, and natural pest deterrents",
            "🌿",
            3,
        ),
        Category::LivingRoom => (
            "Living Room",
            "Statement plants, conversation pieces, and air purifiers",
            "🪴",
            4,
        ),
        Category::KidsBaby => (
            "Kids & Baby",
            "Non-toxic, educational, and safe plants for children and nurseries",
            "👶",
            5,
        ),
        Category::AirWellness => (
            "Air & Wellness",
            "NASA-studied air purifiers, stress relief, and medicinal plants",
            "🌬️",
            6,
        ),
        Category::PetSafe => (
            "Pet Safe",
            "Verified non-toxic plants for homes with cats and dogs",
            "🐾",
            7,
        ),
        Category::LowMaintenance => (
            "Low Maintenance",
            "Drought-tolerant, forgetful-waterer-proof, near-indestructible plants",
            "🧘",
            8,
        ),
    };
    CategoryEntry {
        category,
        name,
        description,
        icon,
        order,
    }
}

/// The category lookup table: immutable after construction.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
}

impl Taxonomy {
    /// Build the stock taxonomy, sorted ascending by `order`.
    pub fn stock() -> Self {
        let mut entries: Vec<CategoryEntry> =
            Category::ALL.iter().map(|&c| describe(c)).collect();
        entries.sort_by_key(|e| e.order);
        Self { entries }
    }

    /// All categories in display order. Always exactly 8, no duplicates.
    pub fn all(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Look up the entry for a known category.
    pub fn entry(&self, category: Category) -> &CategoryEntry {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .expect("every Category has a descriptor")
    }

    /// Display name for a slug, or the slug itself if unrecognized.
    pub fn label<'a>(&'a self, slug: &'a str) -> &'a str {
        match Category::from_code(slug) {
            Some(cat) => self.entry(cat).name,
            None => slug,
        }
    }

    /// Icon for a slug, or [`DEFAULT_CATEGORY_ICON`] if unrecognized.
    pub fn icon(&self, slug: &str) -> &'static str {
        match Category::from_code(slug) {
            Some(cat) => self.entry(cat).icon,
            None => DEFAULT_CATEGORY_ICON,
        }
    }

    /// Icon for a guide group. Absent and unrecognized behave identically,
    /// yielding [`DEFAULT_GROUP_ICON`].
    pub fn group_icon(&self, group: Option<&str>) -> &'static str {
        group
            .and_then(|g| {
                GROUP_ICONS
                    .iter()
                    .find(|(key, _)| *key == g)
                    .map(|(_, icon)| *icon)
            })
            .unwrap_or(DEFAULT_GROUP_ICON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_exactly_eight_sorted_by_order() {
        let tax = Taxonomy::stock();
        let all = tax.all();
        assert_eq!(all.len(), 8);
        for pair in all.windows(2) {
            assert!(pair[0].order < pair[1].order);
        }
        assert_eq!(all[0].category.code(), "bedroom");
        assert_eq!(all[7].category.code(), "low-maintenance");
    }

    #[test]
    fn no_duplicate_categories() {
        let tax = Taxonomy::stock();
        for (i, a) in tax.all().iter().enumerate() {
            for b in &tax.all()[i + 1..] {
                assert_ne!(a.category, b.category);
            }
        }
    }

    #[test]
    fn every_entry_has_nonempty_metadata() {
        let tax = Taxonomy::stock();
        for entry in tax.all() {
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.icon.is_empty());
        }
    }

    #[test]
    fn label_for_known_slugs() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.label("bedroom"), "Bedroom & Sleep");
        assert_eq!(tax.label("home-office"), "Home Office");
        assert_eq!(tax.label("kitchen-herbs"), "Kitchen & Herbs");
        assert_eq!(tax.label("pet-safe"), "Pet Safe");
    }

    #[test]
    fn label_echoes_unknown_slug() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.label("unknown"), "unknown");
        assert_eq!(tax.label(""), "");
    }

    #[test]
    fn icon_for_known_slugs() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.icon("bedroom"), "🌙");
        assert_eq!(tax.icon("pet-safe"), "🐾");
        assert_eq!(tax.icon("low-maintenance"), "🧘");
    }

    #[test]
    fn icon_falls_back_for_unknown_slug() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.icon("unknown"), DEFAULT_CATEGORY_ICON);
    }

    #[test]
    fn group_icon_for_known_groups() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.group_icon(Some("health")), "💚");
        assert_eq!(tax.group_icon(Some("life")), "🏠");
        assert_eq!(tax.group_icon(Some("practical")), "🎯");
        assert_eq!(tax.group_icon(Some("reference")), "📖");
    }

    #[test]
    fn group_icon_falls_back_for_unknown_and_absent() {
        let tax = Taxonomy::stock();
        assert_eq!(tax.group_icon(Some("unknown")), DEFAULT_GROUP_ICON);
        assert_eq!(tax.group_icon(None), DEFAULT_GROUP_ICON);
    }

    #[test]
    fn serialized_entry_uses_slug_key() {
        let tax = Taxonomy::stock();
        let json = serde_json::to_value(&tax.all()[0]).unwrap();
        assert_eq!(json["slug"], "bedroom");
        assert_eq!(json["name"], "Bedroom & Sleep");
        assert_eq!(json["order"], 1);
    }
}
