//! Integration tests for the serialized manifest — the contract with the
//! external page renderer. These assert on the JSON itself, not on Rust
//! types: key casing, schema.org tags, and field omission rules are what
//! the renderer actually sees.

use planted::scan::scan;
use std::path::Path;

fn fixture_manifest() -> serde_json::Value {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    let manifest = scan(&root).expect("fixture content must be valid");
    serde_json::to_value(&manifest).unwrap()
}

fn plant<'a>(manifest: &'a serde_json::Value, slug: &str) -> &'a serde_json::Value {
    manifest["plants"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["slug"] == slug)
        .unwrap_or_else(|| panic!("no plant with slug {slug}"))
}

#[test]
fn document_keys_are_camel_case() {
    let manifest = fixture_manifest();
    let doc = &plant(&manifest, "lavender")["document"];
    assert!(doc.get("scientificName").is_some());
    assert!(doc.get("publishDate").is_some());
    assert!(doc.get("petSafe").is_some());
    assert!(doc.get("sizeAtMaturity").is_some());
    // No snake_case leakage.
    assert!(doc.get("scientific_name").is_none());
    assert!(doc.get("publish_date").is_none());
}

#[test]
fn enum_values_serialize_as_codes() {
    let manifest = fixture_manifest();
    let doc = &plant(&manifest, "lavender")["document"];
    assert_eq!(doc["category"], "bedroom");
    assert_eq!(doc["light"], "bright-indirect");
    assert_eq!(doc["toxicity"], "mildly-toxic");
    assert_eq!(doc["publishDate"], "2025-03-10");
}

#[test]
fn defaults_appear_filled_in() {
    let manifest = fixture_manifest();
    let doc = &plant(&manifest, "basil")["document"];
    // basil declares no humidity and no nasaCleanAir; defaults must be
    // materialized in the manifest, not left to the renderer to guess.
    assert_eq!(doc["humidity"], "moderate");
    assert_eq!(doc["nasaCleanAir"], false);
    assert_eq!(doc["featured"], false);
    assert_eq!(doc["draft"], true);
}

#[test]
fn article_schema_shape_matches_schema_org() {
    let manifest = fixture_manifest();
    let schema = &plant(&manifest, "spider-plant")["schema"];
    assert_eq!(schema["@context"], "https://schema.org");
    assert_eq!(schema["@type"], "Article");
    assert_eq!(schema["name"], "Spider Plant");
    assert_eq!(schema["alternateName"], "Chlorophytum comosum");
    assert_eq!(schema["image"], "/images/spider-plant.jpg");
    assert_eq!(schema["publisher"]["@type"], "Organization");
    assert_eq!(schema["publisher"]["name"], "Planted");
}

#[test]
fn imageless_plant_omits_image_key_entirely() {
    let manifest = fixture_manifest();
    let schema = &plant(&manifest, "lavender")["schema"];
    assert!(schema.get("image").is_none(), "image must be omitted, not null");
    let doc = &plant(&manifest, "lavender")["document"];
    assert!(doc.get("image").is_none());
}

#[test]
fn breadcrumbs_positions_are_one_based_and_ordered() {
    let manifest = fixture_manifest();
    let crumbs = &plant(&manifest, "snake-plant")["breadcrumbs"];
    assert_eq!(crumbs["@type"], "BreadcrumbList");
    let items = crumbs["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["@type"], "ListItem");
        assert_eq!(item["position"], i + 1);
    }
    assert_eq!(items[0]["name"], "Home");
    assert_eq!(items[1]["name"], "Bedroom & Sleep");
    assert_eq!(items[2]["name"], "Snake Plant");
}

#[test]
fn urls_are_canonical_under_base_url() {
    let manifest = fixture_manifest();
    let entry = plant(&manifest, "spider-plant");
    assert_eq!(
        entry["url"],
        "https://example.test/planted/plants/pet-safe/spider-plant/"
    );
    let guides = manifest["guides"].as_array().unwrap();
    assert!(
        guides
            .iter()
            .all(|g| g["url"].as_str().unwrap().starts_with("https://example.test/planted/guides/"))
    );
}

#[test]
fn categories_block_lists_all_eight_in_order() {
    let manifest = fixture_manifest();
    let categories = manifest["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["slug"], "bedroom");
    assert_eq!(categories[0]["icon"], "🌙");
    assert_eq!(categories[7]["slug"], "low-maintenance");
    let orders: Vec<i64> = categories
        .iter()
        .map(|c| c["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn site_block_echoes_config() {
    let manifest = fixture_manifest();
    assert_eq!(manifest["site"]["title"], "Planted");
    assert_eq!(manifest["site"]["base_url"], "https://example.test/planted");
}

#[test]
fn display_block_has_human_strings() {
    let manifest = fixture_manifest();
    let display = &plant(&manifest, "basil")["display"];
    assert_eq!(display["categoryLabel"], "Kitchen & Herbs");
    assert_eq!(display["categoryIcon"], "🌿");
    assert_eq!(display["light"], "Direct sunlight");
    assert_eq!(display["water"], "Frequent");
    assert_eq!(display["difficulty"], "Intermediate");
}
