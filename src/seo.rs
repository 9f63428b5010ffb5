//! schema.org structured-data records.
//!
//! Pure builders: plain records in, plain serializable records out. The
//! external page renderer embeds the serialized JSON-LD into each page's
//! `<head>`; nothing here writes or transmits anything.
//!
//! Shapes are fixed. `@context`/`@type` are constants, supplied fields
//! pass through verbatim, and the optional image is *omitted* from the
//! serialized record when absent — never emitted as null.

use serde::Serialize;

/// Organization name used in every publisher record.
pub const PUBLISHER_NAME: &str = "Planted";

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// An Article record describing one plant profile page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub publisher: Organization,
}

/// Constant publisher sub-record.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
}

/// Build the Article record for a plant page.
///
/// `image` is passed through verbatim when present and omitted entirely
/// when not.
pub fn article_schema(
    name: &str,
    scientific_name: &str,
    description: &str,
    image: Option<&str>,
    url: &str,
) -> ArticleSchema {
    ArticleSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Article",
        name: name.to_string(),
        alternate_name: scientific_name.to_string(),
        description: description.to_string(),
        image: image.map(String::from),
        url: url.to_string(),
        publisher: Organization {
            schema_type: "Organization",
            name: PUBLISHER_NAME,
        },
    }
}

/// One (label, URL) step of a page's navigational ancestry.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A BreadcrumbList record.
#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// One positioned entry of a breadcrumb list.
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(rename = "item")]
    pub url: String,
}

/// Build the BreadcrumbList record for an ordered trail.
///
/// Output preserves input length and order; positions are 1-based.
/// An empty trail yields an empty item list, not an error.
pub fn breadcrumb_schema(items: &[Crumb]) -> BreadcrumbSchema {
    BreadcrumbSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(i, crumb)| ListItem {
                schema_type: "ListItem",
                position: i + 1,
                name: crumb.name.clone(),
                url: crumb.url.clone(),
            })
            .collect(),
    }
}
