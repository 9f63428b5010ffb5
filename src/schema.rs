//! Document schema validation.
//!
//! The validator is the sole gate between raw front-matter and the
//! manifest: a document either comes out as a fully-typed
//! [`PlantDoc`]/[`GuideDoc`] with defaults applied, or as a list of
//! [`Violation`]s covering **every** broken field — not just the first.
//! Rendering never sees an unvalidated document.
//!
//! Checks are explicit field-level operations on the raw YAML value,
//! composed by [`validate_plant`] and [`validate_guide`]. There is no
//! reflection and no constraint DSL; what each field accepts is written
//! out where the field is read.
//!
//! ## Constraints
//!
//! - String lengths are exact, counted in characters: plant titles ≤80,
//!   guide titles ≤100, descriptions ≤200.
//! - Enum fields are closed sets via [`Coded`], case-sensitive.
//! - Dates accept `YYYY-MM-DD`, `YYYY/MM/DD`, and RFC 3339 date-times.
//! - Defaulted fields (`secondaryCategories`, `tags`, `relatedPlants`,
//!   `featured`, `draft`, `humidity`, `nasaCleanAir`) are filled in when
//!   absent and validated normally when present. Explicit `null` counts
//!   as absent.
//! - A plant's `category` must match the directory the document lives in.

use crate::types::{
    Category, Coded, Difficulty, GrowthRate, GuideDoc, HealthWisdom, Humidity, LightLevel,
    MatureSize, PlantDoc, PlantImage, Toxicity, WaterNeed,
};
use chrono::{DateTime, NaiveDate};
use serde_yaml::Value;
use std::fmt;

/// Character limits, per document kind.
pub const PLANT_TITLE_LIMIT: usize = 80;
pub const GUIDE_TITLE_LIMIT: usize = 100;
pub const DESCRIPTION_LIMIT: usize = 200;

/// One broken constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted field path, e.g. `title`, `image.alt`, `secondaryCategories[1]`.
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// What was wrong with the field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// Required field absent (or explicitly null).
    Missing,
    /// Value present but of the wrong YAML type.
    WrongType { expected: &'static str },
    /// String longer than the declared character limit.
    TooLong { limit: usize, length: usize },
    /// Value not in the closed code set.
    NotInEnum { allowed: &'static [&'static str] },
    /// Date-like field that no accepted representation could parse.
    InvalidDate,
    /// Declared category does not match the containing directory.
    CategoryMismatch { directory: String },
    /// Markdown body lacks a required section heading.
    MissingSection { heading: &'static str },
    /// Front-matter block could not be parsed at all.
    Unparseable { message: String },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "required field is missing"),
            Self::WrongType { expected } => write!(f, "expected {expected}"),
            Self::TooLong { limit, length } => {
                write!(f, "{length} characters exceeds the {limit}-character limit")
            }
            Self::NotInEnum { allowed } => {
                write!(f, "not one of: {}", allowed.join(", "))
            }
            Self::InvalidDate => write!(f, "not a recognizable date"),
            Self::CategoryMismatch { directory } => {
                write!(f, "does not match the containing directory \"{directory}\"")
            }
            Self::MissingSection { heading } => {
                write!(f, "body is missing a \"## {heading}\" section")
            }
            Self::Unparseable { message } => {
                write!(f, "front-matter is not valid YAML: {message}")
            }
        }
    }
}

/// Field reader that accumulates violations instead of failing fast.
///
/// Each `required_*`/`optional_*` call records any violation and returns
/// `None` (or the default) so the caller can keep reading the remaining
/// fields; the document validator decides success once every field has
/// been visited.
struct Checker<'a> {
    doc: &'a Value,
    prefix: String,
    violations: Vec<Violation>,
}

impl<'a> Checker<'a> {
    fn new(doc: &'a Value) -> Self {
        Self {
            doc,
            prefix: String::new(),
            violations: Vec::new(),
        }
    }

    fn nested(doc: &'a Value, prefix: &str) -> Self {
        Self {
            doc,
            prefix: prefix.to_string(),
            violations: Vec::new(),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }

    fn report(&mut self, key: &str, kind: ViolationKind) {
        let field = self.path(key);
        self.violations.push(Violation::new(field, kind));
    }

    /// Fetch a field. Explicit null is treated as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.doc.get(key).filter(|v| !v.is_null())
    }

    fn required_string(&mut self, key: &str, limit: Option<usize>) -> Option<String> {
        match self.get(key) {
            Some(value) => self.string_value(key, value, limit),
            None => {
                self.report(key, ViolationKind::Missing);
                None
            }
        }
    }

    fn optional_string(&mut self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(|value| self.string_value(key, value, None))
    }

    fn string_value(&mut self, key: &str, value: &Value, limit: Option<usize>) -> Option<String> {
        let Some(s) = value.as_str() else {
            self.report(key, ViolationKind::WrongType { expected: "a string" });
            return None;
        };
        if let Some(max) = limit {
            let length = s.chars().count();
            if length > max {
                self.report(key, ViolationKind::TooLong { limit: max, length });
                return None;
            }
        }
        Some(s.to_string())
    }

    fn required_bool(&mut self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(value) => self.bool_value(key, value),
            None => {
                self.report(key, ViolationKind::Missing);
                None
            }
        }
    }

    fn bool_or(&mut self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => self.bool_value(key, value).unwrap_or(default),
            None => default,
        }
    }

    fn bool_value(&mut self, key: &str, value: &Value) -> Option<bool> {
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                self.report(key, ViolationKind::WrongType { expected: "a boolean" });
                None
            }
        }
    }

    fn required_enum<T: Coded>(&mut self, key: &str) -> Option<T> {
        match self.get(key) {
            Some(value) => self.enum_value(key, value),
            None => {
                self.report(key, ViolationKind::Missing);
                None
            }
        }
    }

    fn optional_enum<T: Coded>(&mut self, key: &str) -> Option<T> {
        self.get(key).and_then(|value| self.enum_value(key, value))
    }

    fn enum_or<T: Coded>(&mut self, key: &str, default: T) -> T {
        match self.get(key) {
            Some(value) => self.enum_value(key, value).unwrap_or(default),
            None => default,
        }
    }

    fn enum_value<T: Coded>(&mut self, key: &str, value: &Value) -> Option<T> {
        let Some(s) = value.as_str() else {
            self.report(key, ViolationKind::WrongType { expected: "a string" });
            return None;
        };
        match T::from_code(s) {
            Some(parsed) => Some(parsed),
            None => {
                self.report(key, ViolationKind::NotInEnum { allowed: T::CODES });
                None
            }
        }
    }

    /// Sequence of enum codes; absent means empty.
    fn enum_seq<T: Coded>(&mut self, key: &str) -> Vec<T> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        let Some(seq) = value.as_sequence() else {
            self.report(key, ViolationKind::WrongType { expected: "a sequence" });
            return Vec::new();
        };
        seq.iter()
            .enumerate()
            .filter_map(|(i, item)| self.enum_value(&format!("{key}[{i}]"), item))
            .collect()
    }

    /// Sequence of strings; absent means empty.
    fn string_seq(&mut self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(value) => self.string_seq_value(key, value),
            None => Vec::new(),
        }
    }

    /// Sequence of strings; absent is a violation.
    fn required_string_seq(&mut self, key: &str) -> Option<Vec<String>> {
        match self.get(key) {
            Some(value) => Some(self.string_seq_value(key, value)),
            None => {
                self.report(key, ViolationKind::Missing);
                None
            }
        }
    }

    fn string_seq_value(&mut self, key: &str, value: &Value) -> Vec<String> {
        let Some(seq) = value.as_sequence() else {
            self.report(key, ViolationKind::WrongType { expected: "a sequence" });
            return Vec::new();
        };
        seq.iter()
            .enumerate()
            .filter_map(|(i, item)| self.string_value(&format!("{key}[{i}]"), item, None))
            .collect()
    }

    fn required_date(&mut self, key: &str) -> Option<NaiveDate> {
        match self.get(key) {
            Some(value) => self.date_value(key, value),
            None => {
                self.report(key, ViolationKind::Missing);
                None
            }
        }
    }

    fn optional_date(&mut self, key: &str) -> Option<NaiveDate> {
        self.get(key).and_then(|value| self.date_value(key, value))
    }

    fn date_value(&mut self, key: &str, value: &Value) -> Option<NaiveDate> {
        let Some(s) = value.as_str() else {
            self.report(key, ViolationKind::WrongType { expected: "a date string" });
            return None;
        };
        match coerce_date(s) {
            Some(date) => Some(date),
            None => {
                self.report(key, ViolationKind::InvalidDate);
                None
            }
        }
    }
}

/// Coerce a date from its common front-matter representations.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Validate a raw plant document.
///
/// `directory` is the name of the category directory the document was
/// found in; a valid `category` that disagrees with it is a violation.
/// On failure, the returned list covers every broken field.
pub fn validate_plant(doc: &Value, directory: &str) -> Result<PlantDoc, Vec<Violation>> {
    let mut c = match mapping_checker(doc) {
        Ok(checker) => checker,
        Err(violations) => return Err(violations),
    };

    let title = c.required_string("title", Some(PLANT_TITLE_LIMIT));
    let scientific_name = c.required_string("scientificName", None);
    let description = c.required_string("description", Some(DESCRIPTION_LIMIT));

    let category = c.required_enum::<Category>("category");
    if let Some(cat) = category
        && cat.code() != directory
    {
        c.report(
            "category",
            ViolationKind::CategoryMismatch {
                directory: directory.to_string(),
            },
        );
    }

    let secondary_categories = c.enum_seq::<Category>("secondaryCategories");
    let light = c.required_enum::<LightLevel>("light");
    let water = c.required_enum::<WaterNeed>("water");
    let humidity = c.enum_or("humidity", Humidity::Moderate);
    let temperature = c.required_string("temperature", None);
    let soil = c.required_string("soil", None);
    let difficulty = c.required_enum::<Difficulty>("difficulty");
    let toxicity = c.required_enum::<Toxicity>("toxicity");
    let pet_safe = c.required_bool("petSafe");
    let child_safe = c.required_bool("childSafe");
    let size_at_maturity = c.required_enum::<MatureSize>("sizeAtMaturity");
    let mature_height = c.required_string("matureHeight", None);
    let growth_rate = c.required_enum::<GrowthRate>("growthRate");
    let origin = c.optional_string("origin");
    let benefits = c.required_string_seq("benefits");
    let nasa_clean_air = c.bool_or("nasaCleanAir", false);
    let health_wisdom = health_wisdom_field(&mut c);
    let tags = c.string_seq("tags");
    let related_plants = c.string_seq("relatedPlants");
    let featured = c.bool_or("featured", false);
    let draft = c.bool_or("draft", false);
    let publish_date = c.required_date("publishDate");
    let updated_date = c.optional_date("updatedDate");
    let image = image_field(&mut c);

    if !c.violations.is_empty() {
        return Err(c.violations);
    }

    // Every required field produced a value, or we returned above.
    Ok(PlantDoc {
        title: title.unwrap(),
        scientific_name: scientific_name.unwrap(),
        description: description.unwrap(),
        category: category.unwrap(),
        secondary_categories,
        light: light.unwrap(),
        water: water.unwrap(),
        humidity,
        temperature: temperature.unwrap(),
        soil: soil.unwrap(),
        difficulty: difficulty.unwrap(),
        toxicity: toxicity.unwrap(),
        pet_safe: pet_safe.unwrap(),
        child_safe: child_safe.unwrap(),
        size_at_maturity: size_at_maturity.unwrap(),
        mature_height: mature_height.unwrap(),
        growth_rate: growth_rate.unwrap(),
        origin,
        benefits: benefits.unwrap(),
        nasa_clean_air,
        health_wisdom,
        tags,
        related_plants,
        featured,
        draft,
        publish_date: publish_date.unwrap(),
        updated_date,
        image,
    })
}

/// Validate a raw guide document.
pub fn validate_guide(doc: &Value) -> Result<GuideDoc, Vec<Violation>> {
    let mut c = match mapping_checker(doc) {
        Ok(checker) => checker,
        Err(violations) => return Err(violations),
    };

    let title = c.required_string("title", Some(GUIDE_TITLE_LIMIT));
    let description = c.required_string("description", Some(DESCRIPTION_LIMIT));
    let category = c.optional_enum::<Category>("category");
    let tags = c.string_seq("tags");
    let related_plants = c.string_seq("relatedPlants");
    let featured = c.bool_or("featured", false);
    let draft = c.bool_or("draft", false);
    let publish_date = c.required_date("publishDate");

    if !c.violations.is_empty() {
        return Err(c.violations);
    }

    Ok(GuideDoc {
        title: title.unwrap(),
        description: description.unwrap(),
        category,
        tags,
        related_plants,
        featured,
        draft,
        publish_date: publish_date.unwrap(),
    })
}

fn mapping_checker(doc: &Value) -> Result<Checker<'_>, Vec<Violation>> {
    if doc.is_mapping() {
        Ok(Checker::new(doc))
    } else {
        Err(vec![Violation::new(
            "frontmatter",
            ViolationKind::WrongType {
                expected: "a mapping of fields",
            },
        )])
    }
}

/// `image`: optional mapping with required `src`/`alt` and optional `credit`.
fn image_field(c: &mut Checker) -> Option<PlantImage> {
    let value = c.get("image")?;
    if !value.is_mapping() {
        c.report("image", ViolationKind::WrongType { expected: "a mapping" });
        return None;
    }
    let mut nested = Checker::nested(value, "image");
    let src = nested.required_string("src", None);
    let alt = nested.required_string("alt", None);
    let credit = nested.optional_string("credit");
    let clean = nested.violations.is_empty();
    c.violations.append(&mut nested.violations);
    if clean {
        Some(PlantImage {
            src: src.unwrap(),
            alt: alt.unwrap(),
            credit,
        })
    } else {
        None
    }
}

/// `healthWisdom`: optional mapping where every entry is optional.
fn health_wisdom_field(c: &mut Checker) -> Option<HealthWisdom> {
    let value = c.get("healthWisdom")?;
    if !value.is_mapping() {
        c.report(
            "healthWisdom",
            ViolationKind::WrongType { expected: "a mapping" },
        );
        return None;
    }
    let mut nested = Checker::nested(value, "healthWisdom");
    let tcm = nested.optional_string("tcm");
    let ayurveda = nested.optional_string("ayurveda");
    let modern_science = nested.optional_string("modernScience");
    let folklore = nested.optional_string("folklore");
    let clean = nested.violations.is_empty();
    c.violations.append(&mut nested.violations);
    if clean {
        Some(HealthWisdom {
            tcm,
            ayurveda,
            modern_science,
            folklore,
        })
    } else {
        None
    }
}
