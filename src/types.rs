//! Shared document types and coded enums.
//!
//! Everything here is serialized into the manifest consumed by the page
//! renderer, so field names stay camelCase — identical to the front-matter
//! keys content authors write.
//!
//! Enum fields in front-matter are closed, case-sensitive code sets. Each
//! set is a Rust enum implementing [`Coded`], which is the single seam the
//! validator, the taxonomy, and the formatters all go through: the code
//! list the validator accepts *is* the enum, so lookup tables cannot drift
//! from the schema.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A closed set of front-matter codes.
///
/// `CODES` is the full accepted set in declaration order; `from_code` is
/// case-sensitive with no normalization.
pub trait Coded: Sized + Copy {
    /// Every accepted code, in declaration order.
    const CODES: &'static [&'static str];

    /// The front-matter/wire code for this value.
    fn code(self) -> &'static str;

    /// Parse a code. Case-sensitive, no normalization.
    fn from_code(code: &str) -> Option<Self>;
}

/// Define an enum whose variants map 1:1 to front-matter codes.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl Coded for $name {
            const CODES: &'static [&'static str] = &[$($code),+];

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }
    };
}

coded_enum!(
    /// The 8 room/use-case taxonomy slugs. A plant's primary category also
    /// names the directory it is stored under.
    Category {
        Bedroom => "bedroom",
        HomeOffice => "home-office",
        KitchenHerbs => "kitchen-herbs",
        LivingRoom => "living-room",
        KidsBaby => "kids-baby",
        AirWellness => "air-wellness",
        PetSafe => "pet-safe",
        LowMaintenance => "low-maintenance",
    }
);

coded_enum!(
    /// Light requirement levels.
    LightLevel {
        Low => "low",
        LowMedium => "low-medium",
        Medium => "medium",
        BrightIndirect => "bright-indirect",
        Direct => "direct",
    }
);

coded_enum!(
    /// Watering frequency levels.
    WaterNeed {
        Minimal => "minimal",
        Low => "low",
        Moderate => "moderate",
        Regular => "regular",
        Frequent => "frequent",
    }
);

coded_enum!(
    /// Ambient humidity preference.
    Humidity {
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
);

coded_enum!(
    /// Care difficulty.
    Difficulty {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);

coded_enum!(
    /// Toxicity classification.
    Toxicity {
        NonToxic => "non-toxic",
        MildlyToxic => "mildly-toxic",
        Toxic => "toxic",
    }
);

coded_enum!(
    /// Size class at maturity.
    MatureSize {
        Tiny => "tiny",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra-large",
    }
);

coded_enum!(
    /// Growth speed.
    GrowthRate {
        Slow => "slow",
        Moderate => "moderate",
        Fast => "fast",
    }
);

/// A validated plant profile document.
///
/// Produced only by the validator; by the time one of these exists every
/// constraint has passed and every declared default has been applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDoc {
    pub title: String,
    pub scientific_name: String,
    pub description: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_categories: Vec<Category>,
    pub light: LightLevel,
    pub water: WaterNeed,
    pub humidity: Humidity,
    pub temperature: String,
    pub soil: String,
    pub difficulty: Difficulty,
    pub toxicity: Toxicity,
    pub pet_safe: bool,
    pub child_safe: bool,
    pub size_at_maturity: MatureSize,
    pub mature_height: String,
    pub growth_rate: GrowthRate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub benefits: Vec<String>,
    pub nasa_clean_air: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_wisdom: Option<HealthWisdom>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_plants: Vec<String>,
    pub featured: bool,
    pub draft: bool,
    pub publish_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PlantImage>,
}

/// Traditional and scientific lore attached to a plant. Every field is
/// optional; the block itself is optional.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthWisdom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayurveda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modern_science: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folklore: Option<String>,
}

/// Hero image reference for a plant page.
#[derive(Debug, Clone, Serialize)]
pub struct PlantImage {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

/// A validated guide article document. Looser than [`PlantDoc`]: no
/// enum-heavy care attributes, longer title limit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDoc {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_plants: Vec<String>,
    pub featured: bool,
    pub draft: bool,
    pub publish_date: NaiveDate,
}
