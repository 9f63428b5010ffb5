//! Human-readable formatting for coded care levels.
//!
//! All functions here are total: any input produces a usable display
//! string. Recognized codes map to configured phrases; anything else is
//! echoed back unchanged so a renderer never shows an empty cell.

/// Format a light level code as a display phrase.
///
/// - `"low"` → "Low light"
/// - `"bright-indirect"` → "Bright indirect"
/// - unrecognized input → echoed back unchanged
pub fn format_light(level: &str) -> &str {
    match level {
        "low" => "Low light",
        "low-medium" => "Low to medium",
        "medium" => "Medium light",
        "bright-indirect" => "Bright indirect",
        "direct" => "Direct sunlight",
        other => other,
    }
}

/// Format a water need code as a display phrase.
///
/// Unrecognized input is echoed back unchanged.
pub fn format_water(level: &str) -> &str {
    match level {
        "minimal" => "Minimal",
        "low" => "Low",
        "moderate" => "Moderate",
        "regular" => "Regular",
        "frequent" => "Frequent",
        other => other,
    }
}

/// Uppercase exactly the first character. Empty input stays empty;
/// subsequent characters are untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coded, LightLevel};

    #[test]
    fn light_levels_format() {
        assert_eq!(format_light("low"), "Low light");
        assert_eq!(format_light("low-medium"), "Low to medium");
        assert_eq!(format_light("medium"), "Medium light");
        assert_eq!(format_light("bright-indirect"), "Bright indirect");
        assert_eq!(format_light("direct"), "Direct sunlight");
    }

    #[test]
    fn light_echoes_unknown() {
        assert_eq!(format_light("unknown"), "unknown");
        assert_eq!(format_light(""), "");
    }

    #[test]
    fn water_levels_format() {
        assert_eq!(format_water("minimal"), "Minimal");
        assert_eq!(format_water("moderate"), "Moderate");
        assert_eq!(format_water("frequent"), "Frequent");
    }

    #[test]
    fn water_echoes_unknown() {
        assert_eq!(format_water("unknown"), "unknown");
    }

    #[test]
    fn every_schema_light_code_has_a_phrase() {
        // A code the validator accepts must never fall through to the echo
        // branch.
        for code in LightLevel::CODES {
            assert_ne!(format_light(code), *code, "no phrase for {code}");
        }
    }

    #[test]
    fn capitalize_basics() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("beginner"), "Beginner");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize("already Capitalized"), "Already Capitalized");
    }

    #[test]
    fn capitalize_handles_multibyte_first_char() {
        assert_eq!(capitalize("über"), "Über");
    }
}
