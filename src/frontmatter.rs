//! Front-matter extraction for content documents.
//!
//! A document is a YAML block fenced by `---` lines, followed by a
//! markdown body:
//!
//! ```text
//! ---
//! title: Lavender
//! category: bedroom
//! ---
//!
//! ## Setup Guide
//! ...
//! ```
//!
//! Splitting and parsing are separate steps so the scanner can report
//! "no front-matter" and "front-matter is not valid YAML" as distinct
//! violations on the offending document.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Split a document into its raw YAML block and markdown body.
///
/// The document must begin with a `---` fence on the first line and
/// contain a closing `---` fence on its own line. Returns `None` when
/// there is no opening fence or the block is unterminated.
pub fn split(source: &str) -> Option<(&str, &str)> {
    let rest = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))?;

    let mut search = 0;
    while let Some(pos) = rest[search..].find("\n---") {
        let fence = search + pos;
        let after = &rest[fence + 4..];
        // The closing fence must be a whole line: `---` followed by a line
        // break or end of input.
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            let block = &rest[..fence];
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);
            return Some((block, body));
        }
        search = fence + 4;
    }
    None
}

/// Parse a raw front-matter block into a YAML value.
///
/// The result is expected to be a mapping; the validator reports a
/// violation if it is anything else.
pub fn parse(block: &str) -> Result<serde_yaml::Value, serde_yaml::Error> {
    serde_yaml::from_str(block)
}

/// Whether the markdown body contains a level-2 heading with exactly the
/// given text.
pub fn has_section(body: &str, heading: &str) -> bool {
    let mut in_heading = false;
    let mut text = String::new();
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if text.trim() == heading {
                    return true;
                }
                in_heading = false;
            }
            Event::Text(t) if in_heading => text.push_str(&t),
            Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_basic_document() {
        let doc = "---\ntitle: Lavender\n---\n\nBody text.\n";
        let (block, body) = split(doc).unwrap();
        assert_eq!(block, "title: Lavender");
        assert_eq!(body, "\nBody text.\n");
    }

    #[test]
    fn split_without_frontmatter_is_none() {
        assert_eq!(split("Just a body.\n"), None);
        assert_eq!(split(""), None);
    }

    #[test]
    fn split_unterminated_block_is_none() {
        assert_eq!(split("---\ntitle: Lavender\nno closing fence\n"), None);
    }

    #[test]
    fn split_requires_fence_on_first_line() {
        assert_eq!(split("\n---\ntitle: x\n---\n"), None);
    }

    #[test]
    fn split_closing_fence_at_end_of_input() {
        let (block, body) = split("---\ntitle: x\n---").unwrap();
        assert_eq!(block, "title: x");
        assert_eq!(body, "");
    }

    #[test]
    fn split_ignores_dashes_inside_body() {
        let doc = "---\ntitle: x\n---\nintro\n\n---\n\nrule above\n";
        let (block, body) = split(doc).unwrap();
        assert_eq!(block, "title: x");
        assert!(body.contains("rule above"));
    }

    #[test]
    fn split_does_not_match_longer_dash_runs_as_fence() {
        // `----` is not a closing fence; the real fence comes later.
        let doc = "---\ntitle: x\nkey: |\n  ----\n---\nbody\n";
        let (block, _) = split(doc).unwrap();
        assert!(block.contains("----"));
    }

    #[test]
    fn split_handles_crlf() {
        let doc = "---\r\ntitle: x\r\n---\r\nbody\r\n";
        let (block, body) = split(doc).unwrap();
        assert_eq!(block.trim(), "title: x");
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn parse_yields_mapping() {
        let value = parse("title: Lavender\ntags:\n  - calm\n").unwrap();
        assert!(value.is_mapping());
        assert_eq!(value.get("title").and_then(|v| v.as_str()), Some("Lavender"));
    }

    #[test]
    fn parse_rejects_broken_yaml() {
        assert!(parse("title: [unclosed\n").is_err());
    }

    #[test]
    fn has_section_finds_h2() {
        let body = "# Lavender\n\n## Setup Guide\n\nPot it up.\n";
        assert!(has_section(body, "Setup Guide"));
    }

    #[test]
    fn has_section_ignores_other_levels() {
        let body = "# Setup Guide\n\n### Setup Guide\n";
        assert!(!has_section(body, "Setup Guide"));
    }

    #[test]
    fn has_section_requires_exact_text() {
        let body = "## Setup guide\n";
        assert!(!has_section(body, "Setup Guide"));
    }

    #[test]
    fn has_section_false_on_empty_body() {
        assert!(!has_section("", "Setup Guide"));
    }
}
