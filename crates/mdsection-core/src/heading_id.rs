/*
 * heading_id.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Title and identifier extraction from heading text.
 */

//! Title and identifier extraction from heading text.
//!
//! A heading may end with an explicit identifier suffix:
//!
//! ```markdown
//! ## Overview (#custom-id)
//! ```
//!
//! which yields the title `Overview` and the id `custom-id`. Without the
//! suffix the title is the whole text and the id is its kebab-case slug.
//!
//! A trailing `(#...)` is always read as an id suffix; there is no way to
//! escape it.

use once_cell::sync::Lazy;
use regex::Regex;

static EXPLICIT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(.*?)\s*\(#([^)]+)\)$").expect("explicit id pattern is valid")
});

/// The title and identifier of one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingText {
    pub title: String,
    pub id: String,
}

/// Split heading text into its title and identifier.
pub fn parse_heading_text(text: &str) -> HeadingText {
    if let Some(captures) = EXPLICIT_ID.captures(text) {
        return HeadingText {
            title: captures[1].trim().to_string(),
            id: captures[2].to_string(),
        };
    }

    HeadingText {
        title: text.to_string(),
        id: kebab_case(text),
    }
}

/// Lowercase words joined by single hyphens.
///
/// Words are runs of alphanumeric characters. A lowercase letter or digit
/// followed by an uppercase letter also starts a new word (`camelCase` ->
/// `camel-case`). Apostrophes are dropped without splitting.
pub fn kebab_case(text: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }
        let starts_word = matches!(previous, Some(p) if (p.is_lowercase() || p.is_numeric()) && ch.is_uppercase());
        if starts_word && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(ch.to_lowercase());
        previous = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(title: &str, id: &str) -> HeadingText {
        HeadingText {
            title: title.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_explicit_id() {
        assert_eq!(
            parse_heading_text("Overview (#custom-id)"),
            parsed("Overview", "custom-id")
        );
    }

    #[test]
    fn test_explicit_id_without_space() {
        assert_eq!(
            parse_heading_text("Overview(#custom-id)"),
            parsed("Overview", "custom-id")
        );
    }

    #[test]
    fn test_explicit_id_trims_title() {
        assert_eq!(
            parse_heading_text("  Getting   started \t (#start)"),
            parsed("Getting   started", "start")
        );
    }

    #[test]
    fn test_explicit_id_keeps_literal() {
        assert_eq!(
            parse_heading_text("API (#API_v2.Reference)"),
            parsed("API", "API_v2.Reference")
        );
    }

    #[test]
    fn test_suffix_must_be_at_the_end() {
        let result = parse_heading_text("Overview (#custom-id) and more");
        assert_eq!(result.title, "Overview (#custom-id) and more");
        assert_eq!(result.id, "overview-custom-id-and-more");
    }

    #[test]
    fn test_empty_suffix_is_not_an_id() {
        let result = parse_heading_text("Overview (#)");
        assert_eq!(result.title, "Overview (#)");
        assert_eq!(result.id, "overview");
    }

    #[test]
    fn test_generated_id() {
        assert_eq!(
            parse_heading_text("My Great Section"),
            parsed("My Great Section", "my-great-section")
        );
    }

    #[test]
    fn test_generated_id_keeps_title_unchanged() {
        let result = parse_heading_text("  What's new?  ");
        assert_eq!(result.title, "  What's new?  ");
        assert_eq!(result.id, "whats-new");
    }

    #[test]
    fn test_kebab_case_collapses_separators() {
        assert_eq!(kebab_case("a -- b__c...d"), "a-b-c-d");
        assert_eq!(kebab_case("  leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_kebab_case_splits_camel_case() {
        assert_eq!(kebab_case("parseHeadingText"), "parse-heading-text");
        assert_eq!(kebab_case("Version2Beta"), "version2-beta");
    }

    #[test]
    fn test_kebab_case_numbers() {
        assert_eq!(kebab_case("Phase 2: Setup"), "phase-2-setup");
    }

    #[test]
    fn test_kebab_case_unicode_letters() {
        assert_eq!(kebab_case("Über Cool"), "über-cool");
    }

    #[test]
    fn test_kebab_case_empty() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("!?"), "");
    }
}
