//! Identifier Normalization
//!
//! Converts schema codenames (lower-snake-case) into target naming
//! conventions:
//! - member names: lowerCamelCase (`post_date` -> `postDate`)
//! - type names: UpperCamelCase (`post_date` -> `PostDate`)
//! - accessors: `get`/`set` + capitalized member name
//!
//! Precondition: input matches `^[a-z0-9]+(_[a-z0-9]+)*$`. Other input is
//! still converted (empty segments dropped, each segment first-upper,
//! rest-lower) but callers should report it via [`is_snake_case`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::config::NamingConfig;

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").expect("static pattern"));

/// Whether a codename satisfies the normalizer's precondition
pub fn is_snake_case(codename: &str) -> bool {
    SNAKE_CASE.is_match(codename)
}

/// Accessor kind, decides the name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Getter => "get",
            Self::Setter => "set",
        }
    }
}

/// Pure codename to identifier conversion.
pub struct IdentifierNormalizer {
    naming_config: NamingConfig,
}

impl IdentifierNormalizer {
    /// Create a new normalizer with config
    pub fn new(naming_config: NamingConfig) -> Self {
        Self { naming_config }
    }

    /// lowerCamelCase form for fields and methods
    pub fn member_name(&self, codename: &str) -> String {
        let mut result = String::with_capacity(codename.len());
        for (index, word) in words(codename).enumerate() {
            if index == 0 {
                result.push_str(&word.to_ascii_lowercase());
            } else {
                result.push_str(&self.case_word(word));
            }
        }
        result
    }

    /// UpperCamelCase form for classes
    pub fn type_name(&self, codename: &str) -> String {
        words(codename).map(|word| self.case_word(word)).collect()
    }

    /// Accessor name derived from a member name alone
    pub fn accessor_name(&self, kind: AccessorKind, member_name: &str) -> String {
        format!("{}{}", kind.prefix(), capitalize(member_name))
    }

    /// Apply casing to a word, preserving acronyms
    fn case_word(&self, word: &str) -> String {
        let upper = word.to_ascii_uppercase();
        if self.naming_config.acronyms.contains(&upper) {
            return upper;
        }

        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => {
                let mut result = first.to_ascii_uppercase().to_string();
                for c in chars {
                    result.push(c.to_ascii_lowercase());
                }
                result
            }
        }
    }
}

impl Default for IdentifierNormalizer {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}

fn words(codename: &str) -> impl Iterator<Item = &str> {
    codename.split('_').filter(|word| !word.is_empty())
}

/// Uppercase the first character, keep the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acronym_config() -> NamingConfig {
        NamingConfig {
            acronyms: ["SKU", "URL"].iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_member_and_type_names() {
        let normalizer = IdentifierNormalizer::default();
        assert_eq!(normalizer.member_name("preferred_sku"), "preferredSku");
        assert_eq!(normalizer.type_name("preferred_sku"), "PreferredSku");
        assert_eq!(normalizer.member_name("title"), "title");
        assert_eq!(normalizer.type_name("article"), "Article");
        assert_eq!(normalizer.member_name("a_b_c"), "aBC");
    }

    #[test]
    fn test_digits() {
        let normalizer = IdentifierNormalizer::default();
        assert_eq!(normalizer.member_name("image_2x"), "image2x");
        assert_eq!(normalizer.type_name("hero_3_column"), "Hero3Column");
    }

    #[test]
    fn test_accessor_names() {
        let normalizer = IdentifierNormalizer::default();
        assert_eq!(normalizer.accessor_name(AccessorKind::Getter, "postDate"), "getPostDate");
        assert_eq!(normalizer.accessor_name(AccessorKind::Setter, "postDate"), "setPostDate");
        assert_eq!(normalizer.accessor_name(AccessorKind::Getter, "title2"), "getTitle2");
    }

    #[test]
    fn test_acronym_preservation() {
        let normalizer = IdentifierNormalizer::new(acronym_config());
        assert_eq!(normalizer.member_name("preferred_sku"), "preferredSKU");
        assert_eq!(normalizer.type_name("url_pattern"), "URLPattern");
        // A leading acronym stays lowercase in member names
        assert_eq!(normalizer.member_name("url_pattern"), "urlPattern");
    }

    #[test]
    fn test_malformed_input_best_effort() {
        let normalizer = IdentifierNormalizer::default();
        assert_eq!(normalizer.member_name("post__date"), "postDate");
        assert_eq!(normalizer.member_name("_leading"), "leading");
        assert_eq!(normalizer.member_name("PostDate"), "postdate");
        assert_eq!(normalizer.type_name(""), "");
    }

    #[test]
    fn test_is_snake_case() {
        assert!(is_snake_case("preferred_sku"));
        assert!(is_snake_case("image_2x"));
        assert!(!is_snake_case(""));
        assert!(!is_snake_case("post__date"));
        assert!(!is_snake_case("_leading"));
        assert!(!is_snake_case("PostDate"));
        assert!(!is_snake_case("kebab-case"));
    }
}
