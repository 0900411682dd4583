//! Content type schema structures
//!
//! Mirrors the type listing returned by the content delivery API:
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "system": { "id": "…", "name": "Article", "codename": "article" },
//!       "elements": {
//!         "title": { "type": "text", "name": "Title" },
//!         "post_date": { "type": "date_time", "name": "Post date" }
//!       }
//!     }
//!   ],
//!   "pagination": { "skip": 0, "limit": 0, "count": 1, "next_page": "" }
//! }
//! ```
//!
//! Element maps keep their document order, which later decides field order
//! in generated classes.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// One typed field in a content type's schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Lower-snake-case identifier, unique within its content type
    pub codename: String,
    /// Element kind, e.g. "text" or "asset"
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Display name from the content API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Element {
    /// Create a new element
    pub fn new(codename: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            type_tag: type_tag.into(),
            name: None,
        }
    }
}

/// A named content type and its elements
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireContentType")]
pub struct ContentType {
    /// Lower-snake-case identifier, unique within a run
    pub codename: String,
    /// Display name from the content API
    pub name: Option<String>,
    /// Elements in schema order
    pub elements: Vec<Element>,
}

impl ContentType {
    /// Create a content type without elements
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            name: None,
            elements: Vec::new(),
        }
    }

    /// Add an element, replacing any element with the same codename in place
    pub fn with_element(mut self, codename: impl Into<String>, type_tag: impl Into<String>) -> Self {
        let element = Element::new(codename, type_tag);
        match self.elements.iter_mut().find(|e| e.codename == element.codename) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
        self
    }

    /// Look up an element by codename
    pub fn element(&self, codename: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.codename == codename)
    }
}

/// Paging block attached to listing responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next_page: String,
}

/// Type listing response from the content delivery API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypesResponse {
    pub types: Vec<ContentType>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

// =============================================================================
// Wire Format
// =============================================================================

#[derive(Deserialize)]
struct WireContentType {
    system: WireSystem,
    #[serde(default, deserialize_with = "elements_in_order")]
    elements: Vec<Element>,
}

#[derive(Deserialize)]
struct WireSystem {
    codename: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct WireElement {
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<WireContentType> for ContentType {
    fn from(wire: WireContentType) -> Self {
        Self {
            codename: wire.system.codename,
            name: wire.system.name,
            elements: wire.elements,
        }
    }
}

/// Deserialize an element map into a list that keeps document order.
///
/// Duplicate codenames are rejected.
fn elements_in_order<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ElementsVisitor;

    impl<'de> Visitor<'de> for ElementsVisitor {
        type Value = Vec<Element>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of element codenames to elements")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut elements: Vec<Element> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((codename, wire)) = map.next_entry::<String, WireElement>()? {
                if elements.iter().any(|e| e.codename == codename) {
                    return Err(de::Error::custom(format!(
                        "duplicate element codename `{}`",
                        codename
                    )));
                }
                elements.push(Element {
                    codename,
                    type_tag: wire.type_tag,
                    name: wire.name,
                });
            }
            Ok(elements)
        }
    }

    deserializer.deserialize_map(ElementsVisitor)
}
