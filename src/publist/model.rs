//! Core data types for `publications.json`.
//!
//! Records are author-maintained by hand, so deserialization is forgiving:
//! missing fields default, and tag lists that are absent, null, or not arrays
//! collapse to empty rather than failing the whole file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::category::Category;

/// One entry on an author line. `ref` is optional; when present (even blank)
/// the name renders as a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    // "ref" is a keyword in Rust, hence the rename
    #[serde(rename = "ref")]
    pub href: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
        }
    }
}

/// Tag lists, one per filter category. Labels are free-form strings; the
/// checkbox panel derives its options from whatever appears here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tags {
    #[serde(deserialize_with = "lenient_labels")]
    pub authorship: Vec<String>,
    #[serde(deserialize_with = "lenient_labels")]
    pub area: Vec<String>,
    #[serde(deserialize_with = "lenient_labels")]
    pub venue: Vec<String>,
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.authorship.is_empty() && self.area.is_empty() && self.venue.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub name: String,
    #[serde(rename = "ref")]
    pub href: Option<String>,
    pub img: Option<String>,
    #[serde(deserialize_with = "lenient_authors")]
    pub author: Vec<Author>,
    pub cofirst: bool,
    pub conference: String,
    pub description: String,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Tags,
}

impl Publication {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The tag list for one category.
    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::Authorship => &self.tags.authorship,
            Category::Area => &self.tags.area,
            Category::Venue => &self.tags.venue,
        }
    }

    /// Target for the title link. Blank-after-trim counts as absent, but the
    /// stored value is returned untouched.
    pub fn link(&self) -> Option<&str> {
        non_blank(&self.href)
    }

    /// Thumbnail source, if any.
    pub fn image(&self) -> Option<&str> {
        non_blank(&self.img)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// A tag value that is not an array of strings becomes an empty list.
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// A `tags` value that is not an object becomes the empty tag set.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Tags, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// An `author` value that is not an array becomes empty; malformed entries
/// are dropped individually.
fn lenient_authors<'de, D>(deserializer: D) -> Result<Vec<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_fills_defaults() {
        let p: Publication = serde_json::from_str(r#"{"name": "Attention"}"#).unwrap();
        assert_eq!(p.name, "Attention");
        assert!(p.href.is_none());
        assert!(p.author.is_empty());
        assert!(!p.cofirst);
        assert_eq!(p.conference, "");
        assert!(p.tags.is_empty());
    }

    #[test]
    fn tags_missing_null_or_wrong_type_become_empty() {
        for raw in [
            r#"{"name": "x"}"#,
            r#"{"name": "x", "tags": null}"#,
            r#"{"name": "x", "tags": "first-author"}"#,
            r#"{"name": "x", "tags": {"area": "nlp"}}"#,
            r#"{"name": "x", "tags": {"area": null, "venue": 3}}"#,
        ] {
            let p: Publication = serde_json::from_str(raw).unwrap();
            assert!(p.tags.is_empty(), "expected empty tags for {raw}");
        }
    }

    #[test]
    fn non_string_labels_are_dropped() {
        let p: Publication =
            serde_json::from_str(r#"{"tags": {"venue": ["conference", 2024, null]}}"#).unwrap();
        assert_eq!(p.tags.venue, vec!["conference"]);
    }

    #[test]
    fn author_ref_uses_the_json_key() {
        let p: Publication = serde_json::from_str(
            r#"{"author": [{"name": "Ada", "ref": "https://ada.example"}, {"name": "Grace"}]}"#,
        )
        .unwrap();
        assert_eq!(p.author[0].href.as_deref(), Some("https://ada.example"));
        assert!(p.author[1].href.is_none());
    }

    #[test]
    fn blank_link_and_image_count_as_absent() {
        let mut p = Publication::new("x");
        p.href = Some("   ".to_string());
        p.img = Some(String::new());
        assert!(p.link().is_none());
        assert!(p.image().is_none());

        p.href = Some(" https://example.org/paper ".to_string());
        // the stored value is used as-is, only the emptiness check trims
        assert_eq!(p.link(), Some(" https://example.org/paper "));
    }

    #[test]
    fn labels_maps_categories_to_tag_lists() {
        let p: Publication = serde_json::from_str(
            r#"{"tags": {"authorship": ["first-author"], "area": ["nlp", "cv"], "venue": ["conference"]}}"#,
        )
        .unwrap();
        assert_eq!(p.labels(Category::Authorship), ["first-author"]);
        assert_eq!(p.labels(Category::Area), ["nlp", "cv"]);
        assert_eq!(p.labels(Category::Venue), ["conference"]);
    }
}
