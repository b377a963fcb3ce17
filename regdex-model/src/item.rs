use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A named contributor to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One registry record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique, stable identifier used for direct lookup.
    pub slug: String,
    pub title: String,
    /// Labels with set semantics; order and duplicates carry no meaning.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub search_description: String,
    #[serde(
        default,
        with = "crate::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl CatalogItem {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            tags: Vec::new(),
            authors: Vec::new(),
            search_description: String::new(),
            created_at: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = names.into_iter().map(Author::new).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.search_description = description.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when every requested tag is present on this item.
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|tag| self.has_tag(tag.as_ref()))
    }

    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().map(|a| a.name.as_str())
    }

    /// Reject items that could not be looked up or listed.
    pub fn validate(&self) -> Result<()> {
        if self.slug.trim().is_empty() {
            return Err(ModelError::InvalidItem(format!(
                "blank slug on item titled {:?}",
                self.title
            )));
        }
        if self.title.trim().is_empty() {
            return Err(ModelError::InvalidItem(format!(
                "item {:?} has a blank title",
                self.slug
            )));
        }
        Ok(())
    }
}
