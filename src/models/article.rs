//! Article request bodies

use crate::api::{ApiError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use tracing::debug;

/// Category ids attached to an article
///
/// Always sent as a list. A single id converts into a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Categories(Vec<u64>);

impl Categories {
    pub fn ids(&self) -> &[u64] {
        &self.0
    }
}

impl From<u64> for Categories {
    fn from(id: u64) -> Self {
        Categories(vec![id])
    }
}

impl From<Vec<u64>> for Categories {
    fn from(ids: Vec<u64>) -> Self {
        Categories(ids)
    }
}

impl From<&[u64]> for Categories {
    fn from(ids: &[u64]) -> Self {
        Categories(ids.to_vec())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesInput {
    One(u64),
    Many(Vec<u64>),
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match CategoriesInput::deserialize(deserializer)? {
            CategoriesInput::One(id) => Categories::from(id),
            CategoriesInput::Many(ids) => Categories::from(ids),
        })
    }
}

/// Body of a create-article call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    /// One of figure, media, dataset, fileset, poster, paper, presentation,
    /// thesis, code or metadata. Passed through unchecked.
    pub defined_type: String,
    pub tags: Vec<String>,
    pub categories: Categories,
}

/// Article attributes that may be set through an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Description,
    DefinedType,
    Tags,
    Categories,
}

impl ArticleField {
    pub const ALL: [ArticleField; 5] = [
        ArticleField::Title,
        ArticleField::Description,
        ArticleField::DefinedType,
        ArticleField::Tags,
        ArticleField::Categories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleField::Title => "title",
            ArticleField::Description => "description",
            ArticleField::DefinedType => "defined_type",
            ArticleField::Tags => "tags",
            ArticleField::Categories => "categories",
        }
    }

    /// Look up a field by its wire name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial update of an article; unset fields are left out of the body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Categories>,
}

impl ArticleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn defined_type(mut self, defined_type: impl Into<String>) -> Self {
        self.defined_type = Some(defined_type.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories(mut self, categories: impl Into<Categories>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    /// Build an update from an open set of attributes.
    ///
    /// Keys that are not updatable article fields are dropped. A known key
    /// whose value has the wrong shape is an error.
    pub fn from_attributes<I, K>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: AsRef<str>,
    {
        let mut update = Self::default();
        for (key, value) in attributes {
            let key = key.as_ref();
            let Some(field) = ArticleField::from_key(key) else {
                debug!(attribute = key, "Discarding unknown article attribute");
                continue;
            };
            update.set(field, value)?;
        }
        Ok(update)
    }

    fn set(&mut self, field: ArticleField, value: JsonValue) -> Result<()> {
        let invalid = |source| ApiError::InvalidAttribute {
            field: field.as_str(),
            source,
        };
        match field {
            ArticleField::Title => {
                self.title = Some(serde_json::from_value(value).map_err(invalid)?)
            }
            ArticleField::Description => {
                self.description = Some(serde_json::from_value(value).map_err(invalid)?)
            }
            ArticleField::DefinedType => {
                self.defined_type = Some(serde_json::from_value(value).map_err(invalid)?)
            }
            ArticleField::Tags => {
                self.tags = Some(serde_json::from_value(value).map_err(invalid)?)
            }
            ArticleField::Categories => {
                self.categories = Some(serde_json::from_value(value).map_err(invalid)?)
            }
        }
        Ok(())
    }

    /// Fields this update will send
    pub fn fields(&self) -> Vec<ArticleField> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push(ArticleField::Title);
        }
        if self.description.is_some() {
            fields.push(ArticleField::Description);
        }
        if self.defined_type.is_some() {
            fields.push(ArticleField::DefinedType);
        }
        if self.tags.is_some() {
            fields.push(ArticleField::Tags);
        }
        if self.categories.is_some() {
            fields.push(ArticleField::Categories);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
