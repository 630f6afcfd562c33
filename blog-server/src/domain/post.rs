use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::slug::validate_slug;

const TITLE_MAX_LEN: usize = 200;
const SLUG_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostAuthor {
    pub(crate) id: i64,
    pub(crate) username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostCategory {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) subtitle: Option<String>,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) tags: Vec<String>,
    pub(crate) meta_description: Option<String>,
    pub(crate) author: PostAuthor,
    pub(crate) category: PostCategory,
    pub(crate) published: bool,
}

impl Post {
    /// Checks the model invariants and normalizes optional text and tags.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("id", self.id)?;
        validate_positive_i64("author_id", self.author.id)?;
        validate_positive_i64("category_id", self.category.id)?;

        let title = normalize_title(&self.title)?;
        validate_slug("slug", &self.slug, SLUG_MAX_LEN)?;

        Ok(Self {
            title,
            subtitle: normalize_optional(self.subtitle),
            meta_description: normalize_optional(self.meta_description),
            tags: normalize_tags(self.tags),
            ..self
        })
    }

    pub(crate) fn absolute_url(&self) -> String {
        format!("/post/{}/", self.slug)
    }
}

impl PostCategory {
    pub(crate) fn absolute_url(&self) -> String {
        format!("/category/{}/", self.slug)
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX_LEN {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..200 chars",
        });
    }
    Ok(title.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// tags are a set: blanks dropped, first occurrence wins
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|existing| existing == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
