use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::slug::validate_slug;

const NAME_MAX_LEN: usize = 100;
const SLUG_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Category {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) description: Option<String>,
}

impl Category {
    pub(crate) fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }

        let name = name.into().trim().to_string();
        if name.is_empty() || name.chars().count() > NAME_MAX_LEN {
            return Err(DomainError::Validation {
                field: "name",
                message: "must be 1..100 chars",
            });
        }

        let slug = slug.into();
        validate_slug("slug", &slug, SLUG_MAX_LEN)?;

        Ok(Self {
            id,
            name,
            slug,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    pub(crate) fn absolute_url(&self) -> String {
        format!("/category/{}/", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, DomainError};

    #[test]
    fn category_new_blank_description_becomes_none() {
        let category = Category::new(1, " Rust ", "rust", Some("   ".to_string()))
            .expect("category should be created");

        assert_eq!(category.name, "Rust");
        assert!(category.description.is_none());
    }

    #[test]
    fn category_new_rejects_bad_slug() {
        let err = Category::new(1, "Rust", "rust lang", None).expect_err("slug must be rejected");
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "slug"),
            _ => panic!("expected DomainError::Validation"),
        }
    }

    #[test]
    fn category_absolute_url_uses_slug() {
        let category = Category::new(3, "Django", "django", None).expect("valid category");
        assert_eq!(category.absolute_url(), "/category/django/");
    }
}
