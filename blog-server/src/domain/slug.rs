use super::error::DomainError;

/// Slugs are what the public routes match on: `[-\w]+`.
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

pub(crate) fn validate_slug(
    field: &'static str,
    slug: &str,
    max_len: usize,
) -> Result<(), DomainError> {
    if !is_valid_slug(slug) || slug.chars().count() > max_len {
        return Err(DomainError::Validation {
            field,
            message: "must be a non-empty slug of letters, digits, '-' or '_'",
        });
    }
    Ok(())
}
