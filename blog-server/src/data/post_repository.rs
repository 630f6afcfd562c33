use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

/// Read side of the post store. Every method only ever sees published posts.
#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn count_published(&self, category_id: Option<i64>) -> Result<u64, DomainError>;

    /// Newest first (`created` desc, then `id` desc).
    async fn list_published(
        &self,
        category_id: Option<i64>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError>;

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError>;
}
