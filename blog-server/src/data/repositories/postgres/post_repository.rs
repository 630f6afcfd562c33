use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAuthor, PostCategory};

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    subtitle: Option<String>,
    content: String,
    created: DateTime<Utc>,
    tags: Vec<String>,
    meta_description: Option<String>,
    published: bool,
    author_id: i64,
    author_username: String,
    category_id: i64,
    category_name: String,
    category_slug: String,
}

const SELECT_POST: &str = r#"
    SELECT
        p.id,
        p.title,
        p.slug,
        p.subtitle,
        p.content,
        p.created,
        p.tags,
        p.meta_description,
        p.published,
        u.id AS author_id,
        u.username AS author_username,
        c.id AS category_id,
        c.name AS category_name,
        c.slug AS category_slug
    FROM posts p
    JOIN users u ON u.id = p.author_id
    JOIN categories c ON c.id = p.category_id
"#;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count_published(&self, category_id: Option<i64>) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts
            WHERE published = TRUE
              AND ($1::BIGINT IS NULL OR category_id = $1)
            "#,
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(count.max(0) as u64)
    }

    async fn list_published(
        &self,
        category_id: Option<i64>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        let sql = format!(
            r#"{SELECT_POST}
            WHERE p.published = TRUE
              AND ($1::BIGINT IS NULL OR p.category_id = $1)
            ORDER BY p.created DESC, p.id DESC
            LIMIT $2
            OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(category_id)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_post_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let sql = format!(
            r#"{SELECT_POST}
            WHERE p.slug = $1 AND p.published = TRUE
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_post_db_error)?;

        row.map(map_row_to_post).transpose()
    }
}

fn map_row_to_post(row: PostRow) -> Result<Post, DomainError> {
    Post {
        id: row.id,
        title: row.title,
        slug: row.slug,
        subtitle: row.subtitle,
        content: row.content,
        created_at: row.created,
        tags: row.tags,
        meta_description: row.meta_description,
        author: PostAuthor {
            id: row.author_id,
            username: row.author_username,
        },
        category: PostCategory {
            id: row.category_id,
            name: row.category_name,
            slug: row.category_slug,
        },
        published: row.published,
    }
    .validate()
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
