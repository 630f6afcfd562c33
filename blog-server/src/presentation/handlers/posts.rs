use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::pagination::Page;
use crate::domain::post::{Post, PostAuthor, PostCategory};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppResult, ErrorBody};

/// Raw query pairs, so a repeated or malformed `page` never rejects the request.
pub(crate) type PageParams = Vec<(String, String)>;

/// Last `page` value wins, as with a repeated form field.
pub(crate) fn page_token(params: &PageParams) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthorDto {
    pub(crate) id: i64,
    pub(crate) username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostCategoryDto {
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) subtitle: Option<String>,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) tags: Vec<String>,
    pub(crate) meta_description: Option<String>,
    pub(crate) author: AuthorDto,
    pub(crate) category: PostCategoryDto,
    pub(crate) url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostPageDto {
    pub(crate) posts: Vec<PostDto>,
    pub(crate) page: u64,
    pub(crate) num_pages: u64,
    pub(crate) total: u64,
    pub(crate) has_previous: bool,
    pub(crate) has_next: bool,
    pub(crate) previous_page: Option<u64>,
    pub(crate) next_page: Option<u64>,
    /// Nothing has been published here yet.
    pub(crate) empty: bool,
}

impl From<PostAuthor> for AuthorDto {
    fn from(author: PostAuthor) -> Self {
        Self {
            id: author.id,
            username: author.username,
        }
    }
}

impl From<PostCategory> for PostCategoryDto {
    fn from(category: PostCategory) -> Self {
        Self {
            url: category.absolute_url(),
            name: category.name,
            slug: category.slug,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            url: post.absolute_url(),
            id: post.id,
            title: post.title,
            slug: post.slug,
            subtitle: post.subtitle,
            content: post.content,
            created_at: post.created_at,
            tags: post.tags,
            meta_description: post.meta_description,
            author: post.author.into(),
            category: post.category.into(),
        }
    }
}

impl From<Page<Post>> for PostPageDto {
    fn from(page: Page<Post>) -> Self {
        Self {
            page: page.number,
            num_pages: page.num_pages,
            total: page.total,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            previous_page: page.previous_page_number(),
            next_page: page.next_page_number(),
            empty: page.is_empty(),
            posts: page.items.into_iter().map(PostDto::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "posts",
    params(
        ("page" = Option<String>, Query, description = "Page number; junk falls back to the first page, out of range to the last")
    ),
    responses(
        (status = 200, description = "Published posts, newest first", body = PostPageDto),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<(StatusCode, Json<PostPageDto>)> {
    let page = state.blog_service.list_posts(page_token(&params)).await?;

    Ok((StatusCode::OK, Json(PostPageDto::from(page))))
}

#[utoipa::path(
    get,
    path = "/post/{slug}/",
    tag = "posts",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found or not published", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.blog_service.get_post(&slug).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}
