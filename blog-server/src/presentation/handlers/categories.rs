use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::blog_service::CategoryPosts;
use crate::domain::category::Category;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppResult, ErrorBody};
use crate::presentation::handlers::posts::{PageParams, PostPageDto, page_token};

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CategoryDto {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) description: Option<String>,
    pub(crate) url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CategoryPageDto {
    pub(crate) category: CategoryDto,
    pub(crate) page: PostPageDto,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            url: category.absolute_url(),
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
        }
    }
}

impl From<CategoryPosts> for CategoryPageDto {
    fn from(result: CategoryPosts) -> Self {
        Self {
            category: result.category.into(),
            page: result.page.into(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/category/",
    tag = "categories",
    responses(
        (status = 200, description = "All categories by name", body = [CategoryDto]),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<CategoryDto>>)> {
    let categories = state.blog_service.list_categories().await?;

    Ok((
        StatusCode::OK,
        Json(categories.into_iter().map(CategoryDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/category/{slug}/",
    tag = "categories",
    params(
        ("slug" = String, Path, description = "Category slug"),
        ("page" = Option<String>, Query, description = "Page number; junk falls back to the first page, out of range to the last")
    ),
    responses(
        (status = 200, description = "Published posts in the category; `page.empty` when there are none", body = CategoryPageDto),
        (status = 404, description = "Category does not exist", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn category_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<(StatusCode, Json<CategoryPageDto>)> {
    let result = state
        .blog_service
        .list_category_posts(&slug, page_token(&params))
        .await?;

    Ok((StatusCode::OK, Json(CategoryPageDto::from(result))))
}
