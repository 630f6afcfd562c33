use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::categories::{category_posts, list_categories};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/category/", get(list_categories))
        .route("/category/{slug}/", get(category_posts))
}
