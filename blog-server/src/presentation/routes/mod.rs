use axum::Router;

use super::AppState;

pub(crate) mod categories;
pub(crate) mod contact;
pub(crate) mod posts;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .merge(posts::router())
        .merge(categories::router())
        .merge(contact::router())
}
