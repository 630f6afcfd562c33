use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::contact::{contact_form, submit_contact};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/contact/", get(contact_form).post(submit_contact))
}
