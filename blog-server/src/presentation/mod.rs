use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::application::contact_service::ContactService;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService>,
    pub(crate) contact_service: Arc<ContactService>,
}

impl AppState {
    pub(crate) fn new(blog_service: Arc<BlogService>, contact_service: Arc<ContactService>) -> Self {
        Self {
            blog_service,
            contact_service,
        }
    }
}
