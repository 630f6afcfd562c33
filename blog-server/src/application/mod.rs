pub(crate) mod blog_service;
pub(crate) mod contact_service;
