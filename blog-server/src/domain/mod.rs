pub(crate) mod category;
pub(crate) mod contact;
pub(crate) mod error;
pub(crate) mod pagination;
pub(crate) mod post;
pub(crate) mod slug;
