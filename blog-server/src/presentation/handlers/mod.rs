pub(crate) mod categories;
pub(crate) mod contact;
pub(crate) mod posts;
