pub(crate) mod database;
pub(crate) mod logging;
pub(crate) mod mailer;
pub(crate) mod settings;
