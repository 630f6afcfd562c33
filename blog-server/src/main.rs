use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blog_service::BlogService;
use application::contact_service::ContactService;
use data::repositories::postgres::category_repository::PostgresCategoryRepository;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::mailer::{HttpMailer, LogMailer, Mailer};
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    run_migrations(&pool).await?;

    let blog_service = BlogService::new(
        Arc::new(PostgresPostRepository::new(pool.clone())),
        Arc::new(PostgresCategoryRepository::new(pool)),
        settings.pagination()?,
    );

    let mailer: Arc<dyn Mailer> = match &settings.mail_api_url {
        Some(url) => {
            info!(%url, "contact messages go through the HTTP mail relay");
            Arc::new(HttpMailer::new(
                url.clone(),
                settings.mail_api_token.clone(),
                Duration::from_secs(settings.mail_timeout_secs),
            )?)
        }
        None => Arc::new(LogMailer),
    };
    let contact_service = ContactService::new(
        mailer,
        settings.contact_recipient.clone(),
        settings.contact_subject_tag.clone(),
    );

    let state = AppState::new(Arc::new(blog_service), Arc::new(contact_service));
    server::run_http(&settings, state).await
}
