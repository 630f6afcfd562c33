//! Клиентская библиотека для публичного HTTP API blog-server.
//!
//! `BlogClient` оборачивает `reqwest` и возвращает типизированные модели:
//! страницы постов, категории, отдельные посты и форму обратной связи.
//! Номер страницы передаётся серверу как есть; некорректные значения сервер
//! нормализует сам (первая или последняя страница).
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{Author, Category, CategoryPage, ContactForm, Post, PostCategory, PostPage};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент блог-сервиса.
pub struct BlogClient {
    http_client: HttpClient,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
        })
    }

    /// Возвращает страницу опубликованных постов, от новых к старым.
    ///
    /// `page` передаётся как строка: сервер принимает любые значения и сам
    /// выбирает ближайшую допустимую страницу.
    pub async fn list_posts(&self, page: Option<&str>) -> BlogClientResult<PostPage> {
        self.http_client.list_posts(page).await
    }

    /// Возвращает категорию и страницу её опубликованных постов.
    ///
    /// Для несуществующей категории возвращает [`BlogClientError::NotFound`].
    pub async fn list_category_posts(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> BlogClientResult<CategoryPage> {
        self.http_client.list_category_posts(slug, page).await
    }

    /// Возвращает все категории, отсортированные по названию.
    pub async fn list_categories(&self) -> BlogClientResult<Vec<Category>> {
        self.http_client.list_categories().await
    }

    /// Возвращает опубликованный пост по slug.
    pub async fn get_post(&self, slug: &str) -> BlogClientResult<Post> {
        self.http_client.get_post(slug).await
    }

    /// Возвращает список обязательных полей формы обратной связи.
    pub async fn contact_form(&self) -> BlogClientResult<ContactForm> {
        self.http_client.contact_form().await
    }

    /// Отправляет сообщение владельцу блога.
    ///
    /// Незаполненные поля приходят в [`BlogClientError::InvalidRequest`],
    /// сбой почтового транспорта в [`BlogClientError::Delivery`].
    pub async fn send_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> BlogClientResult<()> {
        self.http_client.send_contact(name, email, message).await
    }
}
