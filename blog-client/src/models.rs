use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Автор поста.
pub struct Author {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Логин.
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Категория, к которой относится пост.
pub struct PostCategory {
    /// Название категории.
    pub name: String,
    /// Slug категории.
    pub slug: String,
    /// Канонический путь категории, например `/category/rust/`.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Опубликованный пост.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Slug поста.
    pub slug: String,
    /// Подзаголовок.
    pub subtitle: Option<String>,
    /// Содержимое (HTML).
    pub content: String,
    /// Дата и время создания поста (UTC).
    pub created_at: DateTime<Utc>,
    /// Теги.
    pub tags: Vec<String>,
    /// Meta description для поисковиков.
    pub meta_description: Option<String>,
    /// Автор.
    pub author: Author,
    /// Категория.
    pub category: PostCategory,
    /// Канонический путь поста, например `/post/hello/`.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Категория блога.
pub struct Category {
    /// Идентификатор категории.
    pub id: i64,
    /// Название.
    pub name: String,
    /// Slug.
    pub slug: String,
    /// Описание.
    pub description: Option<String>,
    /// Канонический путь категории.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Страница опубликованных постов.
pub struct PostPage {
    /// Посты на странице, от новых к старым.
    pub posts: Vec<Post>,
    /// Номер страницы, которую вернул сервер (после нормализации `page`).
    pub page: u64,
    /// Всего страниц.
    pub num_pages: u64,
    /// Всего опубликованных постов.
    pub total: u64,
    /// Есть ли предыдущая страница.
    pub has_previous: bool,
    /// Есть ли следующая страница.
    pub has_next: bool,
    /// Номер предыдущей страницы.
    pub previous_page: Option<u64>,
    /// Номер следующей страницы.
    pub next_page: Option<u64>,
    /// Ничего не опубликовано.
    pub empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Страница постов одной категории.
pub struct CategoryPage {
    /// Категория.
    pub category: Category,
    /// Посты категории.
    pub page: PostPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Описание формы обратной связи.
pub struct ContactForm {
    /// Обязательные поля формы.
    pub required_fields: Vec<String>,
}
