//! In-memory store used by service and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::data::category_repository::CategoryRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAuthor, PostCategory};

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    posts: Arc<Mutex<Vec<Post>>>,
    categories: Arc<Mutex<Vec<Category>>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_category(&self, name: &str, slug: &str) -> Category {
        let mut categories = self.categories.lock().expect("categories mutex poisoned");
        let category = Category::new(categories.len() as i64 + 1, name, slug, None)
            .expect("sample category must be valid");
        categories.push(category.clone());
        category
    }

    /// Posts get increasing `created` timestamps in insertion order.
    pub(crate) fn add_post(&self, title: &str, category: &Category, published: bool) -> Post {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        let id = posts.len() as i64 + 1;
        let post = Post {
            id,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            subtitle: None,
            content: format!("<p>{title}</p>"),
            created_at: base_time() + Duration::minutes(id),
            tags: Vec::new(),
            meta_description: None,
            author: PostAuthor {
                id: 1,
                username: "admin".to_string(),
            },
            category: PostCategory {
                id: category.id,
                name: category.name.clone(),
                slug: category.slug.clone(),
            },
            published,
        }
        .validate()
        .expect("sample post must be valid");
        posts.push(post.clone());
        post
    }

    fn published(&self, category_id: Option<i64>) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .expect("posts mutex poisoned")
            .iter()
            .filter(|post| post.published)
            .filter(|post| category_id.is_none_or(|id| post.category.id == id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 11, 12, 14, 19, 0)
        .single()
        .expect("valid base time")
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn count_published(&self, category_id: Option<i64>) -> Result<u64, DomainError> {
        Ok(self.published(category_id).len() as u64)
    }

    async fn list_published(
        &self,
        category_id: Option<i64>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        Ok(self
            .published(category_id)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.published(None).into_iter().find(|post| post.slug == slug))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .categories
            .lock()
            .expect("categories mutex poisoned")
            .iter()
            .find(|category| category.slug == slug)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let mut categories = self
            .categories
            .lock()
            .expect("categories mutex poisoned")
            .clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
