use std::sync::Arc;

use tracing::debug;

use crate::data::category_repository::CategoryRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::category::Category;
use crate::domain::error::DomainError;
use crate::domain::pagination::{Page, PaginationConfig, Paginator};
use crate::domain::post::Post;
use crate::domain::slug::is_valid_slug;

#[derive(Debug, Clone)]
pub(crate) struct CategoryPosts {
    pub(crate) category: Category,
    pub(crate) page: Page<Post>,
}

pub(crate) struct BlogService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    pagination: PaginationConfig,
}

impl BlogService {
    pub(crate) fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            posts,
            categories,
            pagination,
        }
    }

    pub(crate) async fn list_posts(&self, page: Option<&str>) -> Result<Page<Post>, DomainError> {
        self.published_page(None, page).await
    }

    pub(crate) async fn list_category_posts(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> Result<CategoryPosts, DomainError> {
        let category = self.find_category(slug).await?;
        let page = self.published_page(Some(category.id), page).await?;

        Ok(CategoryPosts { category, page })
    }

    pub(crate) async fn get_post(&self, slug: &str) -> Result<Post, DomainError> {
        if !is_valid_slug(slug) {
            return Err(DomainError::NotFound(format!("post slug: {slug}")));
        }

        self.posts
            .find_published_by_slug(slug)
            .await?
            .ok_or(DomainError::NotFound(format!("post slug: {slug}")))
    }

    pub(crate) async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.categories.list_categories().await
    }

    async fn find_category(&self, slug: &str) -> Result<Category, DomainError> {
        if !is_valid_slug(slug) {
            return Err(DomainError::NotFound(format!("category slug: {slug}")));
        }

        self.categories
            .find_by_slug(slug)
            .await?
            .ok_or(DomainError::NotFound(format!("category slug: {slug}")))
    }

    async fn published_page(
        &self,
        category_id: Option<i64>,
        page: Option<&str>,
    ) -> Result<Page<Post>, DomainError> {
        let total = self.posts.count_published(category_id).await?;
        let paginator = Paginator::new(total, self.pagination);
        let window = paginator.window_for(page);
        debug!(
            requested = ?page,
            served = window.number,
            num_pages = paginator.num_pages(),
            "resolved page request"
        );

        let posts = self
            .posts
            .list_published(category_id, window.offset, window.limit)
            .await?;

        Ok(paginator.page(window, posts))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::BlogService;
    use crate::data::repositories::memory::MemoryStore;
    use crate::domain::error::DomainError;
    use crate::domain::pagination::PaginationConfig;

    fn service(store: &MemoryStore) -> BlogService {
        BlogService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            PaginationConfig::default(),
        )
    }

    fn titles(posts: &[crate::domain::post::Post]) -> Vec<String> {
        posts.iter().map(|post| post.title.clone()).collect()
    }

    fn seed_ten_published(store: &MemoryStore) {
        let category = store.add_category("General", "general");
        for n in 1..=10 {
            store.add_post(&format!("Post t{n}"), &category, true);
        }
    }

    #[tokio::test]
    async fn list_posts_orders_newest_first_across_pages() {
        let store = MemoryStore::new();
        seed_ten_published(&store);
        let service = service(&store);

        let first = service.list_posts(None).await.expect("page 1");
        assert_eq!(
            titles(&first.items),
            ["Post t10", "Post t9", "Post t8", "Post t7", "Post t6"]
        );
        assert!(first.has_next());
        assert!(!first.has_previous());

        let second = service.list_posts(Some("2")).await.expect("page 2");
        assert_eq!(
            titles(&second.items),
            ["Post t5", "Post t4", "Post t3", "Post t2", "Post t1"]
        );
        assert_eq!(second.num_pages, 2);
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn list_posts_normalizes_bad_page_tokens() {
        let store = MemoryStore::new();
        seed_ten_published(&store);
        let service = service(&store);

        let junk = service.list_posts(Some("index")).await.expect("junk token");
        assert_eq!(junk.number, 1);

        let too_high = service.list_posts(Some("999")).await.expect("too high");
        assert_eq!(too_high.number, 2);
        assert!(titles(&too_high.items).contains(&"Post t1".to_string()));
        assert!(!titles(&too_high.items).contains(&"Post t10".to_string()));

        let negative = service.list_posts(Some("-3")).await.expect("negative");
        assert_eq!(negative.number, 2);
    }

    #[tokio::test]
    async fn list_posts_absorbs_orphans() {
        let store = MemoryStore::new();
        let category = store.add_category("General", "general");
        for n in 1..=11 {
            store.add_post(&format!("Post {n}"), &category, true);
        }

        let page = service(&store).list_posts(Some("2")).await.expect("page 2");
        assert_eq!(page.num_pages, 2);
        assert_eq!(page.items.len(), 6);
    }

    #[tokio::test]
    async fn unpublished_posts_never_listed_or_shown() {
        let store = MemoryStore::new();
        let category = store.add_category("General", "general");
        store.add_post("Published Post", &category, true);
        let hidden = store.add_post("My Unpublished Post", &category, false);
        let service = service(&store);

        let index = service.list_posts(None).await.expect("index");
        assert_eq!(titles(&index.items), ["Published Post"]);
        assert_eq!(index.total, 1);

        let scoped = service
            .list_category_posts("general", None)
            .await
            .expect("category");
        assert_eq!(titles(&scoped.page.items), ["Published Post"]);

        let err = service
            .get_post(&hidden.slug)
            .await
            .expect_err("unpublished post must be hidden");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn category_scope_filters_other_categories() {
        let store = MemoryStore::new();
        let rust = store.add_category("Rust", "rust");
        let python = store.add_category("Python", "python");
        store.add_post("Ownership", &rust, true);
        store.add_post("Decorators", &python, true);

        let result = service(&store)
            .list_category_posts("rust", None)
            .await
            .expect("category exists");
        assert_eq!(result.category.name, "Rust");
        assert_eq!(titles(&result.page.items), ["Ownership"]);
    }

    #[tokio::test]
    async fn empty_category_is_not_not_found() {
        let store = MemoryStore::new();
        let category = store.add_category("Empty", "empty");
        store.add_post("Draft", &category, false);

        let result = service(&store)
            .list_category_posts("empty", Some("5"))
            .await
            .expect("empty category must resolve");
        assert!(result.page.is_empty());
        assert_eq!(result.page.num_pages, 1);
        assert_eq!(result.page.number, 1);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let store = MemoryStore::new();
        let service = service(&store);

        let err = service
            .list_category_posts("does-not-exist", None)
            .await
            .expect_err("category must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = service
            .list_category_posts("not a slug", None)
            .await
            .expect_err("invalid slug must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_post_returns_published_post() {
        let store = MemoryStore::new();
        let category = store.add_category("General", "general");
        let post = store.add_post("Published Post", &category, true);

        let found = service(&store)
            .get_post(&post.slug)
            .await
            .expect("post must be found");
        assert_eq!(found.id, post.id);
        assert_eq!(found.absolute_url(), "/post/published-post/");
    }

    #[tokio::test]
    async fn list_categories_sorted_by_name() {
        let store = MemoryStore::new();
        store.add_category("Rust", "rust");
        store.add_category("Django", "django");

        let categories = service(&store)
            .list_categories()
            .await
            .expect("categories");
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Django", "Rust"]);
    }
}
