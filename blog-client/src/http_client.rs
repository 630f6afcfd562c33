use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Category, CategoryPage, ContactForm, Post, PostPage};

#[derive(Debug, Serialize)]
struct ContactRequestDto<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ContactResponseDto {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
    #[serde(default)]
    fields: Vec<String>,
}

#[derive(Serialize)]
struct PageQuery<'a> {
    page: &'a str,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для публичного API `blog-server`.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Собирает URL из сегментов пути; каждый сегмент percent-кодируется,
    /// путь всегда заканчивается `/`.
    fn endpoint(&self, segments: &[&str]) -> BlogClientResult<Url> {
        let invalid_base = |message: String| BlogClientError::InvalidRequest {
            message,
            fields: Vec::new(),
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|err| invalid_base(format!("invalid server url: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base(format!("server url cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        match response.json::<ErrorResponseDto>().await {
            Ok(body) => BlogClientError::from_http_status(status, body.error, body.fields),
            Err(_) => BlogClientError::from_http_status(status, None, Vec::new()),
        }
    }

    async fn read_json<TRes>(response: reqwest::Response) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    /// GET с необязательным параметром `page`
    async fn get_json<TRes>(&self, segments: &[&str], page: Option<&str>) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let mut request = self.client.request(Method::GET, self.endpoint(segments)?);
        if let Some(page) = page {
            request = request.query(&PageQuery { page });
        }

        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        Self::read_json(response).await
    }

    /// Возвращает страницу опубликованных постов.
    pub async fn list_posts(&self, page: Option<&str>) -> BlogClientResult<PostPage> {
        self.get_json(&[], page).await
    }

    /// Возвращает страницу постов категории.
    pub async fn list_category_posts(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> BlogClientResult<CategoryPage> {
        self.get_json(&["category", slug], page).await
    }

    /// Возвращает все категории.
    pub async fn list_categories(&self) -> BlogClientResult<Vec<Category>> {
        self.get_json(&["category"], None).await
    }

    /// Возвращает опубликованный пост по slug.
    pub async fn get_post(&self, slug: &str) -> BlogClientResult<Post> {
        self.get_json(&["post", slug], None).await
    }

    /// Возвращает описание формы обратной связи.
    pub async fn contact_form(&self) -> BlogClientResult<ContactForm> {
        self.get_json(&["contact"], None).await
    }

    /// Отправляет сообщение через форму обратной связи.
    pub async fn send_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> BlogClientResult<()> {
        let payload = ContactRequestDto {
            name,
            email,
            message,
        };

        let response = self
            .client
            .request(Method::POST, self.endpoint(&["contact"])?)
            .json(&payload)
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;

        let body: ContactResponseDto = Self::read_json(response).await?;
        if !body.success {
            return Err(BlogClientError::Delivery(
                "server did not confirm delivery".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must build");
        let url = client.endpoint(&["category", "rust"]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/category/rust/");
        let url = client.endpoint(&[]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/");

        let client = HttpClient::new("http://localhost:8080/blog").expect("client must build");
        let url = client.endpoint(&["contact"]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/blog/contact/");
    }

    #[test]
    fn endpoint_encodes_slug_segments() {
        let client = HttpClient::new("http://localhost:8080").expect("client must build");

        let url = client.endpoint(&["post", "a?b"]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/post/a%3Fb/");

        let url = client.endpoint(&["post", "../contact"]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/post/..%2Fcontact/");

        let url = client.endpoint(&["post", "a#b c"]).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/post/a%23b%20c/");
    }

    #[test]
    fn endpoint_rejects_invalid_base() {
        let client = HttpClient::new("not a url").expect("client must build");
        assert!(matches!(
            client.endpoint(&["post", "x"]),
            Err(BlogClientError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn post_page_decodes_server_payload() {
        let raw = r#"{
            "posts": [{
                "id": 1,
                "title": "Hello",
                "slug": "hello",
                "subtitle": null,
                "content": "<p>hi</p>",
                "created_at": "2014-11-12T14:19:00Z",
                "tags": ["rust"],
                "meta_description": null,
                "author": {"id": 1, "username": "admin"},
                "category": {"name": "News", "slug": "news", "url": "/category/news/"},
                "url": "/post/hello/"
            }],
            "page": 1,
            "num_pages": 1,
            "total": 1,
            "has_previous": false,
            "has_next": false,
            "previous_page": null,
            "next_page": null,
            "empty": false
        }"#;

        let page: PostPage = serde_json::from_str(raw).expect("payload must decode");
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].category.slug, "news");
        assert_eq!(page.posts[0].tags, vec!["rust"]);
        assert!(!page.has_next);
    }

    #[test]
    fn error_body_fields_default_to_empty() {
        let body: ErrorResponseDto =
            serde_json::from_str(r#"{"error": "not found"}"#).expect("must decode");
        assert_eq!(body.error.as_deref(), Some("not found"));
        assert!(body.fields.is_empty());
    }
}
