use blog_client::{BlogClient, BlogClientError};

fn client() -> BlogClient {
    let base_url =
        std::env::var("BLOG_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    BlogClient::new(base_url).expect("client must build")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn http_read_flow() {
    let client = client();

    let first = client
        .list_posts(None)
        .await
        .expect("list_posts must succeed");
    assert_eq!(first.page, 1);
    assert!(first.num_pages >= 1);

    let junk = client
        .list_posts(Some("index"))
        .await
        .expect("junk page must fall back");
    assert_eq!(junk.page, 1);

    let last = client
        .list_posts(Some("999999"))
        .await
        .expect("out of range page must fall back");
    assert_eq!(last.page, first.num_pages);

    let categories = client
        .list_categories()
        .await
        .expect("list_categories must succeed");
    if let Some(category) = categories.first() {
        let page = client
            .list_category_posts(&category.slug, None)
            .await
            .expect("category page must succeed");
        assert_eq!(page.category.slug, category.slug);
    }

    if let Some(post) = first.posts.first() {
        let fetched = client.get_post(&post.slug).await.expect("get_post must succeed");
        assert_eq!(fetched.id, post.id);
    }

    let missing = client.get_post("no-such-post-slug").await;
    assert!(matches!(missing, Err(BlogClientError::NotFound)));

    let missing = client.list_category_posts("no-such-category", None).await;
    assert!(matches!(missing, Err(BlogClientError::NotFound)));
}

#[tokio::test]
#[ignore = "requires running HTTP server"]
async fn http_contact_validation() {
    let client = client();

    let form = client.contact_form().await.expect("contact_form must succeed");
    assert_eq!(form.required_fields, vec!["name", "email", "message"]);

    let result = client.send_contact("", "me@gmail.com", "message").await;
    match result {
        Err(BlogClientError::InvalidRequest { fields, .. }) => assert_eq!(fields, vec!["name"]),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}
