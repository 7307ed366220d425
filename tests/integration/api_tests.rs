//! HTTP tests against a running server

use crate::common::{client, row_count, spawn_app};

async fn create(client: &reqwest::Client, base: &str, title: &str, author: &str) -> reqwest::Response {
    client
        .post(format!("{}/books/new", base))
        .form(&[("title", title), ("author", author), ("genre", ""), ("year", "")])
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn test_root_redirects_to_books() {
    let (base, _) = spawn_app().await;
    let response = client().get(format!("{}/", base)).send().await.unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/books");
}

#[tokio::test]
async fn test_create_then_list() {
    let (base, _) = spawn_app().await;
    let client = client();

    let response = create(&client, &base, "A", "B").await;
    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"], "/books");

    let response = client.get(format!("{}/books", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(row_count(&body), 1);
    assert!(body.contains(r#"data-page-count="1""#));
}

#[tokio::test]
async fn test_second_page() {
    let (base, _) = spawn_app().await;
    let client = client();
    for i in 0..6 {
        create(&client, &base, &format!("Book {}", i), "Author").await;
    }

    let body = client
        .get(format!("{}/books?page=2", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_count(&body), 1);
    assert!(body.contains(r#"data-page-count="2""#));
    // The oldest book is the only one left for page 2
    assert!(body.contains(">Book 0</a>"));
}

#[tokio::test]
async fn test_invalid_page_renders_empty_list() {
    let (base, _) = spawn_app().await;
    let client = client();
    create(&client, &base, "A", "B").await;

    for page in ["0", "-1", "abc", "99"] {
        let response = client
            .get(format!("{}/books?page={}", base, page))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "page {}", page);
        let body = response.text().await.unwrap();
        assert_eq!(row_count(&body), 0, "page {}", page);
        assert!(body.contains("No books found."));
    }
}

#[tokio::test]
async fn test_repeated_page_renders_empty_list() {
    let (base, _) = spawn_app().await;
    let client = client();
    create(&client, &base, "A", "B").await;

    let response = client
        .get(format!("{}/books?page=1&page=2", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert_eq!(row_count(&body), 0);
    assert!(body.contains("No books found."));
    assert!(body.contains(r#"data-page="1,2""#));
    assert!(body.contains(r#"data-page-count="1""#));
}

#[tokio::test]
async fn test_post_without_form_body_renders_html_error() {
    let (base, _) = spawn_app().await;
    let client = client();

    for path in ["/books", "/books/new", "/books/1"] {
        let response = client
            .post(format!("{}{}", base, path))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 415, "path {}", path);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(response
            .text()
            .await
            .unwrap()
            .contains("There was a server error!"));
    }
}

#[tokio::test]
async fn test_search_echoes_term() {
    let (base, _) = spawn_app().await;
    let client = client();
    create(&client, &base, "Dune", "Frank Herbert").await;
    create(&client, &base, "Emma", "Jane Austen").await;

    let response = client
        .post(format!("{}/books?page=1", base))
        .form(&[("search", "Austen")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert_eq!(row_count(&body), 1);
    assert!(body.contains(">Emma</a>"));
    assert!(body.contains(r#"value="Austen""#));
    assert!(body.contains(r#"action="/books?page=1""#));
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let (base, _) = spawn_app().await;
    let client = client();
    create(&client, &base, "Dune", "Frank Herbert").await;
    create(&client, &base, "Emma", "Jane Austen").await;

    let body = client
        .post(format!("{}/books", base))
        .form(&[("search", "")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_count(&body), 2);
}

#[tokio::test]
async fn test_create_without_title_rerenders_form() {
    let (base, state) = spawn_app().await;
    let client = client();

    let response = create(&client, &base, "", "Ursula K. Le Guin").await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(r#"value="Ursula K. Le Guin""#));
    assert!(body.contains(r#"<li data-field="title">"#));
    assert!(body.contains("Title"));

    let page = state
        .services
        .catalog
        .list_books(bookshelf_server::models::RequestedPage::Number(1))
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_edit_form_and_missing_book() {
    let (base, state) = spawn_app().await;
    let client = client();
    create(&client, &base, "Dune", "Frank Herbert").await;
    let id = state
        .services
        .catalog
        .list_books(bookshelf_server::models::RequestedPage::Number(1))
        .await
        .unwrap()
        .items[0]
        .id;

    let body = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(r#"value="Frank Herbert""#));
    assert!(body.contains(&format!(r#"action="/books/{}/delete""#, id)));

    for missing in ["9999", "not-a-number"] {
        let response = client
            .get(format!("{}/books/{}", base, missing))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.text().await.unwrap().contains("Page Not Found"));
    }
}

#[tokio::test]
async fn test_update_book() {
    let (base, state) = spawn_app().await;
    let client = client();
    create(&client, &base, "Dune", "Frank Herbert").await;
    let id = state
        .services
        .catalog
        .list_books(bookshelf_server::models::RequestedPage::Number(1))
        .await
        .unwrap()
        .items[0]
        .id;

    let response = client
        .post(format!("{}/books/{}", base, id))
        .form(&[("title", "Children of Dune"), ("author", "Frank Herbert"), ("genre", "SF"), ("year", "1976")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 303);

    let book = state.services.catalog.get_book(id).await.unwrap();
    assert_eq!(book.title, "Children of Dune");
    assert_eq!(book.year.as_deref(), Some("1976"));

    let response = client
        .post(format!("{}/books/{}", base, id))
        .form(&[("title", "Children of Dune"), ("author", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(&format!(r#"action="/books/{}""#, id)));
    assert!(body.contains(r#"<li data-field="author">"#));
}

#[tokio::test]
async fn test_update_missing_book_renders_not_found() {
    let (base, _) = spawn_app().await;
    let response = client()
        .post(format!("{}/books/9999", base))
        .form(&[("title", "A"), ("author", "B")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("Page Not Found"));
}

#[tokio::test]
async fn test_delete_book() {
    let (base, state) = spawn_app().await;
    let client = client();
    create(&client, &base, "Dune", "Frank Herbert").await;
    let id = state
        .services
        .catalog
        .list_books(bookshelf_server::models::RequestedPage::Number(1))
        .await
        .unwrap()
        .items[0]
        .id;

    let response = client
        .post(format!("{}/books/{}/delete", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"], "/books");

    let response = client
        .post(format!("{}/books/{}/delete", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    let (base, _) = spawn_app().await;
    let response = client().get(format!("{}/nowhere", base)).send().await.unwrap();

    assert_eq!(response.status(), 404);
    assert!(response.text().await.unwrap().contains("Sorry, this page does not exist!"));
}
