//! tests/api/landing_page.rs

use crate::helpers::{assert_is_redirect_to, spawn_app, spawn_app_with_store};
use homeshare::store::InMemoryStore;
use scraper::{Html, Selector};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn landing_page_lists_the_featured_properties() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.get_response_from_url("/").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html = Html::parse_document(&response.text().await.unwrap());
    let cards = Selector::parse(".properties-grid .property-card").unwrap();
    assert_eq!(html.select(&cards).count(), 6);
    let page = html.root_element().text().collect::<String>();
    for city in ["Austin", "Denver", "Raleigh", "Phoenix", "Nashville", "Tampa"] {
        assert!(page.contains(city), "{} is missing from the landing page", city);
    }
}

#[tokio::test]
async fn landing_page_renders_the_waiting_list_form() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let html = Html::parse_document(&test_app.get_home_html().await);

    // Assert
    let form = Selector::parse("form#waiting-list-form").unwrap();
    let form = html.select(&form).next().expect("no waiting list form");
    assert_eq!(form.value().attr("action"), Some("/waiting-list"));
    assert_eq!(form.value().attr("method"), Some("post"));

    for name in ["email", "name", "location"] {
        let input = Selector::parse(&format!("input[name=\"{}\"]", name)).unwrap();
        assert!(html.select(&input).next().is_some(), "missing {} input", name);
    }
    let interest = Selector::parse("select[name=\"interest\"] option").unwrap();
    // placeholder plus the interest choices
    assert_eq!(html.select(&interest).count(), 6);

    let newsletter = Selector::parse("input[name=\"newsletter\"][type=\"checkbox\"]").unwrap();
    let newsletter = html.select(&newsletter).next().expect("no newsletter box");
    assert!(newsletter.value().attr("checked").is_some());
}

#[tokio::test]
async fn form_submission_redirects_home_with_a_success_message() {
    // Arrange
    let test_app = spawn_app().await;
    let form = json!({
        "email": "ursula@example.com",
        "name": "Ursula",
        "interest": "investment",
        "location": "Austin",
        "newsletter": "on",
    });

    // Act - Part 1 - Submit the form
    let response = test_app.post_signup_form(&form).await;
    assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_home_html().await;
    assert!(html_page.contains("<p class=\"notice notice-success\"><i>Successfully added to waiting list!</i></p>"));

    // Act - Part 3 - Reload the page
    let html_page = test_app.get_home_html().await;
    assert!(!html_page.contains("Successfully added to waiting list!"));

    assert_eq!(test_app.waiting_list_count().await, 1);
}

#[tokio::test]
async fn form_submission_with_an_invalid_email_shows_an_error() {
    // Arrange
    let test_app = spawn_app().await;

    // Act - Part 1 - Submit the form
    let response = test_app
        .post_signup_form(&json!({"email": "not-an-email", "newsletter": "on"}))
        .await;
    assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_home_html().await;
    assert!(html_page.contains(
        "<p class=\"notice notice-error\"><i>Please enter a valid email address.</i></p>"
    ));
    assert_eq!(test_app.waiting_list_count().await, 0);
}

#[tokio::test]
async fn form_submission_of_a_known_email_shows_the_duplicate_message() {
    // Arrange
    let test_app = spawn_app().await;
    test_app
        .post_waiting_list(&json!({"email": "ursula@example.com", "newsletter": true}))
        .await;

    // Act
    let response = test_app
        .post_signup_form(&json!({"email": "URSULA@example.com"}))
        .await;
    assert_is_redirect_to(&response, "/");

    // Assert
    let html_page = test_app.get_home_html().await;
    assert!(html_page.contains("This email is already registered in our waiting list."));
    assert_eq!(test_app.waiting_list_count().await, 1);
}

#[tokio::test]
async fn newsletter_box_decides_the_newsletter_flag() {
    // Arrange
    let store = Arc::new(InMemoryStore::default());
    let test_app = spawn_app_with_store(store.clone()).await;

    // Act
    let ticked = test_app
        .post_signup_form(&json!({"email": "ticked@example.com", "newsletter": "on"}))
        .await;
    let unticked = test_app
        .post_signup_form(&json!({"email": "unticked@example.com"}))
        .await;

    // Assert
    assert_is_redirect_to(&ticked, "/");
    assert_is_redirect_to(&unticked, "/");
    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 2);
    let ticked = entries.iter().find(|e| e.email == "ticked@example.com").unwrap();
    let unticked = entries.iter().find(|e| e.email == "unticked@example.com").unwrap();
    assert!(ticked.newsletter);
    assert!(!unticked.newsletter);
}
