//! tests/api/waiting_list.rs

use crate::helpers::{spawn_app, spawn_app_with_store, Failure, FailingStore, RacingStore};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn joining_returns_a_201_with_the_stored_entry() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({"email": "a@b.com", "newsletter": true}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully added to waiting list!");
    assert_eq!(body["data"]["email"], "a@b.com");
    assert_eq!(body["data"]["newsletter"], true);
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"]["updated_at"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn joining_twice_with_the_same_email_returns_a_409() {
    // Arrange
    let test_app = spawn_app().await;
    let body = json!({"email": "a@b.com", "newsletter": true});

    // Act
    let first = test_app.post_waiting_list(&body).await;
    let second = test_app.post_waiting_list(&body).await;

    // Assert
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "This email is already registered in our waiting list.",
            "error": "DUPLICATE_EMAIL"
        })
    );
    assert_eq!(test_app.waiting_list_count().await, 1);
}

#[tokio::test]
async fn emails_are_compared_after_normalization() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let first = test_app
        .post_waiting_list(&json!({"email": "Test@Example.com", "newsletter": true}))
        .await;
    let second = test_app
        .post_waiting_list(&json!({"email": "test@example.com ", "newsletter": true}))
        .await;

    // Assert
    assert_eq!(first.status().as_u16(), 201);
    let first: serde_json::Value = first.json().await.unwrap();
    assert_eq!(first["data"]["email"], "test@example.com");

    assert_eq!(second.status().as_u16(), 409);
    let second: serde_json::Value = second.json().await.unwrap();
    assert_eq!(second["error"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn joining_returns_a_400_when_the_email_is_missing() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        (json!({}), "empty body"),
        (json!({"email": ""}), "empty email"),
        (json!({"email": null, "name": "Ursula"}), "null email"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = test_app.post_waiting_list(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": "Email is required", "error": "MISSING_EMAIL"}),
            "Unexpected body for {}.",
            description
        );
    }
    assert_eq!(test_app.waiting_list_count().await, 0);
}

#[tokio::test]
async fn joining_returns_a_400_when_the_email_is_invalid() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        "not-an-email",
        "   ",
        "ursula@",
        "@example.com",
        "ursula@example",
        "ursula@example.",
        "ur sula@example.com",
        "ursula@@example.com",
    ];

    for email in test_cases {
        // Act
        let response = test_app
            .post_waiting_list(&json!({"email": email, "newsletter": true}))
            .await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request for {:?}.",
            email
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Please enter a valid email address.",
                "error": "INVALID_EMAIL"
            })
        );
    }
    // no write occurs
    assert_eq!(test_app.waiting_list_count().await, 0);
}

#[tokio::test]
async fn omitted_optional_fields_are_stored_as_null() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({"email": "ursula@example.com", "newsletter": true}))
        .await;

    // Assert
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["name"].is_null());
    assert!(body["data"]["interest"].is_null());
    assert!(body["data"]["location"].is_null());
}

#[tokio::test]
async fn blank_optional_fields_are_stored_as_null_and_others_are_trimmed() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({
            "email": "ursula@example.com",
            "name": "  Ursula Le Guin ",
            "interest": "",
            "location": "   ",
            "newsletter": true
        }))
        .await;

    // Assert
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Ursula Le Guin");
    assert!(body["data"]["interest"].is_null());
    assert!(body["data"]["location"].is_null());
}

#[tokio::test]
async fn newsletter_flag_is_stored_as_submitted() {
    // Arrange
    let test_app = spawn_app().await;

    for (email, newsletter) in [("yes@example.com", true), ("no@example.com", false)] {
        // Act
        let response = test_app
            .post_waiting_list(&json!({"email": email, "newsletter": newsletter}))
            .await;

        // Assert
        assert_eq!(response.status().as_u16(), 201);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"]["newsletter"], newsletter, "{}", email);
    }
}

#[tokio::test]
async fn missing_newsletter_flag_defaults_to_true() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({"email": "ursula@example.com"}))
        .await;

    // Assert
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["newsletter"], true);
}

#[tokio::test]
async fn non_string_emails_are_answered_like_the_email_check_would() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        (json!(42), 400, "INVALID_EMAIL"),
        (json!(true), 400, "INVALID_EMAIL"),
        (json!(["a@b.com"]), 400, "INVALID_EMAIL"),
        (json!({"address": "a@b.com"}), 400, "INVALID_EMAIL"),
        (json!(false), 400, "MISSING_EMAIL"),
        (json!(0), 400, "MISSING_EMAIL"),
    ];

    for (email, status, code) in test_cases {
        // Act
        let response = test_app
            .post_waiting_list(&json!({"email": email, "newsletter": true}))
            .await;

        // Assert
        assert_eq!(response.status().as_u16(), status, "email: {}", email);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], code, "email: {}", email);
    }
    assert_eq!(test_app.waiting_list_count().await, 0);
}

#[tokio::test]
async fn malformed_bodies_return_a_500_internal_error() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("{\"email\": ", "application/json", "truncated json"),
        (
            "{\"email\": \"a@b.com\", \"newsletter\": \"yes\"}",
            "application/json",
            "newsletter is not a boolean",
        ),
        ("email=a%40b.com", "application/x-www-form-urlencoded", "form body"),
    ];

    for (body, content_type, description) in test_cases {
        // Act
        let response = test_app.post_waiting_list_raw(body, content_type).await;

        // Assert
        assert_eq!(response.status().as_u16(), 500, "{}", description);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": "Internal server error", "error": "INTERNAL_ERROR"}),
            "{}",
            description
        );
    }
}

#[tokio::test]
async fn failing_duplicate_check_returns_a_500_database_error() {
    // Arrange
    let test_app = spawn_app_with_store(Arc::new(FailingStore::new(Failure::Lookup))).await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({"email": "ursula@example.com", "newsletter": true}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"success": false, "message": "Database error occurred", "error": "DATABASE_ERROR"})
    );
}

#[tokio::test]
async fn failing_insert_returns_a_500_insertion_error() {
    // Arrange
    let test_app = spawn_app_with_store(Arc::new(FailingStore::new(Failure::Insert))).await;

    // Act
    let response = test_app
        .post_waiting_list(&json!({"email": "ursula@example.com", "newsletter": true}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Failed to add to waiting list",
            "error": "INSERTION_ERROR"
        })
    );
    // the storage error text stays on the server
    assert!(!body.to_string().contains("constraint"));
}

#[tokio::test]
async fn duplicate_slipping_past_the_check_is_still_a_409() {
    // Arrange
    let test_app = spawn_app_with_store(Arc::new(RacingStore::default())).await;
    let body = json!({"email": "ursula@example.com", "newsletter": true});

    // Act
    let first = test_app.post_waiting_list(&body).await;
    let second = test_app.post_waiting_list(&body).await;

    // Assert
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(second.status().as_u16(), 409);
    let second: serde_json::Value = second.json().await.unwrap();
    assert_eq!(second["error"], "DUPLICATE_EMAIL");
}
