use serde_json::{Value, json};

use crate::helpers::{TestApp, random_password};

#[tokio::test]
async fn should_return_200_for_institutional_email() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({ "email": "alice@college.edu", "password": random_password() }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "token": null,
            "email": "alice@college.edu",
            "message": "Registration successful. Please check your email for verification."
        })
    );
    assert!(app.verification_token("alice@college.edu").await.is_some());
}

#[tokio::test]
async fn should_return_400_for_other_domains() {
    let app = TestApp::new().await;

    let test_cases = ["bob@gmail.com", "bob@college.EDU", "bob@edu.com", ""];

    for email in test_cases {
        let response = app
            .post_register(&json!({ "email": email, "password": "pw123" }))
            .await;

        assert_eq!(response.status().as_u16(), 400, "Failed for input: {email:?}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Only .edu email addresses are allowed");
        assert_eq!(body["token"], Value::Null);
    }
}

#[tokio::test]
async fn should_return_400_for_duplicate_email() {
    let app = TestApp::new().await;
    let body = json!({ "email": "alice@college.edu", "password": "pw123" });

    assert_eq!(app.post_register(&body).await.status().as_u16(), 200);
    let first_token = app.verification_token("alice@college.edu").await;

    let response = app
        .post_register(&json!({ "email": "alice@college.edu", "password": "other" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email already registered");
    assert_eq!(app.verification_token("alice@college.edu").await, first_token);
}

#[tokio::test]
async fn should_reject_malformed_input() {
    let app = TestApp::new().await;

    let response = app.post_register(&json!({ "email": "alice@college.edu" })).await;

    assert!(response.status().is_client_error());
}
