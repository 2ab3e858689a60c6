use serde_json::{Value, json};

use crate::helpers::{TestApp, random_password};

#[tokio::test]
async fn should_return_token_for_verified_account() {
    let app = TestApp::new().await;
    let password = app.verified_account("alice@college.edu").await;

    let response = app
        .post_login(&json!({ "email": "alice@college.edu", "password": password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["email"], "alice@college.edu");
    assert_eq!(body["message"], "Login successful");

    let token = body["token"].as_str().unwrap();
    let response = app.get_verify_token(Some(token)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "valid": true, "email": "alice@college.edu" }));
}

#[tokio::test]
async fn should_reject_unverified_account() {
    let app = TestApp::new().await;
    let password = random_password();
    app.post_register(&json!({ "email": "alice@college.edu", "password": password }))
        .await;

    let response = app
        .post_login(&json!({ "email": "alice@college.edu", "password": password }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Please verify your email first");
    assert_eq!(body["token"], Value::Null);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let app = TestApp::new().await;
    app.verified_account("alice@college.edu").await;

    let response = app
        .post_login(&json!({ "email": "alice@college.edu", "password": "definitely-wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn should_report_unknown_account() {
    let app = TestApp::new().await;

    let test_cases = [
        ("nobody@college.edu", "User not found"),
        ("nobody@gmail.com", "Only .edu email addresses are allowed"),
    ];

    for (email, message) in test_cases {
        let response = app
            .post_login(&json!({ "email": email, "password": "pw123" }))
            .await;

        assert_eq!(response.status().as_u16(), 400, "Failed for input: {email}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn should_conceal_unknown_account_when_configured() {
    let app = TestApp::concealing_account_existence().await;

    let response = app
        .post_login(&json!({ "email": "nobody@college.edu", "password": "pw123" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}
