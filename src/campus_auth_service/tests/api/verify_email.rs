use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn verification_token_works_once() {
    let app = TestApp::new().await;
    app.post_register(&json!({ "email": "alice@college.edu", "password": "pw123" }))
        .await;
    let token = app.verification_token("alice@college.edu").await.unwrap();

    let response = app.get_verify(&token).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Email verified successfully! You can now login."
    );

    let response = app.get_verify(&token).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Invalid or expired verification token"
    );
    assert!(app.verification_token("alice@college.edu").await.is_none());
}

#[tokio::test]
async fn unknown_or_missing_token_is_rejected() {
    let app = TestApp::new().await;

    for token in ["not-a-real-token", ""] {
        let response = app.get_verify(token).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {token:?}");
    }

    let response = app
        .http_client
        .get(format!("{}/api/auth/verify", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
