use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn missing_or_invalid_bearer_is_unauthorized() {
    let app = TestApp::new().await;

    for bearer in [None, Some("invalid_token"), Some("a.b.c")] {
        let response = app.get_verify_token(bearer).await;

        assert_eq!(response.status().as_u16(), 401, "Failed for input: {bearer:?}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "valid": false, "email": null }));
    }
}
