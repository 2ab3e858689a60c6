pub async fn health() -> &'static str {
    "Auth service is running"
}
