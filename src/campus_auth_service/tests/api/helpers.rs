use std::sync::Arc;

use campus_adapters::{
    HashMapAccountStore,
    config::{AuthServiceSetting, LOCAL_ENVIRONMENT, test},
};
use campus_auth_service::{AuthServer, build_auth_service};
use campus_core::{AccountStore, Email};
use fake::{Fake, faker::internet::en::Password as FakePassword};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(false).await
    }

    pub async fn concealing_account_existence() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(conceal_account_existence: bool) -> Self {
        let builder = AuthServiceSetting::defaults()
            .unwrap()
            .set_override("application.address", test::APP_ADDRESS)
            .unwrap()
            .set_override("auth.conceal_account_existence", conceal_account_existence)
            .unwrap();
        let setting = AuthServiceSetting::from_builder(builder, LOCAL_ENVIRONMENT).unwrap();

        let account_store = HashMapAccountStore::new();
        let service = build_auth_service(&setting, Arc::new(account_store.clone())).unwrap();

        let listener = TcpListener::bind(&setting.application.address)
            .await
            .unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let server = AuthServer::new(service);
        let allowed_origins = Some(setting.auth.allowed_origins.clone());
        tokio::spawn(server.run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
            account_store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/auth{path}", self.address)
    }

    pub async fn post_register<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(self.url("/register"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(self.url("/login"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_verify(&self, token: &str) -> reqwest::Response {
        self.http_client
            .get(self.url("/verify"))
            .query(&[("token", token)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_verify_token(&self, bearer: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(self.url("/verify-token"));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(self.url("/health"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// The token the verification email would have carried.
    pub async fn verification_token(&self, email: &str) -> Option<String> {
        let email = Email::parse(email).ok()?;
        self.account_store
            .find_by_email(&email)
            .await
            .unwrap()?
            .verification_token()
            .map(ToString::to_string)
    }

    /// Register and verify, returning the password used.
    pub async fn verified_account(&self, email: &str) -> String {
        let password = random_password();
        let response = self
            .post_register(&serde_json::json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let token = self.verification_token(email).await.unwrap();
        assert_eq!(self.get_verify(&token).await.status().as_u16(), 200);
        password
    }
}

pub fn random_password() -> String {
    FakePassword(8..20).fake()
}
