use campus_adapters::config::AuthServiceSetting;
use campus_auth_service::{
    AuthServer, build_auth_service, configure_account_store, telemetry::init_tracing,
};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let setting = AuthServiceSetting::load()?;

    let account_store = configure_account_store(&setting).await?;
    let auth_service = build_auth_service(&setting, account_store)?;

    let listener = TcpListener::bind(&setting.application.address).await?;
    tracing::info!("Starting campus auth service...");

    AuthServer::new(auth_service)
        .run_standalone(listener, Some(setting.auth.allowed_origins.clone()))
        .await?;

    Ok(())
}
