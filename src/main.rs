use heritage_portal::config::PortalConfig;
use heritage_portal::http::ReqwestTransport;
use heritage_portal::routes;
use heritage_portal::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = PortalConfig::from_env().expect("invalid configuration");
    let transport = ReqwestTransport::shared(&config.api).expect("backend client init failed");
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout.as_secs(),
        cookie_secure = config.cookie_secure,
        "backend client initialized"
    );

    let state = AppState::new(transport, config.cookie_secure);
    let app = routes::app(state, config.public_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "heritage-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
