//! 商品目录服务入口

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use catalog::api::{AppState, api_routes};
use catalog::infrastructure::persistence::PostgresProductRepository;
use secrecy::ExposeSecret;
use tienda_adapter_postgres::{PostgresConfig, check_connection, create_pool};
use tienda_config::AppConfig;
use tienda_telemetry::{init_tracing, init_tracing_json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(app = %config.app_name, env = %config.app_env, "Starting catalog service");

    // 初始化数据库连接池
    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;
    info!("Database connection established");

    // 注入仓储
    let state = AppState {
        repo: Arc::new(PostgresProductRepository::new(pool)),
    };

    // CORS: 只允许一个固定来源
    let cors = CorsLayer::new()
        .allow_origin(config.cors.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
