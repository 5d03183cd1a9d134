use trading_test_api::{routes, RouterExt, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = ServerConfig::builder().with_dotenv().with_logging_from_env();
    if let Ok(path) = std::env::var("APP_CONFIG") {
        builder = builder.with_config_file(path);
    }
    let config: ServerConfig = builder.build()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = ?config.environment,
        "Starting server"
    );

    routes::greeting_routes(&config)
        .with_health_check()
        .with_fallback()
        .with_default_layers(&config)
        .serve(&config)
        .await?;

    Ok(())
}
