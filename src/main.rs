use anyhow::Context;
use qrsmith::utils::{logger, validation::Validate};
use qrsmith::{create_router, GenerateEngine, LocalStorage, ServerConfig};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    logger::init_logger(config.verbose);

    tracing::info!("Starting qrsmith server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    config.validate()?;

    // Ensure the artifact directory once at startup; per-request writes
    // assume it exists.
    let artifact_root = Path::new(&config.static_root).join(&config.artifact_dir);
    tokio::fs::create_dir_all(&artifact_root)
        .await
        .with_context(|| format!("creating artifact directory {}", artifact_root.display()))?;

    let storage = LocalStorage::new(config.static_root.clone());
    let engine = GenerateEngine::new(storage, config.clone());
    let app = create_router(engine);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
