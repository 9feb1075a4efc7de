//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here; matching lives in ChatbotService, import in SeedService.

use dotenv::dotenv;
use nutri_faq::adapters::http::{AppState, build_router, serve};
use nutri_faq::adapters::persistence::{MemoryRepo, SqliteRepo, load_seed_file};
use nutri_faq::ports::{ChatbotPort, FaqStorePort, FaqWriterPort};
use nutri_faq::shared::config::{AppConfig, StorageKind};
use nutri_faq::usecases::{ChatbotService, SeedService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // --- Store: one object serves both the read and the seeding side ---
    let (store, writer): (Arc<dyn FaqStorePort>, Arc<dyn FaqWriterPort>) =
        match cfg.storage_or_default() {
            StorageKind::Sqlite => {
                let data_path = PathBuf::from(cfg.data_dir_or_default());
                let repo = Arc::new(
                    SqliteRepo::connect(&data_path)
                        .await
                        .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
                );
                (
                    Arc::clone(&repo) as Arc<dyn FaqStorePort>,
                    repo as Arc<dyn FaqWriterPort>,
                )
            }
            StorageKind::Memory => {
                info!("using in-memory FAQ store (not persisted)");
                let repo = Arc::new(MemoryRepo::new());
                (
                    Arc::clone(&repo) as Arc<dyn FaqStorePort>,
                    repo as Arc<dyn FaqWriterPort>,
                )
            }
        };

    // --- Out-of-band seeding ---
    if let Some(seed_path) = cfg.seed_path.as_deref() {
        let entries = load_seed_file(seed_path)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        let report = SeedService::new(Arc::clone(&store), writer)
            .import(entries, cfg.seed_replace_or_default())
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            cleared = report.cleared,
            already_populated = report.already_populated,
            "seed file applied"
        );
    }

    let faq_entries = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(faq_entries, "FAQ store ready");

    // --- Services ---
    let chatbot: Arc<dyn ChatbotPort> = match cfg.fallback_reply() {
        Some(reply) => Arc::new(ChatbotService::with_fallback(Arc::clone(&store), reply)),
        None => Arc::new(ChatbotService::new(Arc::clone(&store))),
    };

    let router = build_router(AppState { chatbot, store });

    serve(&cfg.bind_address(), router)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
