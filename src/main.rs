//!
//! Shop service: REST backend for accounts, catalog and carts.
//! Reads configuration from TOML file (~/.config/shop-service/config.toml).

use std::sync::Arc;

use rand::Rng;
use tracing::{error, info};

use shop_service::application::CatalogService;
use shop_service::application::NewItem;
use shop_service::config::AppConfig;
use shop_service::domain::Store;
use shop_service::infrastructure::crypto::JwtConfig;
use shop_service::{create_api_router, default_config_path, JsonFileStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("SHOP_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting shop service...");

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_days: app_cfg.security.jwt_expiration_days,
        issuer: "shop-service".to_string(),
    };
    info!(
        "JWT configured with {}d token expiration",
        jwt_config.expiration_days
    );

    // ── Store ──────────────────────────────────────────────────
    let store: Arc<dyn Store> = match JsonFileStore::open(&app_cfg.storage.data_path).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to open store: {}", e);
            return Err(e.into());
        }
    };
    info!("Store opened at {}", app_cfg.storage.data_path.display());

    if app_cfg.demo.seed_items {
        seed_demo_items(store.clone()).await;
    }

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(store, jwt_config);

    let api_addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Shop service shutdown complete");
    Ok(())
}

/// Seed the catalog with demo items if it is empty
async fn seed_demo_items(store: Arc<dyn Store>) {
    let catalog = CatalogService::new(store);

    let existing = match catalog.list(&Default::default()).await {
        Ok(items) => items.len(),
        Err(e) => {
            error!("Failed to inspect catalog before seeding: {}", e);
            return;
        }
    };
    if existing > 0 {
        info!("Items already exist: {}", existing);
        return;
    }

    let categories = ["Electronics", "Books", "Fashion", "Home", "Sports"];
    for i in 0..24 {
        let price = rand::thread_rng().gen_range(100..1000) as f64;
        let item = NewItem {
            title: Some(format!("Sample Item {}", i + 1)),
            category: Some(categories[i % categories.len()].to_string()),
            price: Some(price),
            image: Some(format!("https://picsum.photos/seed/sample{}/600/400", i)),
            description: Some("A great product for demo purposes.".to_string()),
        };
        if let Err(e) = catalog.create(item).await {
            error!("Failed to seed item {}: {}", i + 1, e);
            return;
        }
    }
    info!("Seeded 24 items");
}
