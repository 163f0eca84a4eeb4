use std::sync::Arc;

use anyhow::Result;
use catalog::{HttpCatalogApi, Store, models::ListKey};
use common::{config::ClientConfig, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    telemetry::init_tracing();

    info!("Starting catalog client");

    let config = ClientConfig::from_env()?;
    info!("Using catalog service at {}", config.api_base_url);

    let api = HttpCatalogApi::new(&config)?;
    let store = Store::new(Arc::new(api));

    match store.initialize_auth().await {
        Ok(session) => info!("{}", session.message),
        Err(e) => warn!("Could not restore session: {}", e.user_message()),
    }

    let categories = store.fetch_categories().await?;
    info!("{}", categories.message);

    for category in &categories.value {
        let sub_categories = match store.fetch_sub_categories(&category.id).await {
            Ok(done) => done.value,
            Err(e) => {
                warn!("Skipping {}: {}", category.name, e.user_message());
                continue;
            }
        };

        println!("{} ({})", category.name, category.id);
        for sub_category in sub_categories {
            println!(
                "  {} [{} - {}]",
                sub_category.sub_category_type, sub_category.min_range, sub_category.max_range
            );
        }
    }

    let cached = store
        .select(|state| state.categories.list(&ListKey::All).len())
        .await;
    info!("Catalog client finished with {} cached categories", cached);

    Ok(())
}
