//! Browse the catalog from the command line.
//!
//! Reads configuration from the environment (see `config.rs`), lists the
//! catalog, and fetches the first product's detail.
//!
//! ```sh
//! SHOPWIRE_API_URL=http://localhost:3000 cargo run -p shopwire-client --example browse
//! ```

#![allow(clippy::print_stdout)]

use shopwire_client::api::ProductsApi;
use shopwire_client::config::ClientConfig;
use shopwire_client::http::ApiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopwire_client=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url(), "configured");

    let client = ApiClient::new(&config);
    let products = ProductsApi::new(&client).list(None).await?;
    println!("{} products", products.len());
    for product in &products {
        println!("  {} - {} ({})", product.id, product.name, product.price);
    }

    if let Some(first) = products.first() {
        let detail = ProductsApi::new(&client).get(&first.id).await?;
        println!("first product: {}: {}", detail.name, detail.description);
    }

    Ok(())
}
