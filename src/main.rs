use anyhow::{Context, Result};
use pricelist_import::{
    config::Config,
    db::{MySqlStore, ProductStore},
    import,
};
use std::{env, fs::File, io::BufReader};
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(filter).init();
    info!("startup");

    // ─── 2) load configuration ───────────────────────────────────────
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.yaml".to_string());
    let config = Config::load(&config_path)?;

    // ─── 3) connect + create the products table ──────────────────────
    let store = MySqlStore::connect(&config.database).await?;
    info!(host = %config.database.host, database = %config.database.database, "connected");
    store.create_table().await?;
    info!("created `products` table");

    // ─── 4) stream the price list, one insert per row ────────────────
    let file = File::open(&config.input)
        .with_context(|| format!("opening input file `{}`", config.input.display()))?;
    let start = Instant::now();
    let outcome = import::run_import(BufReader::new(file), &store).await;

    // release the connection whether the import succeeded or not
    store.close().await;
    let inserted = outcome?;

    info!(rows = inserted, elapsed = ?start.elapsed(), "import complete");
    Ok(())
}
