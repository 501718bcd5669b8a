use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod routes;
mod state;
mod store;

use crate::state::AppState;
use crate::store::ItemStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting items service");

    // The store lives for the lifetime of the process and is handed to every
    // handler through the application state. Contents are lost on restart.
    let item_store = ItemStore::new();

    let app_state = AppState { item_store };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Items service listening on 0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
