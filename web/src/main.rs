//! Vine App web Lambda.

use std::sync::Arc;

use lambda_http::{run, service_fn, Error};
use shared::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vineapp_web::{handler, AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config).await?);
    info!(space = %config.fibery.space_name, "Vine App web started");

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
