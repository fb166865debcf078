use std::sync::Arc;

use riftview_riot_api::LolApiClient;

use crate::{assets::AssetCache, config::Config, state::AppState};

mod assets;
mod config;
mod enrich;
mod error;
mod http;
mod logging;
mod state;
#[cfg(test)]
mod testing;
mod view;

#[tokio::main]
async fn main() {
    logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    let api = LolApiClient::new(config.riot_api_key.clone());
    api.start_metrics_logging();

    let state = Arc::new(AppState {
        api: Arc::new(api),
        assets: AssetCache::new(),
    });

    if let Err(err) = http::serve(config.bind_addr, state).await {
        tracing::error!("server error: {err}");
        std::process::exit(1);
    }
}
