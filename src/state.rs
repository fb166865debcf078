use std::sync::Arc;

use riftview_shared::traits::LolApiFull;

use crate::assets::AssetCache;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub api: Arc<dyn LolApiFull>,
    pub assets: AssetCache,
}
