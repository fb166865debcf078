//! Static game-data lookup tables: item icons, rune icons and champion
//! key names, fetched once from CommunityDragon/DataDragon.

use std::collections::HashMap;

use futures::join;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{info, warn};

const ITEM_JSON_URL: &str =
    "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/items.json";
const ITEM_ICON_BASE_URL: &str =
    "https://raw.communitydragon.org/latest/game/assets/items/icons2d/";

const RUNE_JSON_URL: &str =
    "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/perks.json";
const RUNE_ICON_BASE_URL: &str = "https://raw.communitydragon.org/latest/game/assets/perks/";
const RUNE_ICON_PATH_PREFIX: &str = "/lol-game-data/assets/v1/perk-images/";

const CHAMPION_JSON_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/14.9.1/data/en_US/champion.json";

/// Where the three source documents live. Defaults to the production
/// CDNs; tests point this at a mock server.
#[derive(Debug, Clone)]
pub struct AssetSources {
    pub items_url: String,
    pub runes_url: String,
    pub champions_url: String,
}

impl Default for AssetSources {
    fn default() -> Self {
        Self {
            items_url: ITEM_JSON_URL.to_string(),
            runes_url: RUNE_JSON_URL.to_string(),
            champions_url: CHAMPION_JSON_URL.to_string(),
        }
    }
}

/// The three lookup tables. A table left empty by a failed load only
/// degrades enrichment; lookups must tolerate misses at all times.
#[derive(Debug, Default)]
pub struct GameAssets {
    pub items: HashMap<u32, String>,
    pub runes: HashMap<u32, String>,
    pub champions: HashMap<u32, String>,
}

impl GameAssets {
    pub fn item_icon(&self, id: u32) -> Option<&str> {
        self.items.get(&id).map(String::as_str)
    }

    pub fn rune_icon(&self, id: u32) -> Option<&str> {
        self.runes.get(&id).map(String::as_str)
    }

    pub fn champion_key(&self, id: u32) -> Option<&str> {
        self.champions.get(&id).map(String::as_str)
    }
}

/// Process-wide cache around [`GameAssets`] with a single-flight
/// initialization guard: concurrent first requests trigger one load, and
/// a completed load (even a failed one) is never repeated.
#[derive(Debug)]
pub struct AssetCache {
    http: reqwest::Client,
    sources: AssetSources,
    cell: OnceCell<GameAssets>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::with_sources(AssetSources::default())
    }

    pub fn with_sources(sources: AssetSources) -> Self {
        Self {
            http: reqwest::Client::new(),
            sources,
            cell: OnceCell::new(),
        }
    }

    /// A cache already holding the given tables; no network involved.
    #[cfg(test)]
    pub fn preloaded(assets: GameAssets) -> Self {
        Self {
            http: reqwest::Client::new(),
            sources: AssetSources::default(),
            cell: OnceCell::new_with(Some(assets)),
        }
    }

    pub async fn ensure_loaded(&self) -> &GameAssets {
        self.cell.get_or_init(|| self.load_all()).await
    }

    async fn load_all(&self) -> GameAssets {
        let (items, runes, champions) = join!(
            self.load_items(),
            self.load_runes(),
            self.load_champions()
        );

        GameAssets {
            items: items.unwrap_or_else(|e| {
                warn!("failed to load items.json: {e}");
                HashMap::new()
            }),
            runes: runes.unwrap_or_else(|e| {
                warn!("failed to load perks.json: {e}");
                HashMap::new()
            }),
            champions: champions.unwrap_or_else(|e| {
                warn!("failed to load champion.json: {e}");
                HashMap::new()
            }),
        }
    }

    async fn load_items(&self) -> Result<HashMap<u32, String>, reqwest::Error> {
        let descriptors: Vec<ItemDescriptor> = self
            .http
            .get(&self.sources.items_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut map = HashMap::new();
        for item in descriptors {
            let Some(icon_path) = item.icon_path.filter(|p| !p.is_empty()) else {
                continue;
            };
            let file_name = icon_path
                .rsplit('/')
                .next()
                .unwrap_or(&icon_path)
                .to_lowercase();
            map.insert(item.id, format!("{ITEM_ICON_BASE_URL}{file_name}"));
        }

        info!("{} item icons loaded", map.len());
        Ok(map)
    }

    async fn load_runes(&self) -> Result<HashMap<u32, String>, reqwest::Error> {
        let descriptors: Vec<RuneDescriptor> = self
            .http
            .get(&self.sources.runes_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut map = HashMap::new();
        for rune in descriptors {
            let Some(icon_path) = rune.icon_path.filter(|p| !p.is_empty()) else {
                continue;
            };
            let relative = icon_path.replace(RUNE_ICON_PATH_PREFIX, "");
            map.insert(
                rune.id,
                format!("{RUNE_ICON_BASE_URL}{relative}").to_lowercase(),
            );
        }

        info!("{} rune icons loaded", map.len());
        Ok(map)
    }

    async fn load_champions(&self) -> Result<HashMap<u32, String>, reqwest::Error> {
        let document: ChampionDocument = self
            .http
            .get(&self.sources.champions_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut map = HashMap::new();
        for (key_name, entry) in document.data {
            if let Ok(id) = entry.key.parse::<u32>() {
                map.insert(id, key_name);
            }
        }

        info!("{} champions loaded", map.len());
        Ok(map)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemDescriptor {
    id: u32,
    #[serde(default)]
    icon_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuneDescriptor {
    id: u32,
    #[serde(default)]
    icon_path: Option<String>,
}

/// DataDragon champion.json: a champion-name-keyed document where each
/// entry carries its numeric key as a string.
#[derive(Debug, Deserialize)]
struct ChampionDocument {
    data: HashMap<String, ChampionEntry>,
}

#[derive(Debug, Deserialize)]
struct ChampionEntry {
    key: String,
}
