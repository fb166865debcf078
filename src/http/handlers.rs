//! Aggregation endpoints: validate region, ensure static data is loaded,
//! fan out to the Riot API and reshape the results.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use riftview_shared::{
    Cluster, Platform, UpstreamError,
    dto::{Account, MatchSummary, PlayerDetails, PlayerProfile, Summoner},
    traits::LolApiFull,
};
use serde::Deserialize;

use crate::{
    enrich::{determine_main_lane, main_champion_key},
    error::ApiError,
    state::AppState,
    view::summarize_match,
};

/// Ceiling on the detailed-profile and match-history fan-outs. The basic
/// profile path deliberately carries no ceiling.
const FANOUT_TIMEOUT: Duration = Duration::from_secs(20);

const MATCH_HISTORY_COUNT: u8 = 10;

#[derive(Debug, Deserialize)]
pub struct RiotIdQuery {
    pub game_name: String,
    pub tag_line: String,
}

fn parse_platform(region: &str) -> Result<Platform, ApiError> {
    region
        .parse()
        .map_err(|_| ApiError::InvalidRegion(region.to_string()))
}

async fn resolve_account(
    api: &dyn LolApiFull,
    query: &RiotIdQuery,
    cluster: Cluster,
) -> Result<Account, ApiError> {
    match api
        .get_account_by_riot_id(&query.game_name, &query.tag_line, cluster)
        .await
    {
        Err(err) if err.is_not_found() => Err(ApiError::NotFound(format!(
            "The Riot ID '{}#{}' was not found.",
            query.game_name, query.tag_line
        ))),
        other => other.map_err(ApiError::from),
    }
}

fn checked_summoner(
    platform: Platform,
    result: Result<Summoner, UpstreamError>,
) -> Result<Summoner, ApiError> {
    match result {
        Err(err) if err.is_not_found() => Err(ApiError::NotFound(format!(
            "The player exists but has no LoL profile in region {platform}."
        ))),
        other => other.map_err(ApiError::from),
    }
}

fn fanout_timeout() -> ApiError {
    ApiError::Unreachable("timed out waiting for the Riot API".to_string())
}

/// `GET /api/player/{region}?game_name=&tag_line=`
///
/// Basic profile: account, summoner and league entries, resolved
/// sequentially (summoner and league both need the PUUID).
pub async fn get_player(
    Path(region): Path<String>,
    Query(query): Query<RiotIdQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayerProfile>, ApiError> {
    let platform = parse_platform(&region)?;
    let cluster = platform.cluster();
    state.assets.ensure_loaded().await;

    let api = state.api.as_ref();
    let account = resolve_account(api, &query, cluster).await?;
    let summoner = checked_summoner(
        platform,
        api.get_summoner_by_puuid(&account.puuid, platform).await,
    )?;
    let league = api.get_leagues(&account.puuid, platform).await?;

    Ok(Json(PlayerProfile {
        account,
        summoner,
        league,
    }))
}

/// `GET /api/player-details/{region}?game_name=&tag_line=`
///
/// Detailed profile: after the account resolves, summoner, league,
/// mastery and lane inference run concurrently. Mastery and lane are
/// best-effort and never fail the request.
pub async fn get_player_details(
    Path(region): Path<String>,
    Query(query): Query<RiotIdQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayerDetails>, ApiError> {
    let platform = parse_platform(&region)?;
    let cluster = platform.cluster();
    let assets = state.assets.ensure_loaded().await;

    let api = state.api.as_ref();
    let details = tokio::time::timeout(FANOUT_TIMEOUT, async {
        let account = resolve_account(api, &query, cluster).await?;
        let puuid = account.puuid.clone();

        let (summoner, leagues, masteries, main_lane) = tokio::join!(
            api.get_summoner_by_puuid(&puuid, platform),
            api.get_leagues(&puuid, platform),
            api.get_masteries(&puuid, platform),
            determine_main_lane(api, cluster, &puuid),
        );

        let summoner = checked_summoner(platform, summoner)?;
        let league = leagues?;
        let champion_mastery = masteries?;
        let main_champion_key = main_champion_key(&champion_mastery, assets);

        Ok::<_, ApiError>(PlayerDetails {
            account,
            summoner,
            league,
            champion_mastery,
            main_lane,
            main_champion_key,
        })
    })
    .await
    .map_err(|_| fanout_timeout())??;

    Ok(Json(details))
}

/// `GET /api/match-history/{region_routing}/{puuid}`
///
/// Up to the 10 most recent matches, newest first. An empty history or
/// an upstream 404 on the ID lookup answers with an empty list, not an
/// error; matches whose detail cannot be retrieved are skipped.
pub async fn get_match_history(
    Path((region_routing, puuid)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MatchSummary>>, ApiError> {
    let cluster: Cluster = region_routing
        .parse()
        .map_err(|_| ApiError::InvalidRegion(region_routing.clone()))?;
    let assets = state.assets.ensure_loaded().await;

    let api = state.api.as_ref();
    let summaries = tokio::time::timeout(FANOUT_TIMEOUT, async {
        let ids = match api
            .get_match_ids(&puuid, cluster, None, MATCH_HISTORY_COUNT)
            .await
        {
            Err(err) if err.is_not_found() => return Ok(Vec::new()),
            Err(UpstreamError::Status { code, .. }) => {
                return Err(ApiError::Upstream {
                    status: code,
                    message: "Failed to fetch match history from the Riot API.".to_string(),
                });
            }
            other => other.map_err(ApiError::from)?,
        };
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let details =
            futures::future::join_all(ids.iter().map(|id| api.get_match(id, cluster))).await;

        Ok(details
            .into_iter()
            .filter_map(Result::ok)
            .filter_map(|m| summarize_match(&m, &puuid, assets))
            .collect())
    })
    .await
    .map_err(|_| fanout_timeout())??;

    Ok(Json(summaries))
}
