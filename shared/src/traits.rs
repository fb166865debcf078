//! Traits implemented by structures capable of querying the Riot API.
//! The aggregation layer only ever sees these, so it can be exercised
//! against stub implementations in tests.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::dto::{Account, ChampionMastery, LeagueEntry, MatchDto, Summoner};
use crate::errors::UpstreamError;
use crate::{Cluster, Platform};

/// Riot Account-V1 API as described in the official documentation.
#[async_trait]
pub trait AccountApi: Send + Sync + Debug {
    /// Resolve a Riot ID to an account. 404 surfaces as
    /// [`UpstreamError::Status`] with code 404.
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
        cluster: Cluster,
    ) -> Result<Account, UpstreamError>;
}

/// Riot Summoner-V4 API.
#[async_trait]
pub trait SummonerApi: Send + Sync + Debug {
    async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Summoner, UpstreamError>;
}

/// Riot League-V4 API.
#[async_trait]
pub trait LeagueApi: Send + Sync + Debug {
    async fn get_leagues(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Vec<LeagueEntry>, UpstreamError>;
}

/// Riot Champion-Mastery-V4 API.
#[async_trait]
pub trait MasteryApi: Send + Sync + Debug {
    /// Mastery is best-effort: implementations yield an empty list on any
    /// upstream error status instead of failing.
    async fn get_masteries(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Vec<ChampionMastery>, UpstreamError>;
}

/// Riot Match-V5 API.
#[async_trait]
pub trait MatchApi: Send + Sync + Debug {
    /// Recent match IDs for a player, newest first, optionally filtered to
    /// one queue.
    async fn get_match_ids(
        &self,
        puuid: &str,
        cluster: Cluster,
        queue: Option<u16>,
        count: u8,
    ) -> Result<Vec<String>, UpstreamError>;

    async fn get_match(&self, match_id: &str, cluster: Cluster)
    -> Result<MatchDto, UpstreamError>;
}

/// All APIs required for the entire scope of the aggregator.
pub trait LolApiFull: AccountApi + SummonerApi + LeagueApi + MasteryApi + MatchApi {}
