use async_trait::async_trait;
use riftview_shared::{
    Cluster, Platform, UpstreamError,
    dto::{Account, ChampionMastery, LeagueEntry, MatchDto, Summoner},
    traits::{AccountApi, LeagueApi, LolApiFull, MasteryApi, MatchApi, SummonerApi},
};

use super::client::ApiClient;

/// High level client implementing all Riot APIs used by the aggregator.
#[derive(Debug)]
pub struct LolApiClient(ApiClient);

impl LolApiClient {
    /// Create a new API client using the provided key.
    pub fn new(api_key: String) -> Self {
        Self(ApiClient::new(api_key))
    }

    /// Create a client whose calls all go to `origin` (mock server).
    pub fn with_origin(api_key: String, origin: String) -> Self {
        Self(ApiClient::with_origin(api_key, origin))
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.0.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }
}

#[async_trait]
impl AccountApi for LolApiClient {
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
        cluster: Cluster,
    ) -> Result<Account, UpstreamError> {
        tracing::trace!("get_account_by_riot_id {game_name}#{tag_line} via {cluster}");

        let path = format!(
            "/riot/account/v1/accounts/by-riot-id/{}/{}",
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.0.get_json(self.0.url(cluster.base_url(), &path)).await
    }
}

#[async_trait]
impl SummonerApi for LolApiClient {
    async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Summoner, UpstreamError> {
        tracing::trace!("get_summoner_by_puuid {puuid} in {platform}");

        let path = format!("/lol/summoner/v4/summoners/by-puuid/{puuid}");

        self.0
            .get_json(self.0.url(platform.base_url(), &path))
            .await
    }
}

#[async_trait]
impl LeagueApi for LolApiClient {
    async fn get_leagues(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Vec<LeagueEntry>, UpstreamError> {
        tracing::trace!("get_leagues {puuid} in {platform}");

        let path = format!("/lol/league/v4/entries/by-puuid/{puuid}");

        self.0
            .get_json(self.0.url(platform.base_url(), &path))
            .await
    }
}

#[async_trait]
impl MasteryApi for LolApiClient {
    async fn get_masteries(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Vec<ChampionMastery>, UpstreamError> {
        tracing::trace!("get_masteries {puuid} in {platform}");

        let path = format!("/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}");

        // Mastery is best-effort: an upstream error status degrades to an
        // empty list instead of failing the aggregation.
        match self
            .0
            .get_json(self.0.url(platform.base_url(), &path))
            .await
        {
            Err(UpstreamError::Status { code, message }) => {
                tracing::debug!("mastery fetch degraded to empty (HTTP {code}): {message}");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

#[async_trait]
impl MatchApi for LolApiClient {
    async fn get_match_ids(
        &self,
        puuid: &str,
        cluster: Cluster,
        queue: Option<u16>,
        count: u8,
    ) -> Result<Vec<String>, UpstreamError> {
        tracing::trace!("get_match_ids {puuid} via {cluster}");

        let query = match queue {
            Some(queue) => format!("?queue={queue}&count={count}"),
            None => format!("?count={count}"),
        };
        let path = format!("/lol/match/v5/matches/by-puuid/{puuid}/ids{query}");

        self.0.get_json(self.0.url(cluster.base_url(), &path)).await
    }

    async fn get_match(
        &self,
        match_id: &str,
        cluster: Cluster,
    ) -> Result<MatchDto, UpstreamError> {
        tracing::trace!("get_match {match_id} via {cluster}");

        let path = format!("/lol/match/v5/matches/{match_id}");

        self.0.get_json(self.0.url(cluster.base_url(), &path)).await
    }
}

impl LolApiFull for LolApiClient {}
