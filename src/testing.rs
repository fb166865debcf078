//! Test doubles shared by the enrichment and handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use riftview_shared::{
    Cluster, Platform, UpstreamError,
    dto::{
        Account, ChampionMastery, LeagueEntry, MatchDto, MatchInfoDto, MatchMetadataDto,
        ParticipantDto, PerkSelectionDto, PerkStyleDto, PerksDto, Summoner,
    },
    traits::{AccountApi, LeagueApi, LolApiFull, MasteryApi, MatchApi, SummonerApi},
};

/// Canned responses standing in for the Riot API. Every call counts into
/// `total_calls`; match-detail calls additionally count into
/// `detail_calls`.
#[derive(Debug)]
pub struct StubApi {
    pub account: Result<Account, UpstreamError>,
    pub summoner: Result<Summoner, UpstreamError>,
    pub leagues: Result<Vec<LeagueEntry>, UpstreamError>,
    pub masteries: Result<Vec<ChampionMastery>, UpstreamError>,
    pub match_ids: Result<Vec<String>, UpstreamError>,
    /// Detail lookups; IDs not present answer with a 404.
    pub matches: HashMap<String, MatchDto>,
    /// When set, every call sleeps this long before answering.
    pub latency: Option<Duration>,
    pub total_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            account: Ok(account("p1", "Faker", "KR1")),
            summoner: Ok(summoner("p1")),
            leagues: Ok(Vec::new()),
            masteries: Ok(Vec::new()),
            match_ids: Ok(Vec::new()),
            matches: HashMap::new(),
            latency: None,
            total_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }
}

impl StubApi {
    fn not_found() -> UpstreamError {
        UpstreamError::Status {
            code: 404,
            message: "Data not found".to_string(),
        }
    }

    async fn answer(&self) {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl AccountApi for StubApi {
    async fn get_account_by_riot_id(
        &self,
        _game_name: &str,
        _tag_line: &str,
        _cluster: Cluster,
    ) -> Result<Account, UpstreamError> {
        self.answer().await;
        self.account.clone()
    }
}

#[async_trait]
impl SummonerApi for StubApi {
    async fn get_summoner_by_puuid(
        &self,
        _puuid: &str,
        _platform: Platform,
    ) -> Result<Summoner, UpstreamError> {
        self.answer().await;
        self.summoner.clone()
    }
}

#[async_trait]
impl LeagueApi for StubApi {
    async fn get_leagues(
        &self,
        _puuid: &str,
        _platform: Platform,
    ) -> Result<Vec<LeagueEntry>, UpstreamError> {
        self.answer().await;
        self.leagues.clone()
    }
}

#[async_trait]
impl MasteryApi for StubApi {
    async fn get_masteries(
        &self,
        _puuid: &str,
        _platform: Platform,
    ) -> Result<Vec<ChampionMastery>, UpstreamError> {
        self.answer().await;
        self.masteries.clone()
    }
}

#[async_trait]
impl MatchApi for StubApi {
    async fn get_match_ids(
        &self,
        _puuid: &str,
        _cluster: Cluster,
        _queue: Option<u16>,
        _count: u8,
    ) -> Result<Vec<String>, UpstreamError> {
        self.answer().await;
        self.match_ids.clone()
    }

    async fn get_match(
        &self,
        match_id: &str,
        _cluster: Cluster,
    ) -> Result<MatchDto, UpstreamError> {
        self.answer().await;
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.matches
            .get(match_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }
}

impl LolApiFull for StubApi {}

pub fn account(puuid: &str, game_name: &str, tag_line: &str) -> Account {
    Account {
        puuid: puuid.to_string(),
        game_name: Some(game_name.to_string()),
        tag_line: Some(tag_line.to_string()),
    }
}

pub fn summoner(puuid: &str) -> Summoner {
    Summoner {
        puuid: puuid.to_string(),
        name: None,
        profile_icon_id: 1,
        revision_date: 0,
        summoner_level: 30,
    }
}

pub fn mastery(champion_id: u32) -> ChampionMastery {
    ChampionMastery {
        champion_id,
        champion_level: 7,
        champion_points: 100_000,
    }
}

pub fn participant(puuid: &str) -> ParticipantDto {
    ParticipantDto {
        puuid: puuid.to_string(),
        champion_id: 103,
        champion_name: "Ahri".to_string(),
        team_id: 100,
        win: true,
        kills: 5,
        deaths: 2,
        assists: 9,
        summoner1_id: 4,
        summoner2_id: 14,
        item0: 0,
        item1: 0,
        item2: 0,
        item3: 0,
        item4: 0,
        item5: 0,
        item6: 0,
        individual_position: Some("MIDDLE".to_string()),
        riot_id_game_name: Some("Faker".to_string()),
        riot_id_tagline: Some("KR1".to_string()),
        perks: PerksDto::default(),
    }
}

pub fn match_with_position(puuid: &str, position: &str) -> MatchDto {
    let mut player = participant(puuid);
    player.individual_position = Some(position.to_string());
    match_of(vec![player])
}

pub fn match_of(participants: Vec<ParticipantDto>) -> MatchDto {
    MatchDto {
        metadata: MatchMetadataDto {
            match_id: "TEST_1".to_string(),
        },
        info: MatchInfoDto {
            game_duration: 1800,
            game_end_timestamp: 1_700_000_000_000,
            queue_id: 420,
            participants,
        },
    }
}

pub fn perk_styles(primary_perk: u32, secondary_style: u32) -> PerksDto {
    PerksDto {
        styles: vec![
            PerkStyleDto {
                style: 8100,
                selections: vec![PerkSelectionDto { perk: primary_perk }],
            },
            PerkStyleDto {
                style: secondary_style,
                selections: Vec::new(),
            },
        ],
    }
}
