//! Wire DTOs for the Riot REST endpoints and the view-models returned to
//! the front end. Everything is camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Account-V1 response. Riot may omit the name or tag on some accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Summoner-V4 response, passed through to the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub puuid: String,
    /// Legacy summoner name; newer API payloads no longer carry it.
    #[serde(default)]
    pub name: Option<String>,
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
    pub summoner_level: i64,
}

/// League-V4 entry, passed through to the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: u16,
    pub wins: u32,
    pub losses: u32,
}

/// Champion-Mastery-V4 entry. The upstream returns these sorted by mastery
/// descending; that ordering is relied upon and not re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub champion_id: u32,
    pub champion_level: u32,
    pub champion_points: u64,
}

/// Match-V5 detail response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MatchMetadataDto,
    pub info: MatchInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    pub match_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub game_duration: u64,
    #[serde(default)]
    pub game_end_timestamp: u64,
    pub queue_id: u16,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: u32,
    pub champion_name: String,
    pub team_id: u16,
    pub win: bool,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub summoner1_id: u16,
    pub summoner2_id: u16,
    pub item0: u32,
    pub item1: u32,
    pub item2: u32,
    pub item3: u32,
    pub item4: u32,
    pub item5: u32,
    pub item6: u32,
    #[serde(default)]
    pub individual_position: Option<String>,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
    #[serde(default)]
    pub perks: PerksDto,
}

impl ParticipantDto {
    /// The seven inventory slots, trinket last.
    pub fn item_slots(&self) -> [u32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerksDto {
    #[serde(default)]
    pub styles: Vec<PerkStyleDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkStyleDto {
    pub style: u32,
    #[serde(default)]
    pub selections: Vec<PerkSelectionDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkSelectionDto {
    pub perk: u32,
}

/// `GET /api/player/{region}` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub account: Account,
    pub summoner: Summoner,
    pub league: Vec<LeagueEntry>,
}

/// `GET /api/player-details/{region}` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub account: Account,
    pub summoner: Summoner,
    pub league: Vec<LeagueEntry>,
    pub champion_mastery: Vec<ChampionMastery>,
    pub main_lane: String,
    pub main_champion_key: Option<String>,
}

/// One entry of the `GET /api/match-history` response: a single match
/// flattened around the requested participant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    pub win: bool,
    pub game_duration: u64,
    pub game_end_timestamp: u64,
    pub queue_id: u16,
    pub champion_id: u32,
    pub champion_name: String,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub summoner1_id: u16,
    pub summoner2_id: u16,
    /// Always seven entries, `null` for empty slots and unknown items.
    pub item_urls: Vec<Option<String>>,
    pub runes: RuneUrls,
    pub all_players: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneUrls {
    pub primary_rune_url: Option<String>,
    pub secondary_style_url: Option<String>,
}

/// Minimal identity of one of the ten participants of a match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub game_name: String,
    pub tag_line: String,
    pub champion_id: u32,
    pub team_id: u16,
}
