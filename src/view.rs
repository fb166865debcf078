//! Flattening of upstream match detail into the compact view-models
//! served to the front end.

use riftview_shared::dto::{MatchDto, MatchSummary, RosterEntry, RuneUrls};

use crate::assets::GameAssets;

/// Flatten one match around the participant identified by `puuid`.
/// `None` when that participant is not part of the match.
pub fn summarize_match(m: &MatchDto, puuid: &str, assets: &GameAssets) -> Option<MatchSummary> {
    let player = m.info.participants.iter().find(|p| p.puuid == puuid)?;

    let item_urls = player
        .item_slots()
        .iter()
        .map(|&id| assets.item_icon(id).map(str::to_owned))
        .collect();

    let styles = &player.perks.styles;
    let primary_rune = styles.first().and_then(|s| s.selections.first());
    let secondary_style = styles.get(1);
    let runes = RuneUrls {
        primary_rune_url: primary_rune
            .and_then(|sel| assets.rune_icon(sel.perk))
            .map(str::to_owned),
        secondary_style_url: secondary_style
            .and_then(|s| assets.rune_icon(s.style))
            .map(str::to_owned),
    };

    let all_players = m
        .info
        .participants
        .iter()
        .map(|p| RosterEntry {
            game_name: p
                .riot_id_game_name
                .clone()
                .unwrap_or_else(|| "Player Not Found".to_string()),
            tag_line: p.riot_id_tagline.clone().unwrap_or_default(),
            champion_id: p.champion_id,
            team_id: p.team_id,
        })
        .collect();

    Some(MatchSummary {
        match_id: m.metadata.match_id.clone(),
        win: player.win,
        game_duration: m.info.game_duration,
        game_end_timestamp: m.info.game_end_timestamp,
        queue_id: m.info.queue_id,
        champion_id: player.champion_id,
        champion_name: player.champion_name.clone(),
        kills: player.kills,
        deaths: player.deaths,
        assists: player.assists,
        summoner1_id: player.summoner1_id,
        summoner2_id: player.summoner2_id,
        item_urls,
        runes,
        all_players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{match_of, participant, perk_styles};

    #[test]
    fn item_slots_map_through_the_item_table() {
        let mut player = participant("p1");
        player.item0 = 1001;
        let m = match_of(vec![player]);

        let mut assets = GameAssets::default();
        assets.items.insert(1001, "url1".to_string());

        let summary = summarize_match(&m, "p1", &assets).unwrap();
        assert_eq!(
            summary.item_urls,
            vec![Some("url1".to_string()), None, None, None, None, None, None]
        );
    }

    #[test]
    fn runes_pick_first_perk_and_second_style() {
        let mut player = participant("p1");
        player.perks = perk_styles(8112, 8300);
        let m = match_of(vec![player]);

        let mut assets = GameAssets::default();
        assets.runes.insert(8112, "primary-url".to_string());
        assets.runes.insert(8300, "secondary-url".to_string());

        let summary = summarize_match(&m, "p1", &assets).unwrap();
        assert_eq!(summary.runes.primary_rune_url.as_deref(), Some("primary-url"));
        assert_eq!(
            summary.runes.secondary_style_url.as_deref(),
            Some("secondary-url")
        );
    }

    #[test]
    fn missing_rune_styles_yield_no_urls() {
        let m = match_of(vec![participant("p1")]);
        let summary = summarize_match(&m, "p1", &GameAssets::default()).unwrap();
        assert_eq!(summary.runes.primary_rune_url, None);
        assert_eq!(summary.runes.secondary_style_url, None);
    }

    #[test]
    fn roster_defaults_missing_riot_ids() {
        let mut other = participant("p2");
        other.riot_id_game_name = None;
        other.riot_id_tagline = None;
        let m = match_of(vec![participant("p1"), other]);

        let summary = summarize_match(&m, "p1", &GameAssets::default()).unwrap();
        assert_eq!(summary.all_players.len(), 2);
        assert_eq!(summary.all_players[1].game_name, "Player Not Found");
        assert_eq!(summary.all_players[1].tag_line, "");
    }

    #[test]
    fn absent_participant_yields_none() {
        let m = match_of(vec![participant("p1")]);
        assert!(summarize_match(&m, "someone-else", &GameAssets::default()).is_none());
    }
}
