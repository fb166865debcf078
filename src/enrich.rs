//! Per-player enrichment derived from upstream data: main-lane inference
//! and main-champion resolution. Both are best-effort and degrade to
//! absent values instead of failing a request.

use futures::future::join_all;
use riftview_shared::{Cluster, dto::ChampionMastery, traits::LolApiFull};

use crate::assets::GameAssets;

/// Sentinel returned when no lane can be inferred.
pub const LANE_UNAVAILABLE: &str = "N/A";

const RANKED_SOLO_QUEUE: u16 = 420;
const LANE_SAMPLE_IDS: u8 = 15;
const LANE_SAMPLE_DETAILS: usize = 5;

/// Infer the player's most played lane from their recent ranked games.
///
/// Looks at up to the 15 most recent ranked match IDs and fetches detail
/// for the first 5 in parallel. Failed detail fetches are skipped; the
/// most frequent position label wins, ties broken by first encounter.
pub async fn determine_main_lane(api: &dyn LolApiFull, cluster: Cluster, puuid: &str) -> String {
    let match_ids = match api
        .get_match_ids(puuid, cluster, Some(RANKED_SOLO_QUEUE), LANE_SAMPLE_IDS)
        .await
    {
        Ok(ids) => ids,
        Err(err) => {
            tracing::debug!("lane inference degraded: {err}");
            return LANE_UNAVAILABLE.to_string();
        }
    };

    if match_ids.is_empty() {
        return LANE_UNAVAILABLE.to_string();
    }

    let details = join_all(
        match_ids
            .iter()
            .take(LANE_SAMPLE_DETAILS)
            .map(|id| api.get_match(id, cluster)),
    )
    .await;

    let mut lanes = Vec::new();
    for detail in details {
        let Ok(m) = detail else { continue };
        if let Some(player) = m.info.participants.iter().find(|p| p.puuid == puuid) {
            lanes.push(
                player
                    .individual_position
                    .clone()
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
            );
        }
    }

    match most_frequent(lanes) {
        Some(lane) => lane,
        None => LANE_UNAVAILABLE.to_string(),
    }
}

/// Most frequently occurring label; ties resolved in favor of the label
/// encountered first.
fn most_frequent(labels: Vec<String>) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (label, n) in counts {
        match &best {
            Some((_, best_n)) if *best_n >= n => {}
            _ => best = Some((label, n)),
        }
    }
    best.map(|(label, _)| label)
}

/// Key name of the player's highest-mastery champion. The upstream
/// returns masteries sorted descending; the first entry is the main.
/// `None` when the list is empty or the champion table has no entry.
pub fn main_champion_key(masteries: &[ChampionMastery], assets: &GameAssets) -> Option<String> {
    let top = masteries.first()?;
    assets.champion_key(top.champion_id).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubApi, mastery, match_with_position};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn main_lane_is_the_most_frequent_position() {
        let positions = ["TOP", "TOP", "JUNGLE", "TOP", "MID"];
        let mut api = StubApi::default();
        api.match_ids = Ok((0..5).map(|i| format!("M{i}")).collect());
        for (i, position) in positions.iter().enumerate() {
            api.matches
                .insert(format!("M{i}"), match_with_position("p1", position));
        }

        let lane = determine_main_lane(&api, Cluster::Americas, "p1").await;
        assert_eq!(lane, "TOP");
    }

    #[tokio::test]
    async fn ties_resolve_to_first_encountered_label() {
        let positions = ["MID", "TOP", "TOP", "MID"];
        let mut api = StubApi::default();
        api.match_ids = Ok((0..4).map(|i| format!("M{i}")).collect());
        for (i, position) in positions.iter().enumerate() {
            api.matches
                .insert(format!("M{i}"), match_with_position("p1", position));
        }

        let lane = determine_main_lane(&api, Cluster::Europe, "p1").await;
        assert_eq!(lane, "MID");
    }

    #[tokio::test]
    async fn no_match_ids_short_circuits_without_detail_fetches() {
        let api = StubApi::default();

        let lane = determine_main_lane(&api, Cluster::Americas, "p1").await;

        assert_eq!(lane, LANE_UNAVAILABLE);
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_detail_fetches_failing_yields_not_applicable() {
        let mut api = StubApi::default();
        // IDs exist but none of them resolve to a match
        api.match_ids = Ok(vec!["M0".into(), "M1".into()]);

        let lane = determine_main_lane(&api, Cluster::Americas, "p1").await;
        assert_eq!(lane, LANE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn only_the_first_five_ids_are_sampled() {
        let mut api = StubApi::default();
        api.match_ids = Ok((0..15).map(|i| format!("M{i}")).collect());
        for i in 0..15 {
            api.matches
                .insert(format!("M{i}"), match_with_position("p1", "BOTTOM"));
        }

        determine_main_lane(&api, Cluster::Americas, "p1").await;
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn missing_position_counts_as_unknown() {
        let mut api = StubApi::default();
        api.match_ids = Ok(vec!["M0".into()]);
        let mut m = match_with_position("p1", "TOP");
        m.info.participants[0].individual_position = None;
        api.matches.insert("M0".into(), m);

        let lane = determine_main_lane(&api, Cluster::Asia, "p1").await;
        assert_eq!(lane, "UNKNOWN");
    }

    #[test]
    fn main_champion_key_is_none_when_unmapped() {
        let assets = GameAssets::default();
        assert_eq!(main_champion_key(&[mastery(103)], &assets), None);
    }

    #[test]
    fn main_champion_key_uses_the_top_entry() {
        let mut assets = GameAssets::default();
        assets.champions.insert(103, "Ahri".to_string());
        assets.champions.insert(1, "Annie".to_string());

        let masteries = [mastery(103), mastery(1)];
        assert_eq!(
            main_champion_key(&masteries, &assets),
            Some("Ahri".to_string())
        );
    }

    #[test]
    fn main_champion_key_is_none_without_masteries() {
        let assets = GameAssets::default();
        assert_eq!(main_champion_key(&[], &assets), None);
    }
}
