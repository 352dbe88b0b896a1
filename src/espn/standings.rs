use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::espn::{self, lenient_list, non_empty, RawTeam, Scalar};
use crate::model::StandingsRow;

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct StandingsResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    children: Vec<RawChild>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawChild {
    standings: Option<RawStandings>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawStandings {
    #[serde(default, deserialize_with = "lenient_list")]
    entries: Vec<RawEntry>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawEntry {
    team: Option<RawTeam>,
    #[serde(default, deserialize_with = "lenient_list")]
    stats: Vec<RawStat>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawStat {
    name: Option<String>,
    value: Option<Scalar>,
}

#[instrument(skip(client))]
pub(crate) async fn get_standings(client: &reqwest::Client) -> Result<Vec<StandingsRow>> {
    let url = espn::STANDINGS_URL;
    let body = espn::get_body(client, url).await?;
    let response: StandingsResponse = espn::decode(url, &body)?;
    let rows = normalize_standings(response);
    debug!(count = rows.len(), "normalized standings");
    Ok(rows)
}

/// Decode a raw standings payload into normalized table rows.
///
/// Exposed for fixture-based tests; the client method wraps fetch + parse.
pub fn parse_standings(body: &str) -> serde_json::Result<Vec<StandingsRow>> {
    let response: StandingsResponse = serde_json::from_str(body)?;
    Ok(normalize_standings(response))
}

/// Entries live at `children[0].standings.entries`; any missing segment on
/// that path yields an empty table. Input order is preserved, the upstream
/// payload is already sorted by rank.
fn normalize_standings(response: StandingsResponse) -> Vec<StandingsRow> {
    response
        .children
        .into_iter()
        .next()
        .and_then(|child| child.standings)
        .map(|standings| standings.entries)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| normalize_entry(index, entry))
        .collect()
}

fn normalize_entry(index: usize, entry: RawEntry) -> StandingsRow {
    let stats: HashMap<String, Scalar> = entry
        .stats
        .into_iter()
        .filter_map(|stat| Some((stat.name?, stat.value?)))
        .collect();
    let stat = |name: &str| stats.get(name).and_then(Scalar::as_i64);

    let team = entry.team.unwrap_or_default();
    StandingsRow {
        rank: stat("rank").unwrap_or(index as i64 + 1),
        team: non_empty(team.display_name.clone())
            .or_else(|| non_empty(team.name.clone()))
            .unwrap_or_else(|| espn::DEFAULT_TEAM_NAME.to_string()),
        // Standings teams only carry a logos list, not a direct logo field.
        logo_url: team.first_logo_href(),
        played: stat("gamesPlayed").unwrap_or(0),
        won: stat("wins").unwrap_or(0),
        drawn: stat("ties").unwrap_or(0),
        lost: stat("losses").unwrap_or(0),
        goals_for: stat("pointsFor").unwrap_or(0),
        goals_against: stat("pointsAgainst").unwrap_or(0),
        goal_difference: stat("pointDifferential").unwrap_or(0),
        points: stat("points").unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_stats_default_to_zero_and_positional_rank() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"displayName": "A"}, "stats": [{"name": "rank", "value": 1}]},
            {"team": {"displayName": "B"}, "stats": [{"name": "rank", "value": 2}]},
            {"team": {"displayName": "C"}, "stats": [{"name": "wins", "value": 10}]}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows.len(), 3);

        let third = &rows[2];
        assert_eq!(third.rank, 3);
        assert_eq!(third.won, 10);
        assert_eq!(third.played, 0);
        assert_eq!(third.drawn, 0);
        assert_eq!(third.lost, 0);
        assert_eq!(third.goals_for, 0);
        assert_eq!(third.goals_against, 0);
        assert_eq!(third.goal_difference, 0);
        assert_eq!(third.points, 0);
    }

    #[test]
    fn string_encoded_stats_are_coerced() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"displayName": "Leeds"}, "stats": [
                {"name": "points", "value": "41"},
                {"name": "pointDifferential", "value": "-7"}
            ]}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows[0].points, 41);
        assert_eq!(rows[0].goal_difference, -7);
    }

    #[test]
    fn team_name_falls_back_through_chain() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"name": "Short"}, "stats": []},
            {"stats": []}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows[0].team, "Short");
        assert_eq!(rows[1].team, "Team");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn empty_names_fall_back_and_direct_logo_is_ignored() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"displayName": "", "name": "", "logo": "direct.png"}}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows[0].team, "Team");
        assert_eq!(rows[0].logo_url, None);
    }

    #[test]
    fn logo_comes_from_first_list_entry() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"displayName": "Everton", "logos": [{"href": "a.png"}, {"href": "b.png"}]}}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows[0].logo_url.as_deref(), Some("a.png"));
    }

    #[test]
    fn missing_path_segments_yield_empty_table() {
        assert!(parse_standings("{}").unwrap().is_empty());
        assert!(parse_standings(r#"{"children": []}"#).unwrap().is_empty());
        assert!(parse_standings(r#"{"children": [{}]}"#).unwrap().is_empty());
        assert!(
            parse_standings(r#"{"children": [{"standings": {}}]}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn unnamed_stats_are_ignored() {
        let body = r#"{"children": [{"standings": {"entries": [
            {"team": {"displayName": "X"}, "stats": [{"value": 99}, {"name": "wins", "value": 4}]}
        ]}}]}"#;

        let rows = parse_standings(body).unwrap();
        assert_eq!(rows[0].won, 4);
    }
}
