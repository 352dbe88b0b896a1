use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::espn::{self, lenient_list, non_empty, RawTeam, Scalar};
use crate::model::{MatchEvent, StatusState, TeamSide};

/// Venue shown when neither the competition nor the event names one.
const DEFAULT_VENUE: &str = "Premier League";
/// Badge text for a match with no usable status detail.
const DEFAULT_BADGE: &str = "Scheduled";
const DEFAULT_HOME_NAME: &str = "Home";
const DEFAULT_AWAY_NAME: &str = "Away";

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ScoreboardResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    events: Vec<RawEvent>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEvent {
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    competitions: Vec<RawCompetition>,
    status: Option<RawStatus>,
    venue: Option<RawVenue>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompetition {
    #[serde(default, deserialize_with = "lenient_list")]
    competitors: Vec<RawCompetitor>,
    venue: Option<RawVenue>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompetitor {
    home_away: Option<String>,
    team: Option<RawTeam>,
    score: Option<Scalar>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStatus {
    #[serde(rename = "type")]
    status_type: Option<RawStatusType>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStatusType {
    state: Option<String>,
    short_detail: Option<String>,
    description: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVenue {
    full_name: Option<String>,
}

impl RawVenue {
    fn name(&self) -> Option<String> {
        non_empty(self.full_name.clone())
    }
}

#[instrument(skip(client))]
pub(crate) async fn get_scoreboard(
    client: &reqwest::Client,
    date_key: &str,
) -> Result<Vec<MatchEvent>> {
    let url = format!("{}?dates={date_key}", espn::SCOREBOARD_URL);
    let body = espn::get_body(client, &url).await?;
    let response: ScoreboardResponse = espn::decode(&url, &body)?;
    let matches = normalize_scoreboard(response);
    debug!(count = matches.len(), date_key, "normalized scoreboard");
    Ok(matches)
}

/// Decode a raw scoreboard payload into normalized match events.
///
/// Exposed for fixture-based tests; the client method wraps fetch + parse.
pub fn parse_scoreboard(body: &str) -> serde_json::Result<Vec<MatchEvent>> {
    let response: ScoreboardResponse = serde_json::from_str(body)?;
    Ok(normalize_scoreboard(response))
}

fn normalize_scoreboard(response: ScoreboardResponse) -> Vec<MatchEvent> {
    response.events.into_iter().map(normalize_event).collect()
}

fn normalize_event(event: RawEvent) -> MatchEvent {
    let competition = event.competitions.first();
    let home = find_side(competition, "home");
    let away = find_side(competition, "away");

    // Each alternative resolves down to a usable name before the chain moves
    // on: a competition venue without a fullName still falls through to the
    // event-level venue.
    let venue_name = competition
        .and_then(|comp| comp.venue.as_ref())
        .and_then(RawVenue::name)
        .or_else(|| event.venue.as_ref().and_then(RawVenue::name))
        .unwrap_or_else(|| DEFAULT_VENUE.to_string());

    let status_type = event
        .status
        .as_ref()
        .and_then(|status| status.status_type.as_ref());
    let status_state = status_type
        .and_then(|st| st.state.as_deref())
        .map(StatusState::classify)
        .unwrap_or(StatusState::Pre);
    let status_label = status_type
        .and_then(|st| {
            non_empty(st.short_detail.clone()).or_else(|| non_empty(st.description.clone()))
        })
        .unwrap_or_else(|| DEFAULT_BADGE.to_string());

    MatchEvent {
        name: event.name.unwrap_or_default(),
        venue_name,
        status_state,
        status_label,
        home: normalize_side(home, DEFAULT_HOME_NAME),
        away: normalize_side(away, DEFAULT_AWAY_NAME),
    }
}

/// Find the single competitor playing the given role. Duplicated or missing
/// roles in malformed payloads yield `None` and fall back downstream.
fn find_side<'a>(
    competition: Option<&'a RawCompetition>,
    role: &str,
) -> Option<&'a RawCompetitor> {
    competition?
        .competitors
        .iter()
        .filter(|competitor| competitor.home_away.as_deref() == Some(role))
        .exactly_one()
        .ok()
}

fn normalize_side(competitor: Option<&RawCompetitor>, default_name: &str) -> TeamSide {
    let team = competitor.and_then(|c| c.team.as_ref());
    TeamSide {
        name: non_empty(team.and_then(|t| t.display_name.clone()))
            .unwrap_or_else(|| default_name.to_string()),
        logo_url: team.and_then(RawTeam::logo_url),
        score: competitor
            .and_then(|c| c.score.clone())
            .map(Scalar::into_display),
    }
}
