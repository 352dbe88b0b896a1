use tracing::warn;

use crate::client::EspnClient;
use crate::dates;
use crate::error::Result;
use crate::model::{MatchEvent, StandingsRow};
use crate::render::{render_match_cards, render_table_rows};

pub const STATUS_LOADING: &str = "Loading live data...";
pub const STATUS_MATCHES_UNAVAILABLE: &str = "Live feed unavailable right now. Please try refresh.";

/// Process-wide dashboard state.
///
/// All mutation goes through the update methods below, each atomic from the
/// perspective of the single-threaded scheduler: a fetch completion replaces
/// a collection wholesale or clears it, never partially. Rendering reads
/// whatever was applied last, so overlapping loads resolve as last response
/// wins.
#[derive(Debug, Default)]
pub struct AppState {
    pub selected_offset: i64,
    pub matches: Vec<MatchEvent>,
    pub standings: Vec<StandingsRow>,
    pub search: String,
    pub status: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the search box contents, trimmed and lowercased. Never cleared
    /// automatically.
    pub fn set_query(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    pub fn set_offset(&mut self, offset: i64) {
        self.selected_offset = offset;
    }

    pub fn replace_matches(&mut self, matches: Vec<MatchEvent>) {
        self.matches = matches;
    }

    pub fn replace_standings(&mut self, standings: Vec<StandingsRow>) {
        self.standings = standings;
    }

    /// Apply a completed match fetch. Failure clears the list and swaps in a
    /// distinct status message; the error never propagates further.
    pub fn apply_matches(&mut self, result: Result<Vec<MatchEvent>>) {
        match result {
            Ok(matches) => {
                self.replace_matches(matches);
                self.status = format!(
                    "Live data source: ESPN \u{2022} {}",
                    dates::header_label(self.selected_offset)
                );
            }
            Err(err) => {
                warn!(error = %err, "match fetch failed");
                self.replace_matches(Vec::new());
                self.status = STATUS_MATCHES_UNAVAILABLE.to_string();
            }
        }
    }

    /// Apply a completed standings fetch. Failure clears the table silently,
    /// leaving whatever status message is already showing.
    pub fn apply_standings(&mut self, result: Result<Vec<StandingsRow>>) {
        match result {
            Ok(standings) => self.replace_standings(standings),
            Err(err) => {
                warn!(error = %err, "standings fetch failed");
                self.replace_standings(Vec::new());
            }
        }
    }

    /// Fetch matches and standings concurrently and apply both results.
    ///
    /// Each fetch absorbs its own failure, so this completes once both
    /// finish and never returns an error.
    pub async fn load_all(&mut self, client: &EspnClient) {
        self.status = STATUS_LOADING.to_string();
        let (matches, standings) = tokio::join!(
            client.get_scoreboard(self.selected_offset),
            client.get_standings(),
        );
        self.apply_matches(matches);
        self.apply_standings(standings);
    }

    /// Fetch only the scoreboard for the selected offset (date-tab change).
    pub async fn load_matches(&mut self, client: &EspnClient) {
        let result = client.get_scoreboard(self.selected_offset).await;
        self.apply_matches(result);
    }

    /// Render the match cards for the current filter.
    pub fn render_matches(&self) -> String {
        render_match_cards(&self.matches, &self.search)
    }

    /// Render the standings table body for the current filter.
    pub fn render_table(&self) -> String {
        render_table_rows(&self.standings, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::model::{StatusState, TeamSide};

    fn sample_match(name: &str) -> MatchEvent {
        MatchEvent {
            name: name.to_string(),
            venue_name: "Anfield".to_string(),
            status_state: StatusState::Pre,
            status_label: "Scheduled".to_string(),
            home: TeamSide {
                name: "Liverpool".to_string(),
                logo_url: None,
                score: None,
            },
            away: TeamSide {
                name: "Everton".to_string(),
                logo_url: None,
                score: None,
            },
        }
    }

    fn json_error() -> DashboardError {
        DashboardError::Json {
            url: "http://test".to_string(),
            source: serde_json::from_str::<i64>("x").unwrap_err(),
        }
    }

    #[test]
    fn set_query_trims_and_lowercases() {
        let mut state = AppState::new();
        state.set_query("  ArSeNaL  ");
        assert_eq!(state.search, "arsenal");
    }

    #[test]
    fn apply_matches_failure_clears_and_sets_distinct_status() {
        let mut state = AppState::new();
        state.replace_matches(vec![sample_match("Everton at Liverpool")]);
        state.status = STATUS_LOADING.to_string();

        state.apply_matches(Err(json_error()));

        assert!(state.matches.is_empty());
        assert_eq!(state.status, STATUS_MATCHES_UNAVAILABLE);
        assert_ne!(state.status, STATUS_LOADING);
    }

    #[test]
    fn apply_matches_success_replaces_wholesale() {
        let mut state = AppState::new();
        state.replace_matches(vec![sample_match("old")]);
        state.apply_matches(Ok(vec![
            sample_match("new one"),
            sample_match("new two"),
        ]));
        assert_eq!(state.matches.len(), 2);
        assert_eq!(state.matches[0].name, "new one");
        assert!(state.status.starts_with("Live data source: ESPN"));
    }

    #[test]
    fn apply_standings_failure_clears_silently() {
        let mut state = AppState::new();
        state.status = "existing message".to_string();
        state.replace_standings(
            crate::espn::standings::parse_standings(
                r#"{"children": [{"standings": {"entries": [{"team": {"displayName": "A"}}]}}]}"#,
            )
            .unwrap(),
        );
        assert_eq!(state.standings.len(), 1);

        state.apply_standings(Err(json_error()));

        assert!(state.standings.is_empty());
        assert_eq!(state.status, "existing message");
        // The empty table still renders a placeholder row.
        assert!(state.render_table().contains("No table rows found."));
    }

    #[test]
    fn render_reads_latest_applied_state() {
        let mut state = AppState::new();
        state.apply_matches(Ok(vec![sample_match("Everton at Liverpool")]));
        state.set_query("everton");
        assert!(state.render_matches().contains("Anfield"));

        state.set_query("chelsea");
        assert!(state.render_matches().contains("No matches found"));

        // Clearing the query restores the full list without re-fetching.
        state.set_query("");
        assert!(state.render_matches().contains("Anfield"));
    }
}
