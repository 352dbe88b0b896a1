use serde::Serialize;

/// Phase of play, as reported by the scoreboard status object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusState {
    Pre,
    In,
    Post,
}

impl StatusState {
    /// Classify the wire-level `status.type.state` string.
    ///
    /// Anything unrecognised is treated as not-yet-started.
    pub fn classify(state: &str) -> Self {
        match state {
            "in" => StatusState::In,
            "post" => StatusState::Post,
            _ => StatusState::Pre,
        }
    }

    /// Whether the match is currently being played (drives live badge styling).
    pub fn is_live(self) -> bool {
        self == StatusState::In
    }
}

/// One side (home or away) of a match, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSide {
    pub name: String,
    pub logo_url: Option<String>,
    /// ESPN sends scores as strings; absent before kickoff.
    pub score: Option<String>,
}

/// A single fixture normalized from a raw scoreboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    /// Event display name, e.g. `"Arsenal at Fulham"`; what the filter matches on.
    pub name: String,
    pub venue_name: String,
    pub status_state: StatusState,
    /// Display text for the current phase, e.g. `"FT"` or `"Scheduled"`.
    pub status_label: String,
    pub home: TeamSide,
    pub away: TeamSide,
}
