use serde::Serialize;

/// One team's row in the league table, normalized from a standings entry.
///
/// Every numeric field is always present: missing or string-encoded source
/// stats are coerced during normalization and default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub rank: i64,
    pub team: String,
    pub logo_url: Option<String>,
    pub played: i64,
    pub won: i64,
    pub drawn: i64,
    pub lost: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
}
