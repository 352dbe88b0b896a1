use tracing::instrument;

use crate::dates;
use crate::error::Result;
use crate::espn;
use crate::model::{MatchEvent, StandingsRow};

/// The main entry point for fetching ESPN league data.
///
/// `EspnClient` wraps a [`reqwest::Client`] and exposes methods to fetch the
/// day's fixtures and the current standings table, already normalized into
/// the crate's domain models.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> espn_dashboard::Result<()> {
/// use espn_dashboard::EspnClient;
///
/// let client = EspnClient::new();
/// let matches = client.get_scoreboard(0).await?;
/// println!("Found {} fixtures today", matches.len());
/// # Ok(())
/// # }
/// ```
pub struct EspnClient {
    http: reqwest::Client,
}

impl EspnClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch the scoreboard for the local date `offset` days from today.
    #[instrument(skip(self))]
    pub async fn get_scoreboard(&self, offset: i64) -> Result<Vec<MatchEvent>> {
        let date_key = dates::date_key(offset);
        espn::scoreboard::get_scoreboard(&self.http, &date_key).await
    }

    /// Fetch the current league table.
    #[instrument(skip(self))]
    pub async fn get_standings(&self) -> Result<Vec<StandingsRow>> {
        espn::standings::get_standings(&self.http).await
    }
}

impl Default for EspnClient {
    fn default() -> Self {
        Self::new()
    }
}
