pub use client::EspnClient;
pub use error::{DashboardError, Result};
pub use espn::scoreboard::parse_scoreboard;
pub use espn::standings::parse_standings;
pub use state::{AppState, STATUS_LOADING, STATUS_MATCHES_UNAVAILABLE};

pub mod client;
pub mod dates;
pub mod error;
pub(crate) mod espn;
pub mod filter;
pub mod model;
pub mod render;
pub mod state;
