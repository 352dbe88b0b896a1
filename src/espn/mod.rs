use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DashboardError, Result};

pub(crate) mod scoreboard;
pub(crate) mod standings;

pub(crate) const SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/soccer/eng.1/scoreboard";
pub(crate) const STANDINGS_URL: &str =
    "https://site.api.espn.com/apis/v2/sports/soccer/eng.1/standings";

/// Team name to show when a standings entry carries no usable descriptor.
pub(crate) const DEFAULT_TEAM_NAME: &str = "Team";

pub(crate) async fn get_body(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DashboardError::Http {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }
    response
        .text()
        .await
        .map_err(|source| DashboardError::ResponseBody {
            url: url.to_string(),
            source,
        })
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| DashboardError::Json {
        url: url.to_string(),
        source,
    })
}

/// Deserialize a JSON array element-by-element, dropping anything that does
/// not fit. An absent, null, or wrong-typed field becomes an empty list
/// instead of failing the whole payload.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A scalar the API encodes inconsistently: sometimes a JSON number,
/// sometimes a string holding one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Num(f64),
    Text(String),
}

impl Scalar {
    pub(crate) fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Num(n) => Some(*n as i64),
            Scalar::Text(t) => {
                let t = t.trim();
                t.parse::<i64>()
                    .ok()
                    .or_else(|| t.parse::<f64>().ok().map(|n| n as i64))
            }
        }
    }

    pub(crate) fn into_display(self) -> String {
        match self {
            Scalar::Num(n) if n.fract() == 0.0 => format!("{}", n as i64),
            Scalar::Num(n) => n.to_string(),
            Scalar::Text(t) => t,
        }
    }
}

/// Optional strings follow the upstream's falsiness rule: empty means absent,
/// so fallback chains skip past `""` instead of rendering it.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Team descriptor shared by scoreboard competitors and standings entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTeam {
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub logos: Vec<RawLogo>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLogo {
    pub href: Option<String>,
}

impl RawTeam {
    /// Scoreboard logo: direct `logo` field first, then the logo list.
    pub(crate) fn logo_url(&self) -> Option<String> {
        non_empty(self.logo.clone()).or_else(|| self.first_logo_href())
    }

    /// First usable URL in the `logos` list. Standings entries carry no
    /// direct `logo` field, so their accessor stops here.
    pub(crate) fn first_logo_href(&self) -> Option<String> {
        non_empty(self.logos.first().and_then(|logo| logo.href.clone()))
    }
}
