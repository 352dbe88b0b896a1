/// All errors that can occur while fetching dashboard data from ESPN.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not the JSON shape we expected.
    #[error("failed to decode JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
