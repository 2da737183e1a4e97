//! HTTP utilities for NBA stats API communication

use crate::Result;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};

/// Environment variable that overrides the browser user agent we present.
pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Build the header set stats.nba.com expects from a browser.
///
/// Requests without a browser-like `User-Agent`, `Referer` and the
/// `x-nba-stats-*` pair tend to hang until the client timeout fires.
pub fn stats_header_map() -> Result<HeaderMap> {
    let agent = std::env::var(USER_AGENT_ENV_VAR).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    stats_header_map_with_agent(&agent)
}

pub fn stats_header_map_with_agent(agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h.insert(USER_AGENT, HeaderValue::from_str(agent)?);
    Ok(h)
}
