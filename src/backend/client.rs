//! Outbound HTTP client shared by the probe and the forwarder.

use std::error::Error as StdError;

/// User agent sent on every backend call.
pub const USER_AGENT: &str = concat!("highlight-gateway/", env!("CARGO_PKG_VERSION"));

/// Build the outbound client.
///
/// Idle connections are not pooled: each request opens its own connection and
/// releases it when the response (or error) is dropped.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(0)
        .build()
}

/// Human-readable description of an error including its sources.
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
