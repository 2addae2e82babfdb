//! Shared construction of the outbound HTTP client.

use std::time::Duration;

/// Requests that outlive this bound count as failed; the caller substitutes
/// static data instead of waiting on a dead connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the `reqwest::Client` used for all outbound requests.
///
/// Advertises a `folio/<version>` User-Agent; GitHub rejects requests without
/// one.
pub fn create_client() -> reqwest::Client {
    let user_agent = format!("folio/{}", env!("CARGO_PKG_VERSION"));
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(REQUEST_TIMEOUT)
        .build()
        // Builder errors only arise from TLS/proxy misconfiguration; fall
        // back to the stock client in that case.
        .unwrap_or_default()
}
