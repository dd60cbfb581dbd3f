// # DNS Provider Trait
//
// Defines the interface for telling a dynamic-DNS provider that the
// host's address changed.
//
// ## Implementations
//
// - dyndns2-style callback URL: `ddns-provider-dyndns` crate

use async_trait::async_trait;

/// Trait for DNS provider implementations
///
/// The provider owns a fully-formed callback URL. Credentials and the target
/// hostname are part of that URL and opaque to the engine; providers detect
/// the caller's address from the connection itself.
///
/// # Contract
///
/// - **Single-shot**: exactly one request per call, no retry or backoff
/// - **Stateless**: no caching, no access to the state store
/// - **Quiet about secrets**: credentials never reach logs or error text
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Fire the update callback
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The raw response body, logged by the engine
    /// - `Err(Error)`: If the request failed or returned a non-2xx status
    async fn notify(&self) -> Result<String, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
