// # IP Source Trait
//
// Defines the interface for discovering the host's public IPv4 address.
//
// ## Implementations
//
// - HTTP check service: `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//     let current = source.current().await?;
//     println!("public address: {}", current);
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::address::Ipv4Address;

/// Trait for IP source implementations
///
/// # Contract
///
/// - One lookup per call. No caching, no retries, no background tasks.
/// - A reply that is not a syntactically valid IPv4 address is an
///   [`Error::Validation`](crate::Error::Validation), never a silent fallback.
/// - Network failures and timeouts are
///   [`Error::Transport`](crate::Error::Transport).
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public IPv4 address
    ///
    /// # Returns
    ///
    /// - `Ok(Ipv4Address)`: The validated address
    /// - `Err(Error)`: If the address could not be determined
    async fn current(&self) -> Result<Ipv4Address, crate::Error>;

    /// Short name of the source (for logging)
    fn source_name(&self) -> &'static str;
}
