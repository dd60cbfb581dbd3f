// # State Store Trait
//
// Defines the interface for remembering the last address pushed to the
// provider between runs.
//
// ## Implementations
//
// - File-based: one line holding the address (`state::file`)
// - In-memory: engine tests and embedding callers that keep state
//   themselves (`state::memory`)

use async_trait::async_trait;

use crate::address::Ipv4Address;

/// Trait for state store implementations
///
/// # Malformed State
///
/// A store that holds anything other than exactly one valid address reports
/// `Ok(None)` from [`load`](StateStore::load). First runs and corrupted state
/// are indistinguishable on purpose: both lead to a provider update followed
/// by a clean [`save`](StateStore::save).
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Get the last stored address
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Ipv4Address))`: A valid address is stored
    /// - `Ok(None)`: Nothing usable is stored
    /// - `Err(Error)`: The backing storage itself failed
    async fn load(&self) -> Result<Option<Ipv4Address>, crate::Error>;

    /// Replace the stored address
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Successfully persisted
    /// - `Err(Error)`: Storage error
    async fn save(&self, address: &Ipv4Address) -> Result<(), crate::Error>;
}
