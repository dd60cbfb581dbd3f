// # Memory State Store
//
// In-memory implementation of StateStore.
//
// ## Purpose
//
// Holds the cached address for the lifetime of the value only. Useful for
// testing and for embedding the engine where the caller keeps its own state.
//
// ## Crash Behavior
//
// - All state is lost when the process exits
// - The next run treats the address as new (will notify the provider)

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::address::Ipv4Address;
use crate::error::Error;
use crate::traits::state_store::StateStore;

/// In-memory state store implementation
///
/// Clones share the same slot, so a test can keep a handle while the engine
/// owns another.
///
/// # Example
///
/// ```rust,no_run
/// use ddns_core::state::MemoryStateStore;
/// use ddns_core::traits::StateStore;
/// use ddns_core::Ipv4Address;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryStateStore::new();
///     store.save(&Ipv4Address::new("1.2.3.4")?).await?;
///     assert_eq!(store.load().await?, Some(Ipv4Address::new("1.2.3.4")?));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    inner: Arc<RwLock<Option<Ipv4Address>>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStateStore {
    /// Create a new empty memory state store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `address`
    pub fn with_address(address: Ipv4Address) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(address))),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of successful `save` calls across all clones
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self) -> Result<Option<Ipv4Address>, Error> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, address: &Ipv4Address) -> Result<(), Error> {
        *self.inner.write().await = Some(address.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
