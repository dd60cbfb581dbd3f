// # ddns-core
//
// Core library for the run-once DDNS updater.
//
// ## Architecture Overview
//
// One invocation of the updater executes a single linear pipeline:
// - **IpSource**: Fetches the current public IPv4 address
// - **StateStore**: Holds the last address that was pushed to the provider
// - **DnsProvider**: Fires the provider's update callback
// - **DdnsEngine**: Orchestrates fetch → compare → notify → persist
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from the HTTP plugins
// 2. **Run-Once**: No background tasks, no polling loop; the scheduler owns timing
// 3. **Typed Failures**: Every fatal condition is an `Error`; only the binary exits
// 4. **Library-First**: The whole pipeline is usable (and testable) as a library
// 5. **Idempotency**: The cache record prevents repeated provider calls

pub mod address;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod state;
pub mod traits;

// Re-export core types for convenience
pub use address::Ipv4Address;
pub use config::DdnsConfig;
pub use engine::{DdnsEngine, RunOutcome};
pub use error::{Error, Result};
pub use state::{FileStateStore, MemoryStateStore};
pub use traits::{DnsProvider, IpSource, StateStore};
