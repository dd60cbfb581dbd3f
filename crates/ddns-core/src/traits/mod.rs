//! Core traits for the DDNS updater
//!
//! This module defines the seams the engine is built on.
//!
//! - [`IpSource`]: Fetch the current public IPv4 address
//! - [`DnsProvider`]: Fire the provider's update callback
//! - [`StateStore`]: Persist the last pushed address between runs

pub mod dns_provider;
pub mod ip_source;
pub mod state_store;

pub use dns_provider::DnsProvider;
pub use ip_source::IpSource;
pub use state_store::StateStore;
