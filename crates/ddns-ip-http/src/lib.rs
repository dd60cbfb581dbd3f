// # HTTP IP Source
//
// This crate provides the IP fetcher for the DDNS updater.
//
// ## Purpose
//
// Asks a plain-text "what is my IP" service (e.g. icanhazip.com, ipify.org)
// for the host's public IPv4 address.
//
// ## Contract
//
// - One GET per call, no polling, no caching, no retry
// - Total timeout from configuration (default 15 seconds)
// - Redirects followed, IPv4 connections only
// - The trimmed body must be exactly one IPv4 address; anything else is a
//   validation error naming the service and the body it returned

use ddns_core::http::{HttpClient, redact_url};
use ddns_core::traits::IpSource;
use ddns_core::{DdnsConfig, Error, Ipv4Address, Result};

use std::time::Duration;

use tracing::debug;

/// HTTP-based IP source
#[derive(Debug, Clone)]
pub struct HttpIpSource {
    /// URL to fetch IP from
    url: String,

    /// HTTP client
    client: HttpClient,
}

impl HttpIpSource {
    /// Create a new HTTP IP source
    ///
    /// # Parameters
    ///
    /// - `url`: URL to fetch IP from (e.g., "https://ipv4.icanhazip.com")
    /// - `timeout`: Total time allowed for the request
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            client: HttpClient::new(timeout)?,
        })
    }

    /// Create the source described by `config`
    pub fn from_config(config: &DdnsConfig) -> Result<Self> {
        Self::new(config.check_ip_url.clone(), config.timeout())
    }

    /// Fetch current IP from HTTP service
    async fn fetch_ip(&self) -> Result<Ipv4Address> {
        let body = self.client.get_text(&self.url).await?;
        let ip_text = body.trim();

        Ipv4Address::new(ip_text).map_err(|_| Error::validation(redact_url(&self.url), ip_text))
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<Ipv4Address> {
        let ip = self.fetch_ip().await?;
        debug!("{} reports {}", redact_url(&self.url), ip);
        Ok(ip)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
