//! HTTP server configuration object and helpers.

use std::fmt;
use std::net::SocketAddr;

use outcome_service::inbound::http::state::PagingPolicy;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) paging: PagingPolicy,
    pub(crate) seed_demo_users: bool,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with default
    /// paging rules and no demo data.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            paging: PagingPolicy::default(),
            seed_demo_users: false,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Replace the page size rules applied to list endpoints.
    #[must_use]
    pub fn with_paging(mut self, paging: PagingPolicy) -> Self {
        self.paging = paging;
        self
    }

    /// Populate the in-memory store with demo users at start-up.
    #[must_use]
    pub fn with_demo_users(mut self, enabled: bool) -> Self {
        self.seed_demo_users = enabled;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Read by unit tests; the server destructures the config")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ServerConfig");
        debug
            .field("bind_addr", &self.bind_addr)
            .field("paging", &self.paging)
            .field("seed_demo_users", &self.seed_demo_users);
        #[cfg(feature = "metrics")]
        debug.field("metrics_enabled", &self.prometheus.is_some());
        debug.finish()
    }
}
