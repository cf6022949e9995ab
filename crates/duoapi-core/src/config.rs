//! Client construction and per-call settings.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{ClientBuilder, Url};

/// Maps a target URL to the proxy that should carry it, or `None` to connect
/// directly.
pub type ProxyResolver = Arc<dyn Fn(&Url) -> Option<Url> + Send + Sync>;

/// Final adjustment of the underlying `reqwest` client before it is built.
pub type TransportHook = Arc<dyn Fn(ClientBuilder) -> ClientBuilder + Send + Sync>;

/// Construction-time options for [`DuoApi`](crate::DuoApi).
///
/// | Field | Default | Notes |
/// |-------|---------|-------|
/// | `timeout` | none | applied only to calls made with [`CallOptions::use_timeout`] |
/// | `insecure` | `false` | test-only, disables certificate validation |
/// | `proxy` | none | falls back to the system/environment proxy settings |
/// | `transport` | none | runs last on the `reqwest::ClientBuilder` |
/// | `plain_http` | `false` | test-only, talks `http://` to a local mock server |
#[derive(Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub insecure: bool,
    pub proxy: Option<ProxyResolver>,
    pub transport: Option<TransportHook>,
    pub plain_http: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skips TLS certificate validation. Never use against production hosts.
    pub fn insecure(mut self) -> Self {
        self.insecure = true;
        self
    }

    pub fn with_proxy<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Url) -> Option<Url> + Send + Sync + 'static,
    {
        self.proxy = Some(Arc::new(resolver));
        self
    }

    pub fn with_transport<F>(mut self, hook: F) -> Self
    where
        F: Fn(ClientBuilder) -> ClientBuilder + Send + Sync + 'static,
    {
        self.transport = Some(Arc::new(hook));
        self
    }

    pub fn plain_http(mut self) -> Self {
        self.plain_http = true;
        self
    }

    pub(crate) const fn scheme(&self) -> &'static str {
        if self.plain_http {
            "http"
        } else {
            "https"
        }
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("insecure", &self.insecure)
            .field("proxy", &self.proxy.as_ref().map(|_| "<resolver>"))
            .field("transport", &self.transport.as_ref().map(|_| "<hook>"))
            .field("plain_http", &self.plain_http)
            .finish()
    }
}

/// Per-call settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Apply the client's configured timeout to this call.
    pub use_timeout: bool,
}

impl CallOptions {
    pub const fn timeout() -> Self {
        Self { use_timeout: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_secure_and_untimed() {
        let config = ClientConfig::default();

        assert!(config.timeout.is_none());
        assert!(!config.insecure);
        assert!(config.proxy.is_none());
        assert!(config.transport.is_none());
        assert_eq!(config.scheme(), "https");
    }

    #[test]
    fn builder_methods_set_named_fields() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(10))
            .insecure()
            .with_proxy(|_| None)
            .plain_http();

        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(config.insecure);
        assert!(config.proxy.is_some());
        assert_eq!(config.scheme(), "http");
    }

    #[test]
    fn call_options_default_to_no_timeout() {
        assert!(!CallOptions::default().use_timeout);
        assert!(CallOptions::timeout().use_timeout);
    }
}
