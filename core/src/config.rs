//! Client configuration and construction options.
//!
//! # Design
//! `GatewayConfig` is assembled once by `ClientBuilder` and frozen inside the
//! client; nothing mutates it afterwards. Option hooks (base URL, timeout,
//! transport) only exist on the builder.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::client::GatewayClient;
use crate::error::{ApiError, Result};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Sandbox (UAT) gateway address. Production use must override it.
pub const DEFAULT_BASE_URL: &str = "https://alfa.rbsuat.com/payment";

/// Default per-request timeout of the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Merchant API login and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable settings shared by every service of a client.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl GatewayConfig {
    /// Base address without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for `GatewayClient`.
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Reads `ALFAPAY_USERNAME` and `ALFAPAY_PASSWORD` (required) plus
    /// `ALFAPAY_BASE_URL` and `ALFAPAY_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self> {
        let user_name = required_var("ALFAPAY_USERNAME")?;
        let password = required_var("ALFAPAY_PASSWORD")?;
        let mut builder = Self::new(Credentials::new(user_name, password));

        if let Ok(base_url) = env::var("ALFAPAY_BASE_URL") {
            builder = builder.base_url(base_url);
        }
        if let Ok(raw) = env::var("ALFAPAY_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::Configuration(format!("ALFAPAY_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Timeout for the built-in transport. Ignored when a custom transport
    /// is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<GatewayClient> {
        let base_url = normalize_base_url(&self.base_url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };
        let config = GatewayConfig {
            base_url,
            credentials: self.credentials,
            timeout: self.timeout,
        };
        Ok(GatewayClient::from_parts(config, transport))
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| ApiError::Configuration(format!("{name} environment variable is required")))
}

/// Validates `raw` as an absolute http(s) URL and strips trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ApiError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Configuration(format!(
            "base URL must use http or https, got {:?}",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::Configuration(format!(
            "base URL must not carry a query or fragment: {raw:?}"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            normalize_base_url("https://pay.example.com/payment//").unwrap(),
            "https://pay.example.com/payment"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:3000/").unwrap(),
            "http://127.0.0.1:3000"
        );
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            normalize_base_url("/payment"),
            Err(ApiError::Configuration(_))
        ));
        assert!(matches!(
            normalize_base_url("ftp://pay.example.com"),
            Err(ApiError::Configuration(_))
        ));
        assert!(matches!(
            normalize_base_url("https://pay.example.com/payment?x=1"),
            Err(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn builder_defaults_to_sandbox() {
        let client = ClientBuilder::new(Credentials::new("merchant-api", "secret"))
            .build()
            .unwrap();
        assert_eq!(client.config().base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.config().timeout(), DEFAULT_TIMEOUT);
        assert_eq!(client.config().credentials().user_name, "merchant-api");
    }

    #[test]
    fn builder_applies_overrides() {
        let client = ClientBuilder::new(Credentials::new("merchant-api", "secret"))
            .base_url("https://pay.alfabank.ru/payment/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.config().base_url(), "https://pay.alfabank.ru/payment");
        assert_eq!(client.config().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("merchant-api", "hunter2"));
        assert!(rendered.contains("merchant-api"));
        assert!(!rendered.contains("hunter2"));
    }
}
