//! Request dispatcher: one logical call in, one classified outcome out.
//!
//! # Design
//! A call is described by a `Dispatch` value: method, endpoint path, query
//! parameters, optional JSON body and an `AuthMode`. `Dispatcher` turns it
//! into an `HttpRequest` (`build_request`), hands that to the transport, and
//! classifies the `HttpResponse` (`classify` then `decode`). The build and
//! classify halves are pure so the wire format and the error contract can
//! be tested without a network.
//!
//! Classification rules:
//! - status >= 400 is `ApiError::Gateway` with the raw body; no decoding is
//!   attempted.
//! - status < 400 with an empty body decodes to `T::default()`.
//! - otherwise the body is decoded as JSON into `T`; failure is
//!   `ApiError::Deserialization`.
//!
//! There is no retry here. Every dispatch is exactly one round-trip.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::context::RequestContext;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::FormParams;
use crate::transport::HttpTransport;

/// How credentials reach the gateway for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `userName` and `password` are appended to the query string.
    Query,
    /// Nothing is injected; the body carries credentials or the endpoint
    /// needs none (wallet tokens, recurrent payments).
    BodyOrNone,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Query => f.write_str("query"),
            AuthMode::BodyOrNone => f.write_str("body-or-none"),
        }
    }
}

/// A single logical call, ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    method: HttpMethod,
    path: String,
    query: FormParams,
    body: Option<Vec<u8>>,
    auth: AuthMode,
}

impl Dispatch {
    /// Query-authenticated call with no parameters and no body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: FormParams::new(),
            body: None,
            auth: AuthMode::Query,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn query(mut self, params: FormParams) -> Self {
        self.query = params;
        self
    }

    /// Serializes `body` as the JSON payload. Fails before any I/O.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let encoded = serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    pub fn auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth
    }
}

/// Executes `Dispatch` values against the configured gateway.
///
/// Holds no mutable state; concurrent dispatches through one instance are
/// independent.
#[derive(Clone)]
pub struct Dispatcher {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(config: GatewayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Produces the outbound request for `call` without sending it.
    pub fn build_request(&self, call: &Dispatch) -> HttpRequest {
        let mut query = call.query.clone();
        if call.auth == AuthMode::Query {
            let credentials = self.config.credentials();
            query.set("userName", credentials.user_name.as_str());
            query.set("password", credentials.password.as_str());
        }

        let mut url = format!("{}{}", self.config.base_url(), call.path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if call.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        HttpRequest {
            method: call.method,
            url,
            headers,
            body: call.body.clone(),
        }
    }

    /// Sends `call` and decodes the response body into `T`.
    pub async fn dispatch<T>(&self, ctx: &RequestContext, call: Dispatch) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.execute(ctx, &call).await?;
        decode(&body)
    }

    /// Sends `call` and discards any response body.
    pub async fn dispatch_discard(&self, ctx: &RequestContext, call: Dispatch) -> Result<()> {
        self.execute(ctx, &call).await.map(drop)
    }

    async fn execute(&self, ctx: &RequestContext, call: &Dispatch) -> Result<Vec<u8>> {
        let request = self.build_request(call);
        debug!(
            method = %request.method,
            path = %call.path,
            auth = %call.auth,
            has_body = request.body.is_some(),
            "dispatching gateway request"
        );

        let response = ctx
            .run(async { self.transport.send(request).await.map_err(ApiError::from) })
            .await?;

        debug!(path = %call.path, status = response.status, "gateway responded");
        classify(response)
    }
}

/// Splits responses into gateway errors and success bodies.
pub fn classify(response: HttpResponse) -> Result<Vec<u8>> {
    if response.status >= 400 {
        return Err(ApiError::Gateway {
            status: response.status,
            body: response.body,
        });
    }
    Ok(response.body)
}

/// Decodes a success body; an empty body yields `T::default()`.
pub fn decode<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
