//! Typed async client for the Alfa Payments gateway REST API.
//!
//! # Overview
//! Request records are marshalled into one of the gateway's two calling
//! conventions (form parameters in the query string, or a JSON body),
//! credentials are attached the way each endpoint expects, and the JSON
//! response is decoded into a typed record. Failures are classified into a
//! single `ApiError`.
//!
//! # Design
//! - Building requests and classifying responses are pure functions over
//!   plain `HttpRequest` / `HttpResponse` values (`dispatch`). Only the
//!   `HttpTransport` does I/O, and it can be swapped at build time.
//! - `GatewayClient` is immutable after construction; services borrow it.
//! - Business outcomes (`errorCode`, `success: false`) are returned inside
//!   the decoded envelope, never as `ApiError`.
//! - No retries. Each call is exactly one round-trip.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod params;
pub mod services;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::GatewayClient;
pub use config::{ClientBuilder, Credentials, GatewayConfig};
pub use context::RequestContext;
pub use dispatch::{AuthMode, Dispatch, Dispatcher};
pub use envelope::{StandardEnvelope, SuccessEnvelope, WalletError};
pub use error::{ApiError, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{FormParams, ToFormParams};
pub use transport::{HttpTransport, ReqwestTransport};
