//! Gateway client: configuration, transport and the service façades.
//!
//! # Design
//! `GatewayClient` is built once (`ClientBuilder`) and is immutable
//! afterwards. It owns a `Dispatcher` behind an `Arc`, so cloning the client
//! is cheap and clones share the same connection pool. Service accessors
//! borrow the dispatcher; they carry no state of their own.

use std::sync::Arc;

use crate::config::{ClientBuilder, Credentials, GatewayConfig};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::services::{
    ApplePay, Bindings, GooglePay, MirPay, Orders, Payments, Refunds, SamsungPay, Sbp, Status,
    YandexPay,
};
use crate::transport::HttpTransport;

/// Entry point for every gateway operation.
///
/// # Example
/// ```no_run
/// use alfapay_core::{Credentials, GatewayClient, RequestContext};
/// use alfapay_core::models::RegisterOrderRequest;
///
/// # async fn run() -> alfapay_core::Result<()> {
/// let client = GatewayClient::builder(Credentials::new("merchant-api", "secret"))
///     .base_url("https://pay.alfabank.ru/payment")
///     .build()?;
/// let order = client
///     .orders()
///     .register(
///         &RequestContext::background(),
///         &RegisterOrderRequest::new("ORDER-1", 100000, "https://shop.example/ok"),
///     )
///     .await?;
/// if order.envelope.is_success() {
///     println!("pay at {}", order.form_url);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GatewayClient {
    dispatcher: Arc<Dispatcher>,
}

impl GatewayClient {
    /// Client with default base URL, timeout and transport.
    pub fn new(credentials: Credentials) -> Result<Self> {
        ClientBuilder::new(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    pub(crate) fn from_parts(config: GatewayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(config, transport)),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        self.dispatcher.config()
    }

    /// Low-level access for endpoints without a typed wrapper.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(&self.dispatcher)
    }

    pub fn status(&self) -> Status<'_> {
        Status::new(&self.dispatcher)
    }

    pub fn bindings(&self) -> Bindings<'_> {
        Bindings::new(&self.dispatcher)
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(&self.dispatcher)
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(&self.dispatcher)
    }

    pub fn sbp(&self) -> Sbp<'_> {
        Sbp::new(&self.dispatcher)
    }

    pub fn apple_pay(&self) -> ApplePay<'_> {
        ApplePay::new(&self.dispatcher)
    }

    pub fn google_pay(&self) -> GooglePay<'_> {
        GooglePay::new(&self.dispatcher)
    }

    pub fn samsung_pay(&self) -> SamsungPay<'_> {
        SamsungPay::new(&self.dispatcher)
    }

    pub fn mir_pay(&self) -> MirPay<'_> {
        MirPay::new(&self.dispatcher)
    }

    pub fn yandex_pay(&self) -> YandexPay<'_> {
        YandexPay::new(&self.dispatcher)
    }
}
