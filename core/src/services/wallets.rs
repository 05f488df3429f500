//! Wallet payment façades. All calls are JSON POSTs without query
//! credentials.

use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::models::{
    ApplePayPaymentRequest, GooglePayPaymentRequest, MirPayPaymentRequest, MirPayResponse,
    SamsungPayPaymentRequest, WalletPaymentResponse, YandexPayPaymentRequest, YandexPayResponse,
};

use super::json_unauthenticated;

#[derive(Debug, Clone, Copy)]
pub struct ApplePay<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> ApplePay<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn payment(
        &self,
        ctx: &RequestContext,
        request: &ApplePayPaymentRequest,
    ) -> Result<WalletPaymentResponse> {
        let call = json_unauthenticated("/applepay/payment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GooglePay<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> GooglePay<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn payment(
        &self,
        ctx: &RequestContext,
        request: &GooglePayPaymentRequest,
    ) -> Result<WalletPaymentResponse> {
        let call = json_unauthenticated("/google/payment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SamsungPay<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> SamsungPay<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn payment(
        &self,
        ctx: &RequestContext,
        request: &SamsungPayPaymentRequest,
    ) -> Result<WalletPaymentResponse> {
        let call = json_unauthenticated("/samsung/payment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Pays without a previously registered order.
    pub async fn direct_payment(
        &self,
        ctx: &RequestContext,
        request: &SamsungPayPaymentRequest,
    ) -> Result<WalletPaymentResponse> {
        let call = json_unauthenticated("/samsung/paymentDirect.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MirPay<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MirPay<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn payment(&self, ctx: &RequestContext, request: &MirPayPaymentRequest) -> Result<MirPayResponse> {
        let call = json_unauthenticated("/mir/payment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn direct_payment(
        &self,
        ctx: &RequestContext,
        request: &MirPayPaymentRequest,
    ) -> Result<MirPayResponse> {
        let call = json_unauthenticated("/mir/paymentDirect.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct YandexPay<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> YandexPay<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn payment(
        &self,
        ctx: &RequestContext,
        request: &YandexPayPaymentRequest,
    ) -> Result<YandexPayResponse> {
        let call = json_unauthenticated("/yandex/payment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn direct_payment(
        &self,
        ctx: &RequestContext,
        request: &YandexPayPaymentRequest,
    ) -> Result<YandexPayResponse> {
        let call = json_unauthenticated("/yandex/paymentDirect.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Registers and pays the order in one call.
    pub async fn instant_payment(
        &self,
        ctx: &RequestContext,
        request: &YandexPayPaymentRequest,
    ) -> Result<YandexPayResponse> {
        let call = json_unauthenticated("/yandex/instantPayment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
