use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::{
    DepositRequest, Finish3dsRequest, InstantPaymentRequest, InstantPaymentResponse,
    PaymentFormResult, PaymentOrderBindingRequest, RecurrentPaymentRequest,
    RecurrentPaymentResponse, ReverseRequest,
};
use crate::models::payments::WithCredentials;

use super::{form, json_unauthenticated};

/// Capture, reversal and card-not-present payment operations.
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Captures funds held by a pre-authorized order.
    pub async fn deposit(&self, ctx: &RequestContext, request: &DepositRequest) -> Result<StandardEnvelope> {
        let call = form("/rest/deposit.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Releases a hold before it is captured.
    pub async fn reverse(&self, ctx: &RequestContext, request: &ReverseRequest) -> Result<StandardEnvelope> {
        let call = form("/rest/reverse.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn pay_with_binding(
        &self,
        ctx: &RequestContext,
        request: &PaymentOrderBindingRequest,
    ) -> Result<PaymentFormResult> {
        let call = form("/rest/paymentOrderBinding.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn instant(
        &self,
        ctx: &RequestContext,
        request: &InstantPaymentRequest,
    ) -> Result<InstantPaymentResponse> {
        let call = form("/rest/instantPayment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Charges a stored binding. Credentials travel in the JSON body, not in
    /// the query string.
    pub async fn recurrent(
        &self,
        ctx: &RequestContext,
        request: &RecurrentPaymentRequest,
    ) -> Result<RecurrentPaymentResponse> {
        let credentials = self.dispatcher.config().credentials();
        let body = WithCredentials {
            inner: request,
            user_name: &credentials.user_name,
            password: &credentials.password,
        };
        let call = json_unauthenticated("/recurrentPayment.do", &body)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Completes a payment after the payer returns from the ACS page.
    pub async fn finish_3ds(&self, ctx: &RequestContext, request: &Finish3dsRequest) -> Result<PaymentFormResult> {
        let call = form("/rest/finish3dsPayment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
