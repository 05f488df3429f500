use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::{
    SbpB2bPayloadResponse, SbpB2bPerformRequest, SbpB2bPerformResponse, SbpBindResponse,
    SbpBindingsResponse, SbpCheckPayoutResponse, SbpPayoutRequest, SbpPayoutResponse,
    SbpPayoutStatusResponse, SbpQrRequest, SbpQrResponse, SbpQrStatusResponse,
};

use super::{form, form_pairs, json};

/// SBP operations: C2B QR payments and bindings, B2B transfers, B2C payouts.
#[derive(Debug, Clone, Copy)]
pub struct Sbp<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Sbp<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Dynamic QR code for a registered order.
    pub async fn qr(&self, ctx: &RequestContext, request: &SbpQrRequest) -> Result<SbpQrResponse> {
        let call = form("/rest/sbp/c2b/qr/dynamic/get.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn qr_status(&self, ctx: &RequestContext, md_order: &str) -> Result<SbpQrStatusResponse> {
        let call = form_pairs("/rest/sbp/c2b/qr/status.do", &[("mdOrder", md_order)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn reject_qr(&self, ctx: &RequestContext, md_order: &str) -> Result<StandardEnvelope> {
        let call = form_pairs("/rest/sbp/c2b/qr/dynamic/reject.do", &[("mdOrder", md_order)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn bind(&self, ctx: &RequestContext, md_order: &str) -> Result<SbpBindResponse> {
        let call = form_pairs("/rest/sbp/c2b/bind.do", &[("mdOrder", md_order)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn unbind(&self, ctx: &RequestContext, binding_id: &str) -> Result<StandardEnvelope> {
        let call = form_pairs("/rest/sbp/c2b/unBind.do", &[("bindingId", binding_id)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn bindings(&self, ctx: &RequestContext, client_id: &str) -> Result<SbpBindingsResponse> {
        let call = form_pairs("/rest/sbp/c2b/getBindings.do", &[("clientId", client_id)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn b2b_payload(&self, ctx: &RequestContext, order_id: &str) -> Result<SbpB2bPayloadResponse> {
        let call = form_pairs("/rest/sbp/b2b/getPayload.do", &[("orderId", order_id)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn b2b_perform(
        &self,
        ctx: &RequestContext,
        request: &SbpB2bPerformRequest,
    ) -> Result<SbpB2bPerformResponse> {
        let call = json("/rest/sbp/b2b/perform.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn b2c_payout(&self, ctx: &RequestContext, request: &SbpPayoutRequest) -> Result<SbpPayoutResponse> {
        let call = json("/rest/sbp/b2c/performPayout.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn b2c_check_payout(&self, ctx: &RequestContext, order_id: &str) -> Result<SbpCheckPayoutResponse> {
        let call = form_pairs("/rest/sbp/b2c/checkPayout.do", &[("orderId", order_id)]);
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn b2c_payout_status(
        &self,
        ctx: &RequestContext,
        order_id: &str,
    ) -> Result<SbpPayoutStatusResponse> {
        let call = form_pairs("/rest/sbp/b2c/getPayoutStatus.do", &[("orderId", order_id)]);
        self.dispatcher.dispatch(ctx, call).await
    }
}
