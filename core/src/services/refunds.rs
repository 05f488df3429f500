use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::{InstantRefundRequest, RefundRequest};

use super::form;

#[derive(Debug, Clone, Copy)]
pub struct Refunds<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn refund(&self, ctx: &RequestContext, request: &RefundRequest) -> Result<StandardEnvelope> {
        let call = form("/rest/refund.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn instant_refund(
        &self,
        ctx: &RequestContext,
        order_id: &str,
        amount: i64,
    ) -> Result<StandardEnvelope> {
        let request = InstantRefundRequest {
            order_id: order_id.to_string(),
            amount,
        };
        let call = form("/rest/instantRefund.do", &request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
