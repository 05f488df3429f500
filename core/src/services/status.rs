use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::models::{
    GetOrderStatusRequest, LastOrdersRequest, LastOrdersResponse, OrderStatusExtended,
    VerifyEnrollmentRequest, VerifyEnrollmentResponse,
};

use super::form;

const ORDER_STATUS_EXTENDED: &str = "/rest/getOrderStatusExtended.do";

/// Order status queries.
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Status<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn extended(
        &self,
        ctx: &RequestContext,
        request: &GetOrderStatusRequest,
    ) -> Result<OrderStatusExtended> {
        let call = form(ORDER_STATUS_EXTENDED, request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn by_order_id(&self, ctx: &RequestContext, order_id: &str) -> Result<OrderStatusExtended> {
        self.extended(ctx, &GetOrderStatusRequest::by_order_id(order_id)).await
    }

    pub async fn by_order_number(
        &self,
        ctx: &RequestContext,
        order_number: &str,
    ) -> Result<OrderStatusExtended> {
        self.extended(ctx, &GetOrderStatusRequest::by_order_number(order_number))
            .await
    }

    pub async fn last_orders(
        &self,
        ctx: &RequestContext,
        request: &LastOrdersRequest,
    ) -> Result<LastOrdersResponse> {
        let call = form("/rest/getLastOrdersForMerchants.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Checks whether a card is enrolled in 3-D Secure.
    pub async fn verify_enrollment(
        &self,
        ctx: &RequestContext,
        request: &VerifyEnrollmentRequest,
    ) -> Result<VerifyEnrollmentResponse> {
        let call = form("/rest/verifyEnrollment.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
