use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::{AddParamsRequest, DeclineRequest, RegisterOrderRequest, RegisterOrderResponse};

use super::form;

/// Order registration and lifecycle operations.
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Registers a one-stage order. Pay it through the returned `form_url`.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        request: &RegisterOrderRequest,
    ) -> Result<RegisterOrderResponse> {
        let call = form("/rest/register.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// Registers a two-stage order; funds are held until `Payments::deposit`.
    pub async fn register_pre_auth(
        &self,
        ctx: &RequestContext,
        request: &RegisterOrderRequest,
    ) -> Result<RegisterOrderResponse> {
        let call = form("/rest/registerPreAuth.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn decline(
        &self,
        ctx: &RequestContext,
        request: &DeclineRequest,
    ) -> Result<StandardEnvelope> {
        let call = form("/rest/decline.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn add_params(
        &self,
        ctx: &RequestContext,
        request: &AddParamsRequest,
    ) -> Result<StandardEnvelope> {
        let call = form("/rest/addParams.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
