use crate::context::RequestContext;
use crate::dispatch::Dispatcher;
use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::{
    BindingRequest, BindingsByCardOrIdRequest, BindingsResponse, ExtendBindingRequest,
    GetBindingsRequest,
};

use super::form;

/// Stored-card binding management.
#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Bindings<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Active bindings of a client.
    pub async fn list(&self, ctx: &RequestContext, request: &GetBindingsRequest) -> Result<BindingsResponse> {
        let call = form("/rest/getBindings.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    /// All bindings of a client, across merchants of the same group.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        request: &GetBindingsRequest,
    ) -> Result<BindingsResponse> {
        let call = form("/rest/getAllBindings.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn activate(&self, ctx: &RequestContext, request: &BindingRequest) -> Result<StandardEnvelope> {
        let call = form("/rest/bindCard.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn deactivate(&self, ctx: &RequestContext, request: &BindingRequest) -> Result<StandardEnvelope> {
        let call = form("/rest/unBindCard.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn extend(
        &self,
        ctx: &RequestContext,
        request: &ExtendBindingRequest,
    ) -> Result<StandardEnvelope> {
        let call = form("/rest/extendBinding.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }

    pub async fn by_card_or_id(
        &self,
        ctx: &RequestContext,
        request: &BindingsByCardOrIdRequest,
    ) -> Result<BindingsResponse> {
        let call = form("/rest/getBindingsByCardOrId.do", request)?;
        self.dispatcher.dispatch(ctx, call).await
    }
}
