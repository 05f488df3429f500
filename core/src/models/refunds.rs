use crate::error::Result;
use crate::params::{FormParams, ToFormParams};

/// Refund all or part of a deposited order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundRequest {
    pub order_id: String,
    pub amount: i64,
    pub language: Option<String>,
    /// Raw JSON object passed through unchanged.
    pub json_params: Option<String>,
    /// Raw JSON cart passed through unchanged.
    pub refund_items: Option<String>,
}

impl RefundRequest {
    pub fn new(order_id: impl Into<String>, amount: i64) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            ..Default::default()
        }
    }
}

impl ToFormParams for RefundRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderId", self.order_id.as_str())
            .set("amount", self.amount.to_string())
            .set_opt("language", self.language.as_deref())
            .set_opt("jsonParams", self.json_params.as_deref())
            .set_opt("refundItems", self.refund_items.as_deref());
        Ok(p)
    }
}

/// Refund issued immediately, without the usual clearing delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantRefundRequest {
    pub order_id: String,
    pub amount: i64,
}

impl ToFormParams for InstantRefundRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderId", self.order_id.as_str())
            .set("amount", self.amount.to_string());
        Ok(p)
    }
}
