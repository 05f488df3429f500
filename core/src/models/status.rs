//! Order status, merchant order listing and 3-D Secure enrollment records.

use serde::{Deserialize, Serialize};

use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::common::{CartItem, OrderAddendum, OrderStatus};
use crate::params::{FormParams, ToFormParams};

/// Look up an order by gateway id or merchant order number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOrderStatusRequest {
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    pub language: Option<String>,
    pub merchant_login: Option<String>,
}

impl GetOrderStatusRequest {
    pub fn by_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Default::default()
        }
    }

    pub fn by_order_number(order_number: impl Into<String>) -> Self {
        Self {
            order_number: Some(order_number.into()),
            ..Default::default()
        }
    }
}

impl ToFormParams for GetOrderStatusRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set_opt("orderId", self.order_id.as_deref())
            .set_opt("orderNumber", self.order_number.as_deref())
            .set_opt("language", self.language.as_deref())
            .set_opt("merchantLogin", self.merchant_login.as_deref());
        Ok(p)
    }
}

/// Full order state as reported by `getOrderStatusExtended.do`.
///
/// Timestamps are milliseconds since the Unix epoch; amounts are in minor
/// units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderStatusExtended {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_number: String,
    /// Absent on error responses.
    pub order_status: Option<OrderStatus>,
    pub action_code: i64,
    pub action_code_description: String,
    pub amount: i64,
    pub currency: String,
    pub date: i64,
    pub order_description: String,
    pub ip: String,
    pub auth_date_time: i64,
    pub auth_ref_num: String,
    pub terminal_id: String,
    pub deposited_date: i64,
    pub refunded_date: i64,
    pub reversed_date: i64,
    pub payment_way: String,
    pub chargeback: bool,
    pub card_auth_info: Option<CardAuthInfo>,
    pub binding_info: Option<CardBindingInfo>,
    pub payment_amount_info: Option<PaymentAmountInfo>,
    pub bank_info: Option<BankInfo>,
    pub payer_data: Option<PayerData>,
    pub refunds: Vec<Refund>,
    pub merchant_order_params: Vec<OrderAddendum>,
    pub attributes: Vec<OrderAddendum>,
    pub transaction_attributes: Vec<OrderAddendum>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardAuthInfo {
    pub masked_pan: String,
    /// `YYYYMM`
    pub expiration: String,
    pub cardholder_name: String,
    pub approval_code: String,
    pub pan: String,
    pub secure_auth_info: Option<SecureAuthInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecureAuthInfo {
    pub eci: i64,
    #[serde(rename = "threeDSInfo")]
    pub three_ds_info: Option<ThreeDsInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeDsInfo {
    pub xid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardBindingInfo {
    pub binding_id: String,
    pub client_id: String,
    pub auth_date_time: String,
    pub terminal_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentAmountInfo {
    pub approved_amount: i64,
    pub deposited_amount: i64,
    pub refunded_amount: i64,
    pub payment_state: String,
    pub fee_amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankInfo {
    pub bank_name: String,
    pub bank_country_code: String,
    pub bank_country_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayerData {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Refund {
    pub refund_id: String,
    pub refund_date: i64,
    pub refund_amount: i64,
    pub refund_items: Vec<CartItem>,
}

/// Page through a merchant's orders in a date window.
///
/// Dates use the `yyyyMMddHHmmss` format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastOrdersRequest {
    pub from: String,
    pub to: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Comma-separated states, e.g. `DEPOSITED,REFUNDED`.
    pub transaction_states: Option<String>,
    /// Comma-separated merchant logins.
    pub merchants: Option<String>,
    pub language: Option<String>,
}

impl ToFormParams for LastOrdersRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("from", self.from.as_str())
            .set("to", self.to.as_str())
            .set_positive("page", self.page)
            .set_positive("size", self.size)
            .set_opt("transactionStates", self.transaction_states.as_deref())
            .set_opt("merchants", self.merchants.as_deref())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LastOrdersResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    #[serde(rename = "orderStatuses")]
    pub orders: Vec<OrderStatusExtended>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyEnrollmentRequest {
    pub pan: String,
    pub language: Option<String>,
}

impl ToFormParams for VerifyEnrollmentRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("pan", self.pan.as_str())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifyEnrollmentResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    /// `Y`, `N` or `U`.
    pub enrolled: String,
    pub emitter_name: String,
    pub emitter_country_code: String,
}
