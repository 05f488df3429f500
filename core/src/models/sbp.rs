//! SBP (Faster Payments System) records: C2B QR payments and bindings, B2B
//! payments and B2C payouts.

use serde::{Deserialize, Serialize};

use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::common::OrderStatus;
use crate::params::{FormParams, ToFormParams};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbpQrRequest {
    pub md_order: Option<String>,
    pub qr_height: Option<u32>,
    pub qr_width: Option<u32>,
    /// `image` or `matrix`.
    pub qr_format: Option<String>,
}

impl ToFormParams for SbpQrRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set_opt("mdOrder", self.md_order.as_deref())
            .set_positive("qrHeight", self.qr_height)
            .set_positive("qrWidth", self.qr_width)
            .set_opt("qrFormat", self.qr_format.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpQrResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    /// Base64-encoded image.
    pub qr_image: String,
    pub payload: String,
    pub qr_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpQrStatusResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    pub order_status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpBindResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub binding_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpBindingsResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub bindings: Vec<SbpBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpBinding {
    pub binding_id: String,
    pub bank_name: String,
    pub masked_phone: String,
    pub created_date: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpB2bPayloadResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub payload: String,
    pub qr_url: String,
    pub order_id: String,
}

/// Bank account details of either side of a B2B transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbpLegalEntity {
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub kpp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbpB2bPerformRequest {
    pub order_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_params: Option<SbpLegalEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_params: Option<SbpLegalEntity>,
}

/// Shared by B2B perform and B2C payout responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpTransferResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    /// Textual SBP state, e.g. `CREATED` or `SUCCESS`.
    pub order_status: String,
}

pub type SbpB2bPerformResponse = SbpTransferResponse;
pub type SbpPayoutResponse = SbpTransferResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbpPayoutRequest {
    pub order_number: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_params: Option<SbpPayoutRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_params: Option<SbpLegalEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbpPayoutRecipient {
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpCheckPayoutResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    pub order_status: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbpPayoutStatusResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    pub order_status: String,
    pub amount: i64,
    pub status_info: Option<SbpStatusInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbpStatusInfo {
    pub status: String,
    pub description: String,
}
