//! Wallet payment records (Apple Pay, Google Pay, Samsung Pay, Mir Pay,
//! Yandex Pay).
//!
//! Every wallet call is a JSON POST without query credentials; the payment
//! token (or, for Mir Pay, the merchant login) authenticates the call.
//! Responses use `SuccessEnvelope`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::envelope::SuccessEnvelope;
use crate::models::common::OrderBundle;

/// Optional fields accepted by every wallet endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOptions {
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_empty_map")]
    pub additional_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_unset")]
    pub pre_auth: Option<bool>,
    /// ISO 4217 numeric code.
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub fail_url: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub post_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_bundle: Option<OrderBundle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPaymentRequest {
    pub merchant: String,
    pub order_number: String,
    /// Base64 Apple Pay token as received from the device.
    pub payment_token: String,
    #[serde(skip_serializing_if = "crate::models::common::is_not_positive")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub return_url: Option<String>,
    #[serde(flatten)]
    pub options: WalletOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentRequest {
    pub merchant: String,
    pub order_number: String,
    pub payment_token: String,
    pub amount: i64,
    pub ip: String,
    pub return_url: String,
    #[serde(flatten)]
    pub options: WalletOptions,
}

/// Used for both `payment.do` and `paymentDirect.do`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamsungPayPaymentRequest {
    pub merchant: String,
    pub order_number: String,
    pub payment_token: String,
    #[serde(skip_serializing_if = "crate::models::common::is_not_positive")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub return_url: Option<String>,
    #[serde(flatten)]
    pub options: WalletOptions,
}

/// Mir Pay has no device token; the payer confirms through a deeplink.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MirPayPaymentRequest {
    pub merchant: String,
    pub order_number: String,
    pub amount: i64,
    pub return_url: String,
    #[serde(flatten)]
    pub options: WalletOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YandexPayPaymentRequest {
    pub merchant: String,
    pub order_number: String,
    pub payment_token: String,
    pub amount: i64,
    pub return_url: String,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub ip: Option<String>,
    #[serde(flatten)]
    pub options: WalletOptions,
}

/// `data` of Apple, Google and Samsung Pay responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletOrder {
    pub order_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MirPayData {
    pub order_id: String,
    pub form_url: String,
    pub deeplink: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YandexPayData {
    pub order_id: String,
    pub redirect: String,
    pub acs_url: String,
    pub pa_req: String,
}

pub type WalletPaymentResponse = SuccessEnvelope<WalletOrder>;
pub type MirPayResponse = SuccessEnvelope<MirPayData>;
pub type YandexPayResponse = SuccessEnvelope<YandexPayData>;
