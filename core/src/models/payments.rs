//! Deposit, reversal, binding, instant, recurrent and 3-D Secure payment
//! records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::envelope::{StandardEnvelope, SuccessEnvelope};
use crate::error::Result;
use crate::models::common::{OrderBundle, TaxSystem};
use crate::params::{FormParams, ToFormParams};

/// Complete a pre-authorized order. An `amount` of zero deposits the full
/// pre-authorized sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositRequest {
    pub order_id: String,
    pub amount: i64,
    pub language: Option<String>,
    /// Raw JSON object passed through unchanged.
    pub json_params: Option<String>,
    /// Raw JSON cart passed through unchanged.
    pub deposit_items: Option<String>,
    pub deposit_type: Option<i64>,
    pub currency: Option<String>,
}

impl DepositRequest {
    pub fn new(order_id: impl Into<String>, amount: i64) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            ..Default::default()
        }
    }
}

impl ToFormParams for DepositRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderId", self.order_id.as_str())
            .set("amount", self.amount.to_string())
            .set_opt("language", self.language.as_deref())
            .set_opt("jsonParams", self.json_params.as_deref())
            .set_opt("depositItems", self.deposit_items.as_deref())
            .set_positive("depositType", self.deposit_type)
            .set_opt("currency", self.currency.as_deref());
        Ok(p)
    }
}

/// Release a pre-authorization. `amount` enables a partial reversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseRequest {
    pub order_id: String,
    pub language: Option<String>,
    pub json_params: Option<String>,
    pub amount: Option<i64>,
}

impl ReverseRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            ..Default::default()
        }
    }
}

impl ToFormParams for ReverseRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderId", self.order_id.as_str())
            .set_opt("language", self.language.as_deref())
            .set_opt("jsonParams", self.json_params.as_deref())
            .set_positive("amount", self.amount);
        Ok(p)
    }
}

/// Pay a registered order (`md_order`) with a stored binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentOrderBindingRequest {
    pub md_order: String,
    pub binding_id: String,
    pub cvc: Option<String>,
    pub language: Option<String>,
    pub ip: Option<String>,
    pub email: Option<String>,
}

impl ToFormParams for PaymentOrderBindingRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("mdOrder", self.md_order.as_str())
            .set("bindingId", self.binding_id.as_str())
            .set_opt("cvc", self.cvc.as_deref())
            .set_opt("language", self.language.as_deref())
            .set_opt("ip", self.ip.as_deref())
            .set_opt("email", self.email.as_deref());
        Ok(p)
    }
}

/// Outcome of a payment step: either done, or a 3-D Secure redirect to follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentFormResult {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub redirect: String,
    pub acs_url: String,
    pub pa_req: String,
    pub term_url: String,
    pub order_id: String,
    pub info: String,
}

impl PaymentFormResult {
    /// True when the payer must be sent to the issuer's ACS page.
    pub fn requires_3ds(&self) -> bool {
        !self.acs_url.is_empty()
    }
}

/// Register and pay an order in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantPaymentRequest {
    pub order_number: String,
    pub amount: i64,
    pub return_url: String,
    pub fail_url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
    pub binding_id: Option<String>,
    pub cvc: Option<String>,
    pub ip: Option<String>,
}

impl ToFormParams for InstantPaymentRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderNumber", self.order_number.as_str())
            .set("amount", self.amount.to_string())
            .set("returnUrl", self.return_url.as_str())
            .set_opt("failUrl", self.fail_url.as_deref())
            .set_opt("description", self.description.as_deref())
            .set_opt("language", self.language.as_deref())
            .set_opt("email", self.email.as_deref())
            .set_opt("phone", self.phone.as_deref())
            .set_opt("currency", self.currency.as_deref())
            .set_opt("bindingId", self.binding_id.as_deref())
            .set_opt("cvc", self.cvc.as_deref())
            .set_opt("ip", self.ip.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstantPaymentResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    pub form_url: String,
    pub acs_url: String,
    pub pa_req: String,
    pub term_url: String,
    pub redirect: String,
    pub info: String,
}

/// Charge a stored binding without payer interaction.
///
/// Sent as a JSON body; the client adds `userName` and `password` to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentPaymentRequest {
    pub order_number: String,
    pub binding_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_unset")]
    pub pre_auth: Option<bool>,
    #[serde(skip_serializing_if = "crate::models::common::is_empty_map")]
    pub additional_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_bundle: Option<OrderBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system: Option<TaxSystem>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub dynamic_callback_url: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_not_positive")]
    pub fee_input: Option<i64>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub autocompletion_date: Option<String>,
    #[serde(skip_serializing_if = "crate::models::common::is_blank")]
    pub auto_reverse_date: Option<String>,
}

impl RecurrentPaymentRequest {
    pub fn new(order_number: impl Into<String>, binding_id: impl Into<String>, amount: i64) -> Self {
        Self {
            order_number: order_number.into(),
            binding_id: binding_id.into(),
            amount,
            ..Default::default()
        }
    }
}

/// Request body with the merchant credentials appended.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WithCredentials<'a, T> {
    #[serde(flatten)]
    pub inner: &'a T,
    pub user_name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecurrentPaymentData {
    pub order_id: String,
    pub order_number: String,
    pub amount: i64,
}

pub type RecurrentPaymentResponse = SuccessEnvelope<RecurrentPaymentData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finish3dsRequest {
    pub md_order: String,
    pub pa_res: String,
}

impl ToFormParams for Finish3dsRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("mdOrder", self.md_order.as_str())
            .set("paRes", self.pa_res.as_str());
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_zero_amount_is_still_sent() {
        let p = DepositRequest::new("ord-1", 0).to_form_params().unwrap();
        assert_eq!(p.get("amount"), Some("0"));
        assert!(!p.contains("depositType"));
    }

    #[test]
    fn reverse_amount_is_optional() {
        let full = ReverseRequest::new("ord-1").to_form_params().unwrap();
        assert!(!full.contains("amount"));

        let partial = ReverseRequest {
            amount: Some(500),
            ..ReverseRequest::new("ord-1")
        };
        assert_eq!(partial.to_form_params().unwrap().get("amount"), Some("500"));
    }

    #[test]
    fn recurrent_body_carries_credentials_alongside_fields() {
        let req = RecurrentPaymentRequest {
            pre_auth: Some(true),
            description: Some("monthly plan".into()),
            fee_input: Some(150),
            ..RecurrentPaymentRequest::new("ORDER-R1", "bnd-7", 1990)
        };
        let body = WithCredentials {
            inner: &req,
            user_name: "merchant-api",
            password: "secret",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["orderNumber"], "ORDER-R1");
        assert_eq!(json["bindingId"], "bnd-7");
        assert_eq!(json["amount"], 1990);
        assert_eq!(json["preAuth"], true);
        assert_eq!(json["description"], "monthly plan");
        assert_eq!(json["feeInput"], 150);
        assert_eq!(json["userName"], "merchant-api");
        assert_eq!(json["password"], "secret");
        assert!(json.get("currency").is_none());
    }

    #[test]
    fn recurrent_body_omits_empty_and_zero_optionals() {
        let req = RecurrentPaymentRequest {
            description: Some(String::new()),
            fee_input: Some(0),
            pre_auth: Some(false),
            additional_parameters: Some(BTreeMap::new()),
            ..RecurrentPaymentRequest::new("O", "b", 1)
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"orderNumber":"O","bindingId":"b","amount":1}"#);
    }

    #[test]
    fn payment_form_result_detects_3ds_redirect() {
        let result: PaymentFormResult = serde_json::from_str(
            r#"{"errorCode":"0","acsUrl":"https://acs.bank/3ds","paReq":"eJx","termUrl":"https://gw/term"}"#,
        )
        .unwrap();
        assert!(result.requires_3ds());
        assert_eq!(result.pa_req, "eJx");
    }
}
