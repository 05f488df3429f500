//! Order registration, decline and add-params records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::models::common::{OrderBundle, TaxSystem};
use crate::params::{FormParams, ToFormParams};

/// Register a one-stage or pre-authorized (two-stage) order.
///
/// `amount` is in minor currency units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterOrderRequest {
    pub order_number: String,
    pub amount: i64,
    pub return_url: String,
    pub fail_url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub page_view: Option<String>,
    pub client_id: Option<String>,
    pub merchant_login: Option<String>,
    pub json_params: Option<BTreeMap<String, String>>,
    pub session_timeout_secs: Option<u32>,
    /// `yyyy-MM-ddTHH:mm:ss`
    pub expiration_date: Option<String>,
    pub binding_id: Option<String>,
    pub features: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// ISO 4217 numeric code.
    pub currency: Option<String>,
    pub order_bundle: Option<OrderBundle>,
    pub tax_system: Option<TaxSystem>,
    pub dynamic_callback_url: Option<String>,
    pub fee_input: Option<i64>,
}

impl RegisterOrderRequest {
    pub fn new(order_number: impl Into<String>, amount: i64, return_url: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            amount,
            return_url: return_url.into(),
            ..Default::default()
        }
    }
}

impl ToFormParams for RegisterOrderRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderNumber", self.order_number.as_str())
            .set("amount", self.amount.to_string())
            .set("returnUrl", self.return_url.as_str())
            .set_opt("failUrl", self.fail_url.as_deref())
            .set_opt("description", self.description.as_deref())
            .set_opt("language", self.language.as_deref())
            .set_opt("pageView", self.page_view.as_deref())
            .set_opt("clientId", self.client_id.as_deref())
            .set_opt("merchantLogin", self.merchant_login.as_deref())
            .set_positive("sessionTimeoutSecs", self.session_timeout_secs)
            .set_opt("expirationDate", self.expiration_date.as_deref())
            .set_opt("bindingId", self.binding_id.as_deref())
            .set_opt("features", self.features.as_deref())
            .set_opt("email", self.email.as_deref())
            .set_opt("phone", self.phone.as_deref())
            .set_opt("currency", self.currency.as_deref())
            .set_opt("dynamicCallbackUrl", self.dynamic_callback_url.as_deref())
            .set_positive("feeInput", self.fee_input)
            .set_display("taxSystem", self.tax_system);
        if let Some(json_params) = self.json_params.as_ref().filter(|m| !m.is_empty()) {
            p.set_json("jsonParams", json_params)?;
        }
        if let Some(bundle) = &self.order_bundle {
            p.set_json("orderBundle", bundle)?;
        }
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterOrderResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub order_id: String,
    pub form_url: String,
}

/// Cancel an unpaid order. Identify it by `order_id` or `order_number`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclineRequest {
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    pub merchant_login: Option<String>,
    pub language: Option<String>,
}

impl ToFormParams for DeclineRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set_opt("orderId", self.order_id.as_deref())
            .set_opt("orderNumber", self.order_number.as_deref())
            .set_opt("merchantLogin", self.merchant_login.as_deref())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

/// Attach extra key/value parameters to an existing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddParamsRequest {
    pub order_id: String,
    pub params: BTreeMap<String, String>,
    pub language: Option<String>,
}

impl ToFormParams for AddParamsRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("orderId", self.order_id.as_str());
        if !self.params.is_empty() {
            p.set_json("params", &self.params)?;
        }
        p.set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{CartItems, CustomerDetails};

    #[test]
    fn register_emits_required_fields_only_by_default() {
        let req = RegisterOrderRequest::new("ORDER-1", 100000, "https://shop.example/ok");
        let p = req.to_form_params().unwrap();
        let keys: Vec<_> = p.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["orderNumber", "amount", "returnUrl"]);
        assert_eq!(p.get("amount"), Some("100000"));
    }

    #[test]
    fn register_maps_optionals() {
        let req = RegisterOrderRequest {
            description: Some("Оплата заказа".to_string()),
            session_timeout_secs: Some(1200),
            fee_input: Some(0),
            tax_system: Some(TaxSystem::General),
            order_bundle: Some(OrderBundle {
                customer_details: Some(CustomerDetails {
                    email: Some("buyer@example.com".to_string()),
                    ..Default::default()
                }),
                cart_items: Some(CartItems::default()),
                ..Default::default()
            }),
            ..RegisterOrderRequest::new("ORDER-2", 5000, "https://shop.example/ok")
        };
        let p = req.to_form_params().unwrap();
        assert_eq!(p.get("description"), Some("Оплата заказа"));
        assert_eq!(p.get("sessionTimeoutSecs"), Some("1200"));
        assert_eq!(p.get("taxSystem"), Some("0"));
        assert!(!p.contains("feeInput"));
        let bundle: serde_json::Value = serde_json::from_str(p.get("orderBundle").unwrap()).unwrap();
        assert_eq!(bundle["customerDetails"]["email"], "buyer@example.com");
        assert_eq!(bundle["cartItems"]["items"], serde_json::json!([]));
    }

    #[test]
    fn add_params_encodes_map_as_valid_json() {
        let mut params = BTreeMap::new();
        params.insert("comment".to_string(), r#"12" screen, \ slash"#.to_string());
        params.insert("source".to_string(), "mobile".to_string());
        let req = AddParamsRequest {
            order_id: "e8f2a1c0".to_string(),
            params,
            language: None,
        };
        let p = req.to_form_params().unwrap();
        let decoded: BTreeMap<String, String> =
            serde_json::from_str(p.get("params").unwrap()).unwrap();
        assert_eq!(decoded, req.params);
    }

    #[test]
    fn register_response_decodes_flattened_envelope() {
        let resp: RegisterOrderResponse = serde_json::from_str(
            r#"{"orderId":"70906e55-7114-41d6-8332-4609dc6590f4","formUrl":"https://pay/form","errorCode":"0"}"#,
        )
        .unwrap();
        assert!(resp.envelope.is_success());
        assert_eq!(resp.order_id, "70906e55-7114-41d6-8332-4609dc6590f4");

        let dup: RegisterOrderResponse = serde_json::from_str(
            r#"{"errorCode":"1","errorMessage":"Order with this number was already processed"}"#,
        )
        .unwrap();
        assert!(!dup.envelope.is_success());
        assert!(dup.order_id.is_empty());
    }
}
