//! Stored-card binding records.

use serde::{Deserialize, Serialize};

use crate::envelope::StandardEnvelope;
use crate::error::Result;
use crate::params::{FormParams, ToFormParams};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBindingsRequest {
    pub client_id: String,
    pub binding_type: Option<String>,
    /// `"true"` to include expired bindings.
    pub show_expired: Option<String>,
    pub language: Option<String>,
}

impl GetBindingsRequest {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Default::default()
        }
    }
}

impl ToFormParams for GetBindingsRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("clientId", self.client_id.as_str())
            .set_opt("bindingType", self.binding_type.as_deref())
            .set_opt("showExpired", self.show_expired.as_deref())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BindingsResponse {
    #[serde(flatten)]
    pub envelope: StandardEnvelope,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Binding {
    pub binding_id: String,
    pub masked_pan: String,
    /// `YYYYMM`
    pub expiry_date: String,
    pub client_id: String,
    pub binding_category: String,
    pub is_expired: bool,
    pub cardholder_name: String,
    pub payment_system: String,
    pub created_date: i64,
    pub last_used_date: i64,
}

/// Activate (`bindCard.do`) or deactivate (`unBindCard.do`) a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingRequest {
    pub binding_id: String,
    pub language: Option<String>,
}

impl BindingRequest {
    pub fn new(binding_id: impl Into<String>) -> Self {
        Self {
            binding_id: binding_id.into(),
            language: None,
        }
    }
}

impl ToFormParams for BindingRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("bindingId", self.binding_id.as_str())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendBindingRequest {
    pub binding_id: String,
    /// `YYYYMM`
    pub new_expiry: String,
    pub language: Option<String>,
}

impl ToFormParams for ExtendBindingRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set("bindingId", self.binding_id.as_str())
            .set("newExpiry", self.new_expiry.as_str())
            .set_opt("language", self.language.as_deref());
        Ok(p)
    }
}

/// Search bindings by binding id or card number; at least one should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingsByCardOrIdRequest {
    pub binding_id: Option<String>,
    pub pan: Option<String>,
}

impl ToFormParams for BindingsByCardOrIdRequest {
    fn to_form_params(&self) -> Result<FormParams> {
        let mut p = FormParams::new();
        p.set_opt("bindingId", self.binding_id.as_deref())
            .set_opt("pan", self.pan.as_deref());
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_always_sends_new_expiry() {
        let req = ExtendBindingRequest {
            binding_id: "bnd-1".to_string(),
            new_expiry: "203112".to_string(),
            language: Some(String::new()),
        };
        let p = req.to_form_params().unwrap();
        assert_eq!(p.encode(), "bindingId=bnd-1&newExpiry=203112");
    }

    #[test]
    fn decodes_binding_list() {
        let resp: BindingsResponse = serde_json::from_str(
            r#"{"errorCode":"0","bindings":[{"bindingId":"bnd-1","maskedPan":"500000**0009","expiryDate":"203012","isExpired":false}]}"#,
        )
        .unwrap();
        assert_eq!(resp.bindings.len(), 1);
        assert_eq!(resp.bindings[0].masked_pan, "500000**0009");

        let none: BindingsResponse =
            serde_json::from_str(r#"{"errorCode":"2","errorMessage":"No bindings found"}"#).unwrap();
        assert!(none.bindings.is_empty());
        assert!(!none.envelope.is_success());
    }
}
