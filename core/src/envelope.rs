//! Response envelopes.
//!
//! # Design
//! The gateway signals business outcomes in two unrelated ways, and each
//! endpoint family sticks to one of them:
//!
//! - `StandardEnvelope`: `errorCode` / `errorMessage` fields flattened into
//!   the response. Success iff the code is empty or `"0"`.
//! - `SuccessEnvelope<D>`: a `success` flag with separate `data` and `error`
//!   objects, used by wallet and recurrent-payment endpoints.
//!
//! The two are not unified; each operation declares which one it decodes.
//! Neither is turned into an `ApiError` by the dispatcher.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::status::OrderStatusExtended;

/// `errorCode` / `errorMessage` pair embedded in most REST responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEnvelope {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub error_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_message: String,
}

impl StandardEnvelope {
    /// True when the gateway reported no business error.
    pub fn is_success(&self) -> bool {
        self.error_code.is_empty() || self.error_code == "0"
    }
}

/// Error object of a `SuccessEnvelope`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletError {
    #[serde(default)]
    pub code: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.message.is_empty() {
            &self.description
        } else {
            &self.message
        };
        write!(f, "code {}: {}", self.code, text)
    }
}

impl std::error::Error for WalletError {}

/// `success` flag with discriminated `data` / `error` payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope<D> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<WalletError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<Box<OrderStatusExtended>>,
}

impl<D> Default for SuccessEnvelope<D> {
    fn default() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
            order_status: None,
        }
    }
}

impl<D> SuccessEnvelope<D> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Splits the envelope on its `success` flag.
    ///
    /// A failed envelope without an error object yields a `WalletError`
    /// with code 0 and no text.
    pub fn into_result(self) -> Result<Option<D>, WalletError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

/// Accepts `"5"`, `5` or `null` and yields the string form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Code>::deserialize(deserializer)? {
        Some(Code::Text(s)) => s,
        Some(Code::Int(n)) => n.to_string(),
        Some(Code::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
