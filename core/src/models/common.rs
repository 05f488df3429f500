//! Types shared by several endpoint families: status and tax codes, and the
//! fiscal shopping cart (`OrderBundle`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declares an enum carried on the wire as its integer code. Unknown codes
/// are preserved in `Other` rather than rejected.
macro_rules! int_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Other(i64),
        }

        impl $name {
            pub fn code(self) -> i64 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Other(code) => code,
                }
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Other(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

int_code! {
    /// Lifecycle state of a gateway order.
    pub enum OrderStatus {
        /// Registered, not paid.
        Registered = 0,
        /// Amount held (two-stage payment).
        PreAuthorized = 1,
        /// Fully authorized.
        Deposited = 2,
        /// Authorization reversed.
        Reversed = 3,
        /// Refunded.
        Refunded = 4,
        /// ACS (3-D Secure) authorization started.
        AcsAuthorization = 5,
        /// Authorization declined.
        Declined = 6,
    }
}

int_code! {
    /// VAT rate of a cart position.
    pub enum TaxType {
        NoVat = 0,
        Vat0 = 1,
        Vat10 = 2,
        Vat20 = 3,
        Vat10_110 = 4,
        Vat20_120 = 5,
        Vat5 = 7,
        Vat7 = 8,
        Vat5_105 = 9,
        Vat7_107 = 10,
    }
}

int_code! {
    /// Merchant taxation system.
    pub enum TaxSystem {
        General = 0,
        SimplifiedIncome = 1,
        SimplifiedIncomeMinusExpense = 2,
        Envd = 3,
        Esn = 4,
        Patent = 5,
    }
}

/// Shopping cart and customer data for fiscal receipts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBundle {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub order_creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<CartItems>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<DeliveryInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub delivery_type: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub post_address: Option<String>,
}

/// `items` is always emitted, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItems {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// One cart position. Amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub position_id: u32,
    pub name: String,
    pub quantity: Quantity,
    pub item_amount: i64,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub item_code: Option<String>,
    #[serde(default, skip_serializing_if = "is_not_positive")]
    pub item_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_details: Option<ItemDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_attributes: Option<ItemAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_interest: Option<AgentInterest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    pub tax_type: TaxType,
    #[serde(default, skip_serializing_if = "is_not_positive")]
    pub tax_sum: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_details_params: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<NameValue>,
}

/// Generic `{name, value}` pair used by item details, item attributes and
/// order addenda.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

pub type ItemDetailsParam = NameValue;
pub type ItemAttribute = NameValue;
pub type OrderAddendum = NameValue;

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInterest {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub interest_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
}

/// Serialization predicates for JSON bodies. Empty strings, non-positive
/// numbers, `false` flags and empty maps are left off the wire, the same
/// values `FormParams` skips in form mode.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

pub(crate) fn is_not_positive(value: &Option<i64>) -> bool {
    value.is_none_or(|v| v <= 0)
}

pub(crate) fn is_unset(value: &Option<bool>) -> bool {
    !value.unwrap_or(false)
}

pub(crate) fn is_empty_map(value: &Option<BTreeMap<String, String>>) -> bool {
    value.as_ref().is_none_or(BTreeMap::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip_through_integers() {
        let status: OrderStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, OrderStatus::Deposited);
        assert_eq!(serde_json::to_string(&TaxType::Vat20_120).unwrap(), "5");
        assert_eq!(TaxSystem::from(0), TaxSystem::General);
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let status: OrderStatus = serde_json::from_str("42").unwrap();
        assert_eq!(status, OrderStatus::Other(42));
        assert_eq!(status.code(), 42);
    }

    #[test]
    fn bundle_omits_unset_fields() {
        let bundle = OrderBundle {
            cart_items: Some(CartItems {
                items: vec![CartItem {
                    position_id: 1,
                    name: "Чайник".to_string(),
                    quantity: Quantity {
                        value: 1.0,
                        measure: "шт".to_string(),
                    },
                    item_amount: 250000,
                    item_code: None,
                    item_price: Some(250000),
                    tax: Some(Tax {
                        tax_type: TaxType::Vat20,
                        tax_sum: None,
                    }),
                    item_details: None,
                    item_attributes: None,
                    agent_interest: None,
                }],
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.get("orderCreationDate").is_none());
        assert!(json.get("customerDetails").is_none());
        let item = &json["cartItems"]["items"][0];
        assert_eq!(item["positionId"], 1);
        assert_eq!(item["tax"]["taxType"], 3);
        assert!(item["tax"].get("taxSum").is_none());
        assert!(item.get("itemCode").is_none());
    }
}
