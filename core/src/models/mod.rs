//! Request and response records, grouped by endpoint family.
//!
//! Form-style requests implement `ToFormParams`; JSON requests derive
//! `Serialize` and omit unset optionals. Responses derive `Default` and
//! tolerate missing and unknown fields.

pub mod bindings;
pub mod common;
pub mod orders;
pub mod payments;
pub mod refunds;
pub mod sbp;
pub mod status;
pub mod wallets;

pub use bindings::*;
pub use common::*;
pub use orders::*;
pub use payments::*;
pub use refunds::*;
pub use sbp::*;
pub use status::*;
pub use wallets::*;
