//! Domain services: one thin façade per endpoint family.
//!
//! # Design
//! A service borrows the client's `Dispatcher` and holds nothing else. Each
//! method picks an endpoint literal and a calling convention, converts its
//! request record, and delegates. Business outcomes travel back inside the
//! decoded envelope; only transport, gateway and decode failures surface as
//! `ApiError`.

mod bindings;
mod orders;
mod payments;
mod refunds;
mod sbp;
mod status;
mod wallets;

pub use bindings::Bindings;
pub use orders::Orders;
pub use payments::Payments;
pub use refunds::Refunds;
pub use sbp::Sbp;
pub use status::Status;
pub use wallets::{ApplePay, GooglePay, MirPay, SamsungPay, YandexPay};

use serde::Serialize;

use crate::dispatch::{AuthMode, Dispatch};
use crate::error::Result;
use crate::params::{FormParams, ToFormParams};

/// Query-authenticated POST with the record's fields in the query string.
fn form<R: ToFormParams + ?Sized>(path: &str, request: &R) -> Result<Dispatch> {
    Ok(Dispatch::post(path).query(request.to_form_params()?))
}

/// Query-authenticated POST carrying a fixed parameter list.
fn form_pairs(path: &str, pairs: &[(&str, &str)]) -> Dispatch {
    Dispatch::post(path).query(pairs.iter().copied().collect::<FormParams>())
}

/// Query-authenticated POST with a JSON body.
fn json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Dispatch> {
    Dispatch::post(path).json(body)
}

/// JSON POST without query credentials.
fn json_unauthenticated<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Dispatch> {
    Ok(Dispatch::post(path).json(body)?.auth(AuthMode::BodyOrNone))
}

#[cfg(test)]
mod tests {
    use crate::context::RequestContext;
    use crate::models::*;
    use crate::test_support::{client, RecordingTransport};

    #[tokio::test]
    async fn every_operation_hits_its_endpoint() {
        let transport = RecordingTransport::new(200, "{}");
        let c = client(transport.clone());
        let ctx = RequestContext::background();

        // (call, endpoint, credentials in the query)
        macro_rules! check {
            ($call:expr, $path:literal, $query_auth:literal) => {{
                $call.await.unwrap();
                assert_eq!(transport.path(), concat!("/payment", $path));
                let has_credentials = transport.query().iter().any(|(k, _)| k == "userName");
                assert_eq!(has_credentials, $query_auth, "{}", $path);
            }};
        }

        check!(c.orders().register(&ctx, &RegisterOrderRequest::default()), "/rest/register.do", true);
        check!(c.orders().register_pre_auth(&ctx, &RegisterOrderRequest::default()), "/rest/registerPreAuth.do", true);
        check!(c.orders().decline(&ctx, &DeclineRequest::default()), "/rest/decline.do", true);
        check!(c.orders().add_params(&ctx, &AddParamsRequest::default()), "/rest/addParams.do", true);

        check!(c.status().extended(&ctx, &GetOrderStatusRequest::default()), "/rest/getOrderStatusExtended.do", true);
        check!(c.status().by_order_id(&ctx, "o-1"), "/rest/getOrderStatusExtended.do", true);
        check!(c.status().by_order_number(&ctx, "A-1"), "/rest/getOrderStatusExtended.do", true);
        check!(c.status().last_orders(&ctx, &LastOrdersRequest::default()), "/rest/getLastOrdersForMerchants.do", true);
        check!(c.status().verify_enrollment(&ctx, &VerifyEnrollmentRequest::default()), "/rest/verifyEnrollment.do", true);

        check!(c.bindings().list(&ctx, &GetBindingsRequest::default()), "/rest/getBindings.do", true);
        check!(c.bindings().list_all(&ctx, &GetBindingsRequest::default()), "/rest/getAllBindings.do", true);
        check!(c.bindings().activate(&ctx, &BindingRequest::default()), "/rest/bindCard.do", true);
        check!(c.bindings().deactivate(&ctx, &BindingRequest::default()), "/rest/unBindCard.do", true);
        check!(c.bindings().extend(&ctx, &ExtendBindingRequest::default()), "/rest/extendBinding.do", true);
        check!(c.bindings().by_card_or_id(&ctx, &BindingsByCardOrIdRequest::default()), "/rest/getBindingsByCardOrId.do", true);

        check!(c.payments().deposit(&ctx, &DepositRequest::default()), "/rest/deposit.do", true);
        check!(c.payments().reverse(&ctx, &ReverseRequest::default()), "/rest/reverse.do", true);
        check!(c.payments().pay_with_binding(&ctx, &PaymentOrderBindingRequest::default()), "/rest/paymentOrderBinding.do", true);
        check!(c.payments().instant(&ctx, &InstantPaymentRequest::default()), "/rest/instantPayment.do", true);
        check!(c.payments().recurrent(&ctx, &RecurrentPaymentRequest::default()), "/recurrentPayment.do", false);
        check!(c.payments().finish_3ds(&ctx, &Finish3dsRequest::default()), "/rest/finish3dsPayment.do", true);

        check!(c.refunds().refund(&ctx, &RefundRequest::default()), "/rest/refund.do", true);
        check!(c.refunds().instant_refund(&ctx, "o-1", 100), "/rest/instantRefund.do", true);

        check!(c.sbp().qr(&ctx, &SbpQrRequest::default()), "/rest/sbp/c2b/qr/dynamic/get.do", true);
        check!(c.sbp().qr_status(&ctx, "md"), "/rest/sbp/c2b/qr/status.do", true);
        check!(c.sbp().reject_qr(&ctx, "md"), "/rest/sbp/c2b/qr/dynamic/reject.do", true);
        check!(c.sbp().bind(&ctx, "md"), "/rest/sbp/c2b/bind.do", true);
        check!(c.sbp().unbind(&ctx, "b-1"), "/rest/sbp/c2b/unBind.do", true);
        check!(c.sbp().bindings(&ctx, "client-1"), "/rest/sbp/c2b/getBindings.do", true);
        check!(c.sbp().b2b_payload(&ctx, "o-1"), "/rest/sbp/b2b/getPayload.do", true);
        check!(c.sbp().b2b_perform(&ctx, &SbpB2bPerformRequest::default()), "/rest/sbp/b2b/perform.do", true);
        check!(c.sbp().b2c_payout(&ctx, &SbpPayoutRequest::default()), "/rest/sbp/b2c/performPayout.do", true);
        check!(c.sbp().b2c_check_payout(&ctx, "o-1"), "/rest/sbp/b2c/checkPayout.do", true);
        check!(c.sbp().b2c_payout_status(&ctx, "o-1"), "/rest/sbp/b2c/getPayoutStatus.do", true);

        check!(c.apple_pay().payment(&ctx, &ApplePayPaymentRequest::default()), "/applepay/payment.do", false);
        check!(c.google_pay().payment(&ctx, &GooglePayPaymentRequest::default()), "/google/payment.do", false);
        check!(c.samsung_pay().payment(&ctx, &SamsungPayPaymentRequest::default()), "/samsung/payment.do", false);
        check!(c.samsung_pay().direct_payment(&ctx, &SamsungPayPaymentRequest::default()), "/samsung/paymentDirect.do", false);
        check!(c.mir_pay().payment(&ctx, &MirPayPaymentRequest::default()), "/mir/payment.do", false);
        check!(c.mir_pay().direct_payment(&ctx, &MirPayPaymentRequest::default()), "/mir/paymentDirect.do", false);
        check!(c.yandex_pay().payment(&ctx, &YandexPayPaymentRequest::default()), "/yandex/payment.do", false);
        check!(c.yandex_pay().direct_payment(&ctx, &YandexPayPaymentRequest::default()), "/yandex/paymentDirect.do", false);
        check!(c.yandex_pay().instant_payment(&ctx, &YandexPayPaymentRequest::default()), "/yandex/instantPayment.do", false);
    }
}
