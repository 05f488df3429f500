use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Envelope, OrderStatusResponse, RegisterResponse, MERCHANT_LOGIN, MERCHANT_PASSWORD};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Form-style POST with merchant credentials appended to `query`.
fn form_request(path: &str, query: &str) -> Request<String> {
    let credentials = format!("userName={MERCHANT_LOGIN}&password={MERCHANT_PASSWORD}");
    let uri = if query.is_empty() {
        format!("/payment{path}?{credentials}")
    } else {
        format!("/payment{path}?{query}&{credentials}")
    };
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn json_request(path: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(format!("/payment{path}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- routing ---

#[tokio::test]
async fn unknown_path_is_plain_not_found() {
    let resp = app()
        .oneshot(Request::builder().uri("/payment/rest/nope.do").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await, "not found");
}

// --- register ---

#[tokio::test]
async fn register_returns_order_id_and_form_url() {
    let resp = app()
        .oneshot(form_request(
            "/rest/register.do",
            "orderNumber=A-1&amount=1000&returnUrl=https%3A%2F%2Fshop%2Fok",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let registered: RegisterResponse = body_json(resp).await;
    assert!(registered.form_url.ends_with(&registered.order_id.to_string()));
}

#[tokio::test]
async fn register_with_wrong_password_is_access_denied() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payment/rest/register.do?orderNumber=A-1&amount=1&returnUrl=x&userName=merchant-api&password=nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "5");
}

#[tokio::test]
async fn register_without_amount_reports_missing_parameter() {
    let resp = app()
        .oneshot(form_request("/rest/register.do", "orderNumber=A-1&returnUrl=x"))
        .await
        .unwrap();

    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "4");
    assert_eq!(envelope.error_message, "amount is required");
}

#[tokio::test]
async fn form_endpoint_rejects_body() {
    let mut request = form_request("/rest/register.do", "orderNumber=A-1&amount=1&returnUrl=x");
    *request.body_mut() = "{}".to_string();
    let resp = app().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- status ---

#[tokio::test]
async fn status_of_unknown_order_is_error_code_6() {
    let resp = app()
        .oneshot(form_request(
            "/rest/getOrderStatusExtended.do",
            "orderId=00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "6");
}

// --- json endpoints ---

#[tokio::test]
async fn recurrent_payment_rejects_query_credentials() {
    let mut request = json_request(
        "/recurrentPayment.do",
        r#"{"userName":"merchant-api","password":"secret","orderNumber":"R-1","bindingId":"b-1","amount":100}"#,
    );
    *request.uri_mut() = "/payment/recurrentPayment.do?userName=merchant-api".parse().unwrap();
    let resp = app().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recurrent_payment_with_body_credentials_succeeds() {
    let resp = app()
        .oneshot(json_request(
            "/recurrentPayment.do",
            r#"{"userName":"merchant-api","password":"secret","orderNumber":"R-1","bindingId":"b-1","amount":100}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["amount"], 100);
    assert_eq!(body["orderStatus"]["orderStatus"], 2);
}

#[tokio::test]
async fn apple_pay_invalid_token_fails_in_envelope() {
    let resp = app()
        .oneshot(json_request(
            "/applepay/payment.do",
            r#"{"merchant":"shop","orderNumber":"AP-1","paymentToken":"invalid"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], 10);
}

// --- full two-stage lifecycle ---

#[tokio::test]
async fn pre_auth_deposit_refund_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // register pre-auth
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/rest/registerPreAuth.do",
            "orderNumber=L-1&amount=5000&returnUrl=x",
        ))
        .await
        .unwrap();
    let registered: RegisterResponse = body_json(resp).await;
    let id = registered.order_id;

    // deposit before payment is refused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/rest/deposit.do", &format!("orderId={id}&amount=0")))
        .await
        .unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "7");

    // payer completes the form
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("POST")
                .uri(format!("/payment/mock/pay.do?mdOrder={id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "0");

    // deposit the full amount
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/rest/deposit.do", &format!("orderId={id}&amount=0")))
        .await
        .unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "0");

    // partial refund
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/rest/refund.do", &format!("orderId={id}&amount=2000")))
        .await
        .unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "0");

    // status by order number
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/rest/getOrderStatusExtended.do", "orderNumber=L-1"))
        .await
        .unwrap();
    let status: OrderStatusResponse = body_json(resp).await;
    assert_eq!(status.order_status, 4);
    assert_eq!(status.payment_amount_info.deposited_amount, 5000);
    assert_eq!(status.payment_amount_info.refunded_amount, 2000);

    // refunding more than remains is refused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/rest/refund.do", &format!("orderId={id}&amount=4000")))
        .await
        .unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.error_code, "7");
}
