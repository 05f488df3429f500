//! In-memory imitation of a subset of the Alfa Payments gateway.
//!
//! Routes live under `/payment`, like the real host. Form-style endpoints
//! read everything from the query string, require `userName`/`password`
//! there and refuse a request body. JSON endpoints (recurrent payment, Apple
//! Pay) refuse query credentials. Business failures are reported the way the
//! gateway does it: HTTP 200 with an `errorCode`, or `success: false`.
//!
//! `POST /payment/mock/pay.do?mdOrder=..` stands in for the payer completing
//! the hosted payment form.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const MERCHANT_LOGIN: &str = "merchant-api";
pub const MERCHANT_PASSWORD: &str = "secret";

/// Order state codes as reported by `getOrderStatusExtended.do`.
pub mod order_status {
    pub const REGISTERED: i64 = 0;
    pub const APPROVED: i64 = 1;
    pub const DEPOSITED: i64 = 2;
    pub const REVERSED: i64 = 3;
    pub const REFUNDED: i64 = 4;
    pub const DECLINED: i64 = 6;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub amount: i64,
    pub status: i64,
    pub pre_auth: bool,
    pub deposited_amount: i64,
    pub refunded_amount: i64,
    pub description: Option<String>,
    pub params: BTreeMap<String, String>,
}

impl Order {
    fn new(order_number: String, amount: i64, pre_auth: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            amount,
            status: order_status::REGISTERED,
            pre_auth,
            deposited_amount: 0,
            refunded_amount: 0,
            description: None,
            params: BTreeMap::new(),
        }
    }

    fn payment_state(&self) -> &'static str {
        match self.status {
            order_status::APPROVED => "APPROVED",
            order_status::DEPOSITED => "DEPOSITED",
            order_status::REVERSED => "REVERSED",
            order_status::REFUNDED => "REFUNDED",
            order_status::DECLINED => "DECLINED",
            _ => "CREATED",
        }
    }
}

/// `errorCode` / `errorMessage` pair.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub error_code: String,
    pub error_message: String,
}

impl Envelope {
    fn ok() -> Self {
        Self {
            error_code: "0".to_string(),
            error_message: "Success".to_string(),
        }
    }

    fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            error_code: code.to_string(),
            error_message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub order_id: Uuid,
    pub form_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmountInfo {
    pub approved_amount: i64,
    pub deposited_amount: i64,
    pub refunded_amount: i64,
    pub payment_state: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub order_number: String,
    pub order_status: i64,
    pub amount: i64,
    pub currency: String,
    pub order_description: String,
    pub payment_amount_info: PaymentAmountInfo,
    pub merchant_order_params: Vec<NameValue>,
}

impl From<&Order> for OrderStatusResponse {
    fn from(order: &Order) -> Self {
        let approved = match order.status {
            order_status::APPROVED | order_status::DEPOSITED | order_status::REFUNDED => order.amount,
            _ => 0,
        };
        Self {
            envelope: Envelope::ok(),
            order_number: order.order_number.clone(),
            order_status: order.status,
            amount: order.amount,
            currency: "643".to_string(),
            order_description: order.description.clone().unwrap_or_default(),
            payment_amount_info: PaymentAmountInfo {
                approved_amount: approved,
                deposited_amount: order.deposited_amount,
                refunded_amount: order.refunded_amount,
                payment_state: order.payment_state().to_string(),
            },
            merchant_order_params: order
                .params
                .iter()
                .map(|(name, value)| NameValue {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentPayment {
    pub user_name: String,
    pub password: String,
    pub order_number: String,
    pub binding_id: String,
    pub amount: i64,
    #[serde(default)]
    pub pre_auth: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPayment {
    pub merchant: String,
    pub order_number: String,
    pub payment_token: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub pre_auth: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WalletError {
    pub code: i64,
    pub description: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<D> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<WalletError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatusResponse>,
}

impl<D> SuccessResponse<D> {
    fn failed(code: i64, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(WalletError {
                code,
                description: message.to_string(),
                message: message.to_string(),
            }),
            order_status: None,
        }
    }
}

pub type Db = Arc<RwLock<HashMap<Uuid, Order>>>;

type Params = HashMap<String, String>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let gateway = Router::new()
        .route("/rest/register.do", post(register))
        .route("/rest/registerPreAuth.do", post(register_pre_auth))
        .route("/rest/getOrderStatusExtended.do", post(order_status_extended))
        .route("/rest/deposit.do", post(deposit))
        .route("/rest/reverse.do", post(reverse))
        .route("/rest/refund.do", post(refund))
        .route("/rest/decline.do", post(decline))
        .route("/rest/addParams.do", post(add_params))
        .route("/recurrentPayment.do", post(recurrent_payment))
        .route("/applepay/payment.do", post(apple_pay_payment))
        .route("/mock/pay.do", post(complete_payment))
        .with_state(db);
    Router::new()
        .nest("/payment", gateway)
        .fallback(|| async { (StatusCode::NOT_FOUND, "not found") })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn envelope(envelope: Envelope) -> Response {
    Json(envelope).into_response()
}

/// Query credentials present and correct, and no body.
fn check_form(params: &Params, body: &Bytes) -> Result<(), Response> {
    if !body.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "form endpoints take no request body").into_response());
    }
    let authorized = params.get("userName").map(String::as_str) == Some(MERCHANT_LOGIN)
        && params.get("password").map(String::as_str) == Some(MERCHANT_PASSWORD);
    if !authorized {
        return Err(envelope(Envelope::error("5", "Access denied")));
    }
    Ok(())
}

fn check_no_query_credentials(params: &Params) -> Result<(), Response> {
    if params.contains_key("userName") || params.contains_key("password") {
        return Err((StatusCode::BAD_REQUEST, "credentials are not accepted in the query string").into_response());
    }
    Ok(())
}

fn required<'a>(params: &'a Params, key: &str) -> Result<&'a str, Response> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| envelope(Envelope::error("4", format!("{key} is required"))))
}

fn amount(params: &Params, key: &str) -> Result<i64, Response> {
    required(params, key)?
        .parse::<i64>()
        .ok()
        .filter(|amount| *amount >= 0)
        .ok_or_else(|| envelope(Envelope::error("4", format!("{key} is invalid"))))
}

/// Finds the order named by `orderId` or `orderNumber`.
fn find_order<'a>(orders: &'a mut HashMap<Uuid, Order>, params: &Params) -> Result<&'a mut Order, Response> {
    let by_id = params
        .get("orderId")
        .and_then(|id| Uuid::parse_str(id).ok());
    let order_number = params.get("orderNumber");
    orders
        .values_mut()
        .find(|order| Some(order.id) == by_id || Some(&order.order_number) == order_number)
        .ok_or_else(|| envelope(Envelope::error("6", "Order not found")))
}

type Reply = Result<Response, Response>;

async fn register(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    register_order(db, params, body, false).await
}

async fn register_pre_auth(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    register_order(db, params, body, true).await
}

async fn register_order(db: Db, params: Params, body: Bytes, pre_auth: bool) -> Reply {
    check_form(&params, &body)?;
    let order_number = required(&params, "orderNumber")?.to_string();
    let amount = amount(&params, "amount")?;
    required(&params, "returnUrl")?;

    let mut orders = db.write().await;
    if orders.values().any(|o| o.order_number == order_number) {
        return Ok(envelope(Envelope::error(
            "1",
            "Order with this number was already processed",
        )));
    }
    let mut order = Order::new(order_number, amount, pre_auth);
    order.description = params.get("description").cloned();
    info!(order_id = %order.id, order_number = %order.order_number, pre_auth, "order registered");
    let response = RegisterResponse {
        order_id: order.id,
        form_url: format!("https://mock.gateway/payment/merchants/form?mdOrder={}", order.id),
    };
    orders.insert(order.id, order);
    Ok(Json(response).into_response())
}

async fn order_status_extended(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    Ok(Json(OrderStatusResponse::from(&*order)).into_response())
}

async fn deposit(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let requested = amount(&params, "amount")?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    if order.status != order_status::APPROVED {
        return Err(envelope(Envelope::error("7", "Order is not pre-authorized")));
    }
    let amount = if requested == 0 { order.amount } else { requested };
    if amount > order.amount {
        return Err(envelope(Envelope::error("7", "Deposit amount exceeds approved amount")));
    }
    order.deposited_amount = amount;
    order.status = order_status::DEPOSITED;
    info!(order_id = %order.id, amount, "order deposited");
    Ok(envelope(Envelope::ok()))
}

async fn reverse(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    if order.status != order_status::APPROVED {
        return Err(envelope(Envelope::error("7", "Reversal is impossible for this order state")));
    }
    order.status = order_status::REVERSED;
    info!(order_id = %order.id, "order reversed");
    Ok(envelope(Envelope::ok()))
}

async fn refund(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let amount = amount(&params, "amount")?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    if !matches!(order.status, order_status::DEPOSITED | order_status::REFUNDED) {
        return Err(envelope(Envelope::error("7", "Order is not deposited")));
    }
    if amount == 0 || order.refunded_amount + amount > order.deposited_amount {
        return Err(envelope(Envelope::error("7", "Refund amount exceeds deposited amount")));
    }
    order.refunded_amount += amount;
    order.status = order_status::REFUNDED;
    info!(order_id = %order.id, amount, "order refunded");
    Ok(envelope(Envelope::ok()))
}

async fn decline(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    if order.status != order_status::REGISTERED {
        return Err(envelope(Envelope::error("7", "Only unpaid orders can be declined")));
    }
    order.status = order_status::DECLINED;
    info!(order_id = %order.id, "order declined");
    Ok(envelope(Envelope::ok()))
}

async fn add_params(State(db): State<Db>, Query(params): Query<Params>, body: Bytes) -> Reply {
    check_form(&params, &body)?;
    let raw = required(&params, "params")?;
    let extra: BTreeMap<String, String> = serde_json::from_str(raw)
        .map_err(|e| envelope(Envelope::error("4", format!("params is not valid JSON: {e}"))))?;
    let mut orders = db.write().await;
    let order = find_order(&mut orders, &params)?;
    order.params.extend(extra);
    Ok(envelope(Envelope::ok()))
}

async fn complete_payment(State(db): State<Db>, Query(params): Query<Params>) -> Reply {
    let md_order = required(&params, "mdOrder")?;
    let id = Uuid::parse_str(md_order).map_err(|_| envelope(Envelope::error("6", "Order not found")))?;
    let mut orders = db.write().await;
    let order = orders
        .get_mut(&id)
        .ok_or_else(|| envelope(Envelope::error("6", "Order not found")))?;
    if order.status != order_status::REGISTERED {
        return Err(envelope(Envelope::error("7", "Order is already paid or closed")));
    }
    if order.pre_auth {
        order.status = order_status::APPROVED;
    } else {
        order.status = order_status::DEPOSITED;
        order.deposited_amount = order.amount;
    }
    info!(order_id = %order.id, status = order.status, "payer completed payment form");
    Ok(envelope(Envelope::ok()))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentData {
    pub order_id: Uuid,
    pub order_number: String,
    pub amount: i64,
}

async fn recurrent_payment(
    State(db): State<Db>,
    Query(params): Query<Params>,
    Json(payment): Json<RecurrentPayment>,
) -> Response {
    if let Err(response) = check_no_query_credentials(&params) {
        return response;
    }
    if payment.user_name != MERCHANT_LOGIN || payment.password != MERCHANT_PASSWORD {
        return Json(SuccessResponse::<RecurrentData>::failed(5, "Access denied")).into_response();
    }
    if payment.binding_id.is_empty() {
        return Json(SuccessResponse::<RecurrentData>::failed(2, "Binding not found")).into_response();
    }

    let mut orders = db.write().await;
    if orders.values().any(|o| o.order_number == payment.order_number) {
        return Json(SuccessResponse::<RecurrentData>::failed(1, "Order number is already used")).into_response();
    }
    let mut order = Order::new(payment.order_number, payment.amount, payment.pre_auth);
    if payment.pre_auth {
        order.status = order_status::APPROVED;
    } else {
        order.status = order_status::DEPOSITED;
        order.deposited_amount = order.amount;
    }
    info!(order_id = %order.id, binding_id = %payment.binding_id, "recurrent payment charged");
    let response = SuccessResponse {
        success: true,
        data: Some(RecurrentData {
            order_id: order.id,
            order_number: order.order_number.clone(),
            amount: order.amount,
        }),
        error: None,
        order_status: Some(OrderStatusResponse::from(&order)),
    };
    orders.insert(order.id, order);
    Json(response).into_response()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOrder {
    pub order_id: Uuid,
}

async fn apple_pay_payment(
    State(db): State<Db>,
    Query(params): Query<Params>,
    Json(payment): Json<ApplePayPayment>,
) -> Response {
    if let Err(response) = check_no_query_credentials(&params) {
        return response;
    }
    if payment.merchant.is_empty() {
        return Json(SuccessResponse::<WalletOrder>::failed(4, "merchant is required")).into_response();
    }
    if payment.payment_token.is_empty() || payment.payment_token == "invalid" {
        return Json(SuccessResponse::<WalletOrder>::failed(10, "Invalid payment token")).into_response();
    }

    let mut orders = db.write().await;
    let mut order = Order::new(payment.order_number, payment.amount, payment.pre_auth);
    if payment.pre_auth {
        order.status = order_status::APPROVED;
    } else {
        order.status = order_status::DEPOSITED;
        order.deposited_amount = order.amount;
    }
    info!(order_id = %order.id, "apple pay payment accepted");
    let response = SuccessResponse {
        success: true,
        data: Some(WalletOrder { order_id: order.id }),
        error: None,
        order_status: Some(OrderStatusResponse::from(&order)),
    };
    orders.insert(order.id, order);
    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn status_body_reflects_order_amounts() {
        let mut order = Order::new("A-1".to_string(), 1000, false);
        order.status = order_status::DEPOSITED;
        order.deposited_amount = 1000;
        order.params.insert("source".to_string(), "mobile".to_string());
        let json = serde_json::to_value(OrderStatusResponse::from(&order)).unwrap();
        assert_eq!(json["errorCode"], "0");
        assert_eq!(json["orderStatus"], 2);
        assert_eq!(json["paymentAmountInfo"]["approvedAmount"], 1000);
        assert_eq!(json["paymentAmountInfo"]["paymentState"], "DEPOSITED");
        assert_eq!(json["merchantOrderParams"][0]["name"], "source");
    }

    #[test]
    fn form_check_rejects_body_and_bad_credentials() {
        let good = form(&[("userName", MERCHANT_LOGIN), ("password", MERCHANT_PASSWORD)]);
        assert!(check_form(&good, &Bytes::new()).is_ok());
        assert!(check_form(&good, &Bytes::from_static(b"{}")).is_err());
        let bad = form(&[("userName", MERCHANT_LOGIN), ("password", "wrong")]);
        assert!(check_form(&bad, &Bytes::new()).is_err());
    }

    #[test]
    fn negative_or_garbage_amount_is_invalid() {
        assert!(amount(&form(&[("amount", "-5")]), "amount").is_err());
        assert!(amount(&form(&[("amount", "ten")]), "amount").is_err());
        assert_eq!(amount(&form(&[("amount", "0")]), "amount").ok(), Some(0));
    }

    #[test]
    fn recurrent_payment_requires_body_credentials() {
        let missing: Result<RecurrentPayment, _> =
            serde_json::from_str(r#"{"orderNumber":"R-1","bindingId":"b","amount":1}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn failed_wallet_response_omits_data() {
        let json = serde_json::to_value(SuccessResponse::<WalletOrder>::failed(10, "Invalid payment token")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], 10);
        assert!(json.get("data").is_none());
    }
}
