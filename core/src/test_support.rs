//! In-memory transport and client helpers for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::GatewayClient;
use crate::config::{ClientBuilder, Credentials};
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::HttpTransport;

/// Answers every request with the same canned response and keeps a copy of
/// what was sent.
pub(crate) struct RecordingTransport {
    status: u16,
    body: String,
    seen: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request sent")
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let request = self.last();
        url::Url::parse(&request.url)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    pub(crate) fn path(&self) -> String {
        url::Url::parse(&self.last().url).unwrap().path().to_string()
    }

    pub(crate) fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.last().body.as_deref().expect("no body")).unwrap()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpResponse::new(self.status, self.body.as_bytes()))
    }
}

pub(crate) fn client(transport: Arc<RecordingTransport>) -> GatewayClient {
    ClientBuilder::new(Credentials::new("merchant-api", "secret"))
        .base_url("https://gateway.test/payment")
        .transport(transport)
        .build()
        .unwrap()
}

pub(crate) fn has_pair(pairs: &[(String, String)], key: &str, value: &str) -> bool {
    pairs.iter().any(|(k, v)| k == key && v == value)
}
