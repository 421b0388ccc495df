// A local stand-in for the IndieCampers API, answering with canned responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{CONTENT_ENCODING, CONTENT_TYPE},
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

pub(crate) struct CannedResponse {
    status: u16,
    content_encoding: Option<&'static str>,
    body: Vec<u8>,
}

impl CannedResponse {
    pub(crate) fn json(body: Vec<u8>) -> CannedResponse {
        CannedResponse {
            status: 200,
            content_encoding: None,
            body,
        }
    }

    pub(crate) fn encoding(mut self, encoding: &'static str) -> CannedResponse {
        self.content_encoding = Some(encoding);
        self
    }

    pub(crate) fn status(mut self, status: u16) -> CannedResponse {
        self.status = status;
        self
    }
}

/// Request line and headers (one `name: value` per line), then the body.
#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub head: String,
    pub body: Vec<u8>,
}

#[derive(Default)]
pub(crate) struct Stub {
    responses: Mutex<VecDeque<CannedResponse>>,
    received: Mutex<Vec<CapturedRequest>>,
}

impl Stub {
    pub(crate) fn received(&self) -> Vec<CapturedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn availability(
    State(stub): State<Arc<Stub>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut head = format!("{} {}\r\n", method, uri.path());
    for (name, value) in headers.iter() {
        head.push_str(&format!(
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    stub.received.lock().unwrap().push(CapturedRequest {
        head,
        body: body.to_vec(),
    });

    let Some(canned) = stub.responses.lock().unwrap().pop_front() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "no canned response left").into_response();
    };
    let status = StatusCode::from_u16(canned.status).unwrap();
    let mut response = (status, canned.body).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(encoding) = canned.content_encoding {
        response
            .headers_mut()
            .insert(CONTENT_ENCODING, HeaderValue::from_static(encoding));
    }
    response
}

/// Serve the canned responses in order on a random local port.  Returns the
/// url to post to and the stub recording the requests received.
pub(crate) async fn serve(responses: Vec<CannedResponse>) -> (String, Arc<Stub>) {
    let stub = Arc::new(Stub {
        responses: Mutex::new(responses.into()),
        received: Mutex::new(Vec::new()),
    });
    let router = Router::new()
        .route("/api/v3/availability", post(availability))
        .with_state(stub.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}/api/v3/availability", addr), stub)
}
