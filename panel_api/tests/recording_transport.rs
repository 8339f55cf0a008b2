use std::sync::{Arc, Mutex};

use panel_api::{
    Client, Error, HttpRequest, HttpResponse, Method, Payload, RequestOptions, Transport,
    TransportError,
};
use serde::Serialize;
use serde_json::json;

/// Replays one canned outcome and keeps every request it was handed.
#[derive(Clone)]
struct RecordingTransport {
    sent: Arc<Mutex<Vec<HttpRequest>>>,
    outcome: Result<(u16, &'static str), &'static str>,
}

impl RecordingTransport {
    fn responding(status: u16, body: &'static str) -> Self {
        Self {
            sent: Arc::default(),
            outcome: Ok((status, body)),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            sent: Arc::default(),
            outcome: Err(message),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        match self.outcome {
            Ok((status, body)) => Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }),
            Err(message) => Err(TransportError::Other(message.to_string())),
        }
    }
}

#[tokio::test]
async fn post_request_shape() {
    let transport = RecordingTransport::responding(201, r#"{"id":7,"name":"x"}"#);
    let client = Client::new(transport.clone());

    let payload = client.post("/api/items", &json!({"name": "x"})).await.unwrap();
    assert_eq!(payload, Payload::Json(json!({"id": 7, "name": "x"})));

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/api/items");
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"name":"x"}"#));
}

#[tokio::test]
async fn bodyless_wrappers_send_no_content_type() {
    let transport = RecordingTransport::responding(200, "");
    let client = Client::new(transport.clone());

    client.get("/api/plugins").await.unwrap();
    client.delete("/api/routes/1").await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[1].method, Method::Delete);
    for request in &sent {
        assert!(request.body.is_none());
        assert!(request.header("content-type").is_none());
    }
}

#[tokio::test]
async fn body_wrappers_use_their_method() {
    let transport = RecordingTransport::responding(200, "{}");
    let client = Client::new(transport.clone());

    client.put("/api/l4routes", &json!([])).await.unwrap();
    client.patch("/api/routes/1", &json!({"enabled": true})).await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].body.as_deref(), Some("[]"));
    assert_eq!(sent[1].method, Method::Patch);
    assert_eq!(sent[1].body.as_deref(), Some(r#"{"enabled":true}"#));
}

#[tokio::test]
async fn struct_bodies_keep_field_order() {
    #[derive(Serialize)]
    struct NewRoute<'a> {
        domain: &'a str,
        upstream: &'a str,
        port: u16,
    }

    let transport = RecordingTransport::responding(201, "");
    let client = Client::new(transport.clone());
    client
        .post(
            "/api/routes",
            &NewRoute {
                domain: "app.example.test",
                upstream: "10.0.0.5",
                port: 8080,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].body.as_deref(),
        Some(r#"{"domain":"app.example.test","upstream":"10.0.0.5","port":8080}"#)
    );
}

#[tokio::test]
async fn options_are_reusable_across_calls() {
    let transport = RecordingTransport::responding(200, "ok");
    let client = Client::new(transport.clone());
    let options = RequestOptions::new().with_header("X-Trace", "t");

    assert_eq!(client.issue("/a", &options).await.unwrap(), Payload::Text("ok".to_string()));
    client.issue("/b", &options).await.unwrap();

    assert_eq!(options.headers.len(), 1);
    let sent = transport.requests();
    assert_eq!(sent[0].path, "/a");
    assert_eq!(sent[1].path, "/b");
    assert_eq!(sent[1].header("x-trace"), Some("t"));
}

#[tokio::test]
async fn transport_error_is_propagated_unchanged() {
    let transport = RecordingTransport::failing("dns lookup failed");
    let client = Client::new(transport.clone());

    let err = client.get("/api/routes").await.unwrap_err();
    assert_eq!(err.to_string(), "dns lookup failed");
    assert!(matches!(err, Error::TransportFailed(TransportError::Other(_))));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn unserializable_body_never_reaches_transport() {
    let mut body = std::collections::HashMap::new();
    body.insert(vec![1u8], "v");

    let transport = RecordingTransport::responding(200, "");
    let client = Client::new(transport.clone());
    let err = client.post("/api/routes", &body).await.unwrap_err();

    assert!(matches!(err, Error::InvalidBody(_)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let transport = RecordingTransport::responding(200, "[]");
    let client = Client::new(transport.clone());

    let (a, b, c) = tokio::join!(
        client.get("/api/routes"),
        client.get("/api/plugins"),
        client.get("/api/l4routes"),
    );
    for result in [a, b, c] {
        assert_eq!(result.unwrap(), Payload::Json(json!([])));
    }
    assert_eq!(transport.requests().len(), 3);
}
