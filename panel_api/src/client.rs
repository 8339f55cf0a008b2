//! Request client for the admin panel API.

use serde::Serialize;

use crate::{Error, Method, Payload, RequestOptions, ReqwestTransport, Transport};

/// JSON request client.
///
/// Holds nothing but its transport, so one instance can serve any number of
/// concurrent calls. Every call makes exactly one transport attempt.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Creates a client that resolves request paths against `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self::new(ReqwestTransport::new(base_url)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request and decodes the response.
    ///
    /// Returns the decoded payload for 2xx responses. Any other status yields
    /// [`Error::RequestFailed`]; transport failures come back as
    /// [`Error::TransportFailed`] with the transport's own error inside.
    pub async fn issue(&self, path: &str, options: &RequestOptions) -> Result<Payload, Error> {
        let request = options.build(path);
        tracing::debug!(method = %request.method, path, "sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::debug!("Transport failed for {}: {}", path, e);
            Error::TransportFailed(e)
        })?;

        let status = response.status;
        let payload = Payload::from_body(&response.body);

        if !response.is_success() {
            let message = payload.failure_message(status);
            tracing::warn!("Request to {} failed with status {}: {}", path, status, message);
            return Err(Error::RequestFailed {
                status,
                message,
                payload,
            });
        }

        tracing::debug!(status, path, "request completed");
        Ok(payload)
    }

    pub async fn get(&self, path: &str) -> Result<Payload, Error> {
        self.issue(path, &RequestOptions::new()).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Payload, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Post, path, body).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Payload, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Put, path, body).await
    }

    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<Payload, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Patch, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<Payload, Error> {
        self.issue(path, &RequestOptions::new().with_method(Method::Delete))
            .await
    }

    async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<Payload, Error>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::new().with_method(method).with_json(body)?;
        self.issue(path, &options).await
    }
}
