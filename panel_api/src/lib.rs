//! Thin JSON client for the admin panel HTTP API.
//!
//! [`Client::issue`] sends one request through a [`Transport`], decodes the
//! response body into a [`Payload`] and turns non-2xx answers into
//! [`Error::RequestFailed`] with a message lifted from the server's error body.

mod client;
mod errors;
mod payload;
mod request;
mod transport;
pub use self::client::Client;
pub use self::errors::{Error, TransportError};
pub use self::payload::Payload;
pub use self::request::{Method, RequestOptions, APPLICATION_JSON, CONTENT_TYPE};
pub use self::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
