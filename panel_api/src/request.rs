//! Per-call request options and the outgoing [`HttpRequest`] they build.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, HttpRequest};

/// Header injected whenever a request carries a body.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Media type of every request body this client sends.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods accepted by the panel API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(format!("unsupported HTTP method: {}", s)),
        }
    }
}

/// Options for a single [`Client::issue`](crate::Client::issue) call.
///
/// The body is an `Option` so that presence, not emptiness, decides whether
/// it is sent: `{}`, `[]` and `null` are all transmitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// Defaults to `GET`.
    pub method: Method,
    /// Caller headers, copied into every request built from these options.
    pub headers: BTreeMap<String, String>,
    /// JSON body. `None` sends no body and no content type.
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Encodes `body` as JSON and attaches it.
    pub fn with_json<B>(self, body: &B) -> Result<Self, Error>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)?;
        Ok(self.with_body(value))
    }

    /// Materializes the outgoing request for `path`, leaving `self` untouched.
    ///
    /// With a body present, any caller-supplied content type (matched
    /// case-insensitively) is replaced by `Content-Type: application/json`.
    pub fn build(&self, path: &str) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let body = self.body.as_ref().map(|value| {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE));
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
            value.to_string()
        });

        HttpRequest {
            method: self.method,
            path: path.to_string(),
            headers,
            body,
        }
    }
}
