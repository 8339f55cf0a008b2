//! The `get`, `post`, `put`, `patch` and `delete` subcommands.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use panel_api::{Client, Method, RequestOptions};
use serde_json::Value;

use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct PathArgs {
    /// Request path, e.g. /api/routes
    pub path: String,
}

#[derive(Args)]
pub struct BodyArgs {
    /// Request path, e.g. /api/routes
    pub path: String,

    /// JSON request body
    #[arg(long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the JSON request body from a file ("-" for stdin)
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

impl BodyArgs {
    /// The body to send, if any was given. Must be valid JSON.
    pub fn body(&self) -> Result<Option<Value>> {
        let raw = match (&self.data, &self.data_file) {
            (Some(data), _) => data.clone(),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read request body from stdin")?;
                buf
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => return Ok(None),
        };
        parse_body(&raw).map(Some)
    }
}

fn parse_body(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("Request body is not valid JSON")
}

pub fn build_options(
    method: Method,
    headers: &[(String, String)],
    body: Option<Value>,
) -> RequestOptions {
    let mut options = RequestOptions::new().with_method(method);
    for (name, value) in headers {
        options = options.with_header(name.clone(), value.clone());
    }
    if let Some(body) = body {
        options = options.with_body(body);
    }
    options
}

pub async fn run(
    client: &Client,
    path: &str,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let payload = client.issue(path, options).await?;
    print_payload(&payload, format)
}
