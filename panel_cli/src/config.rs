//! Connection settings, resolved from flags, then the environment (including
//! `.env`), then built-in defaults.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use panel_api::{Client, ReqwestTransport};

/// Backend origin the dev server proxies `/api` to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_VAR: &str = "PANEL_API_URL";
pub const TIMEOUT_VAR: &str = "PANEL_API_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Resolves against the process environment.
    pub fn resolve(base_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::resolve_with(base_url, timeout_secs, |key| std::env::var(key).ok())
    }

    /// Resolves against an arbitrary variable lookup.
    pub fn resolve_with<F>(base_url: Option<&str>, timeout_secs: Option<u64>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base_url)
            .with_context(|| format!("Invalid base URL: {}", base_url))?;

        let timeout_secs = match timeout_secs {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_VAR) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client(&self) -> Result<Client> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Client::new(ReqwestTransport::with_client(&self.base_url, http)))
    }
}

/// Parses a `Name: value` header argument.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("Header must look like 'Name: value', got '{}'", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Header name is empty in '{}'", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}
