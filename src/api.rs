//! Synchronous client for the temperature dataset endpoint.
//!
//! One GET, one JSON decode, one validation pass. Failures are returned to the caller and
//! never retried.
//!
//! Typical usage:
//! ```no_run
//! # use gtv_heatmap::Client;
//! let client = Client::default();
//! let data = client.load_dataset(gtv_heatmap::models::DEFAULT_DATASET_URL)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
use crate::models::{DEFAULT_DATASET_URL, Dataset};
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL).expect("reqwest client build")
    }
}

impl Client {
    /// Build a client bound to `url`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("gtv_heatmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// Fetch the dataset from the bound URL.
    pub fn fetch(&self) -> Result<Dataset> {
        self.load_dataset(&self.url)
    }

    /// Fetch and validate the dataset at `url`.
    ///
    /// ### Errors
    /// - Network error or non-success HTTP status
    /// - JSON decoding error
    /// - Dataset validation error (`models::DatasetError`)
    pub fn load_dataset(&self, url: &str) -> Result<Dataset> {
        log::info!("fetching dataset from {}", url);
        let resp = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        let data: Dataset = resp.json().context("decode json")?;
        checked(data)
    }
}

/// Decode and validate a dataset document.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let data: Dataset = serde_json::from_str(json).context("decode json")?;
    checked(data)
}

fn checked(data: Dataset) -> Result<Dataset> {
    data.validate().context("validate dataset")?;
    log::debug!(
        "dataset: base temperature {}°C, {} monthly records",
        data.base_temperature,
        data.monthly_variance.len()
    );
    log::trace!("{:?}", data.monthly_variance);
    Ok(data)
}
