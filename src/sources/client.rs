use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use once_cell::sync::Lazy;
use tracing::debug;
use crate::error::{AppError, Result};

// One client shared by every source so connections are pooled
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// GETs `url` with the given query pairs and decodes the JSON body.
///
/// Keys may repeat; each pair becomes its own `key=value` in the query string.
pub async fn get_json<T: DeserializeOwned>(url: &str, params: &[(&str, String)]) -> Result<T> {
    debug!("GET {} with {} query parameters", url, params.len());
    let response = CLIENT.get(url).query(params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!("{} responded with {}", url, status)));
    }

    let body = response.json::<T>().await?;
    Ok(body)
}
