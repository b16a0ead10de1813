// src/core/net.rs
// Blocking HTTP GET for delivery documents.
//
// One request per call, no retries. The caller decides what a failure means.

use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};
use serde_json::Value;

use crate::config::consts::{DATA_ENDPOINT, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

pub fn client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// `{base}/widget/welcome/get_data?path=Delivery_{innings}_{over}_{ball}_{match}.json`
pub fn delivery_url(base: &str, innings: u32, over: u32, ball: u32, match_id: &str) -> String {
    format!(
        "{}{}?path=Delivery_{}_{}_{}_{}.json",
        base.trim_end_matches('/'),
        DATA_ENDPOINT,
        innings,
        over,
        ball,
        match_id
    )
}

/// GET `url` and parse the body as JSON.
///
/// * `Ok(None)`: 404 or an empty body, i.e. nothing bowled at this slot.
/// * `Ok(Some(doc))`: parsed document (may still be "empty", see `json::is_empty_document`).
/// * `Err(_)`: transport failure, other non-2xx status, or a body that isn't JSON.
pub fn get_json(client: &Client, url: &str) -> Result<Option<Value>, FetchError> {
    let transport = |source| FetchError::Transport { url: s!(url), source };

    let resp = client.get(url).send().map_err(transport)?;
    let status = resp.status();

    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp.text().map_err(transport)?;
    parse_body(url, &body)
}

fn parse_body(url: &str, body: &str) -> Result<Option<Value>, FetchError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|source| FetchError::Decode { url: s!(url), source })
}
