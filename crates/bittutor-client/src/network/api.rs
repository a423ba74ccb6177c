use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::error::{Result, SubmitError};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// POST `body` as JSON and return the reply text.
///
/// The status code is not treated as an error: the server reports failures
/// inside the body, so a non-2xx reply is logged and still returned.
pub async fn post<B: Serialize>(client: &reqwest::Client, url: &str, body: &B) -> Result<String> {
    let body = serde_json::to_vec(body).map_err(SubmitError::Encode)?;

    let response = client
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Server answered with status {}", status);
    }

    Ok(response.text().await?)
}
