//! Single-shot JSON request helper.
//!
//! Every endpoint call goes through [`send_json`], which sends the request
//! once (the portal never retries on its own), maps transport failures,
//! timeouts and non-success statuses to [`ClientError`], and decodes the
//! body into the endpoint's response type.
//!
//! ```ignore
//! let rows: Vec<DistrictRow> =
//!     request::send_json(client.get(&url).query(&[("year", "2019")])).await?;
//! ```

use legal_portal_api_models::ApiErrorBody;
use serde::de::DeserializeOwned;

use crate::ClientError;

/// Maximum length of the response body preview included in error logs.
const BODY_PREVIEW_LEN: usize = 500;

/// Sends `request` and decodes the response body as `T`.
///
/// The body is read as text first so that a decode failure can log what
/// the backend actually sent.
///
/// # Errors
///
/// * [`ClientError::Timeout`] if the configured timeout elapses.
/// * [`ClientError::Http`] if the connection fails.
/// * [`ClientError::Status`] for a non-2xx response.
/// * [`ClientError::Decode`] if the body is not valid JSON for `T`.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await.map_err(classify)?;

    let url = response.url().to_string();
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let text = response.text().await.map_err(classify)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .map(|body| body.error);
        log::warn!("HTTP {status} from {url}: {message:?}");
        return Err(ClientError::Status {
            status: status.as_u16(),
            url,
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        log::warn!(
            "Response decode failed.\n  \
             url: {url}\n  \
             status: {status}\n  \
             content-type: {content_type:?}\n  \
             received: {} bytes\n  \
             parse error: {e}\n  \
             body preview: {}",
            text.len(),
            preview(&text),
        );
        ClientError::Decode {
            url,
            message: e.to_string(),
        }
    })
}

/// Separates timeouts from other transport failures.
fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        let url = e.url().map(ToString::to_string).unwrap_or_default();
        log::warn!("Request timed out: {url}");
        ClientError::Timeout { url }
    } else {
        log::warn!("Request failed: {e}");
        ClientError::Http(e)
    }
}

/// First [`BODY_PREVIEW_LEN`] bytes of `text`, cut on a char boundary.
fn preview(text: &str) -> String {
    if text.len() <= BODY_PREVIEW_LEN {
        return text.to_string();
    }
    let mut end = BODY_PREVIEW_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_not_truncated() {
        assert_eq!(preview("{}"), "{}");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "\u{0939}".repeat(400);
        let cut = preview(&body);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= BODY_PREVIEW_LEN + 3);
    }
}
