//! HTTP retry helper.
//!
//! The fetch path goes through [`send_json`] instead of calling
//! `reqwest::RequestBuilder::send()` directly, so every request gets the
//! same automatic retry policy: up to 3 extra attempts with exponential
//! backoff on transport errors, non-success statuses, and response
//! bodies that cannot be decoded as JSON.

use std::time::Duration;

use crate::SourceError;

/// Maximum number of retry attempts after a failed request.
///
/// With exponential backoff (2s, 4s, 8s) the total wait before giving up
/// is 14 seconds.
const MAX_RETRIES: u32 = 3;

/// Sends an HTTP request and parses the response body as JSON.
///
/// The `build_request` closure is called on each attempt to construct a
/// fresh [`reqwest::RequestBuilder`], since builders are consumed by
/// `.send()`.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the transport still fails or the
/// body still cannot be decoded on the last attempt, and
/// [`SourceError::Status`] if the server still answers with a
/// non-success status after all retries.
#[allow(clippy::future_not_send)]
pub async fn send_json<F>(build_request: F) -> Result<serde_json::Value, SourceError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut last_error: Option<SourceError> = None;

    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(1u64 << attempt); // 2s, 4s, 8s
            log::warn!("  retry {attempt}/{MAX_RETRIES} in {delay:?}...");
            tokio::time::sleep(delay).await;
        }

        match build_request().send().await {
            Err(e) => {
                if attempt < MAX_RETRIES {
                    log::warn!("  transport error: {e}");
                    last_error = Some(SourceError::Http(e));
                    continue;
                }
                return Err(SourceError::Http(e));
            }
            Ok(response) => {
                let status = response.status();

                if !status.is_success() {
                    if attempt < MAX_RETRIES {
                        log::warn!("  HTTP {status}");
                        last_error = Some(SourceError::Status { status });
                        continue;
                    }
                    return Err(SourceError::Status { status });
                }

                // A truncated or garbled body is as transient as a
                // dropped connection; re-fetch it like any other failure.
                match response.json::<serde_json::Value>().await {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        if attempt < MAX_RETRIES {
                            log::warn!("  body decode failed: {e}");
                            last_error = Some(SourceError::Http(e));
                            continue;
                        }
                        return Err(SourceError::Http(e));
                    }
                }
            }
        }
    }

    // Should be unreachable, but in case the loop exits without returning:
    Err(last_error.unwrap_or_else(|| SourceError::Format {
        message: "request failed after all retries".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves each canned response to one connection, then stops
    /// accepting. Returns the URL and a counter of connections served.
    async fn serve(responses: Vec<String>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/data.json", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0_u8; 2048];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, hits)
    }

    fn status_response(status: &str) -> String {
        format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    // start_paused makes the backoff sleeps complete instantly.

    #[tokio::test(start_paused = true)]
    async fn retries_server_errors_until_success() {
        let (url, hits) = serve(vec![
            status_response("500 Internal Server Error"),
            status_response("500 Internal Server Error"),
            json_response("[]"),
        ])
        .await;

        let client = reqwest::Client::new();
        let value = send_json(|| client.get(&url)).await.unwrap();

        assert_eq!(value, serde_json::json!([]));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn surfaces_the_status_after_exhausting_retries() {
        let (url, hits) = serve(vec![status_response("500 Internal Server Error"); 4]).await;

        let client = reqwest::Client::new();
        let err = send_json(|| client.get(&url)).await.unwrap_err();

        assert!(matches!(
            err,
            SourceError::Status { status } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        // The initial attempt plus MAX_RETRIES.
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn refetches_when_the_body_cannot_be_decoded() {
        let (url, hits) = serve(vec![
            json_response("{\"truncated\":"),
            json_response("[{\"incident_number\":\"21-001\"}]"),
        ])
        .await;

        let client = reqwest::Client::new();
        let value = send_json(|| client.get(&url)).await.unwrap();

        assert_eq!(value[0]["incident_number"], "21-001");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
