use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::core::LinkKitOptions;
use crate::error::{ErrorCode, LinkKitError, Result};

const DEFAULT_BASE_URL: &str = "https://api.linkkit.dev/v1";

pub fn get_base_url(local_port: Option<u16>) -> String {
    match local_port {
        Some(port) => format!("http://localhost:{}/v1", port),
        None => DEFAULT_BASE_URL.to_string(),
    }
}

/// Thin transport for the LinkKit API.
///
/// Performs single requests only. Retrying eventually-consistent reads is
/// the polling engine's job, so a 202 Accepted surfaces here as the
/// retryable `HttpStillProcessing` error rather than being waited out.
pub struct HttpClient {
    client: Client,
    options: LinkKitOptions,
}

impl HttpClient {
    pub fn new(options: LinkKitOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| {
                LinkKitError::with_source(
                    ErrorCode::NetworkError,
                    "Failed to create HTTP client",
                    e,
                )
            })?;

        Ok(Self { client, options })
    }

    fn base_url(&self) -> String {
        get_base_url(self.options.local_port)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url(), path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.options.api_key)
            .header("User-Agent", "LinkKit-Rust/0.1.0")
            .send()
            .await
            .map_err(convert_error)?;

        handle_response(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url(), path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.options.api_key)
            .header("User-Agent", "LinkKit-Rust/0.1.0")
            .json(body)
            .send()
            .await
            .map_err(convert_error)?;

        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    // 202 means the resource is still materializing server-side; callers
    // poll until the backend answers 200.
    if status == StatusCode::ACCEPTED {
        return Err(LinkKitError::network_error(
            ErrorCode::HttpStillProcessing,
            "Resource is still processing",
        ));
    }

    if status.is_success() {
        let body = response.text().await.map_err(|e| {
            LinkKitError::with_source(ErrorCode::HttpInvalidResponse, "Failed to read response", e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            LinkKitError::with_source(
                ErrorCode::HttpInvalidResponse,
                format!("Failed to parse response: {}", e),
                e,
            )
        })
    } else {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Request failed");
        Err(status_to_error(status, &body))
    }
}

fn status_to_error(status: StatusCode, body: &str) -> LinkKitError {
    let (code, category) = match status {
        StatusCode::BAD_REQUEST => (ErrorCode::HttpBadRequest, "Client Error"),
        StatusCode::UNAUTHORIZED => (ErrorCode::HttpUnauthorized, "Authentication Error"),
        StatusCode::FORBIDDEN => (ErrorCode::HttpForbidden, "Authorization Error"),
        StatusCode::NOT_FOUND => (ErrorCode::HttpNotFound, "Not Found"),
        StatusCode::TOO_MANY_REQUESTS => (ErrorCode::HttpRateLimited, "Rate Limited"),
        s if s.is_server_error() => (ErrorCode::HttpServerError, "Server Error"),
        s if s.is_client_error() => (ErrorCode::HttpBadRequest, "Client Error"),
        _ => (ErrorCode::HttpServerError, "Server Error"),
    };

    LinkKitError::network_error(code, format!("{}: {} - {}", category, status.as_u16(), body))
}

fn convert_error(error: reqwest::Error) -> LinkKitError {
    if error.is_timeout() {
        LinkKitError::with_source(ErrorCode::HttpTimeout, "Request timed out", error)
    } else if error.is_connect() {
        LinkKitError::with_source(ErrorCode::HttpNetworkError, "Connection failed", error)
    } else {
        let message = error.to_string();
        LinkKitError::with_source(ErrorCode::NetworkError, message, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_default() {
        let options = LinkKitOptions::builder("sk_test_key").build();
        let client = HttpClient::new(options).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_with_local_port() {
        let options = LinkKitOptions::builder("sk_test_key")
            .local_port(8200)
            .build();
        let client = HttpClient::new(options).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8200/v1");
    }

    #[test]
    fn test_get_base_url_none() {
        assert_eq!(get_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_get_base_url_with_port() {
        assert_eq!(get_base_url(Some(3000)), "http://localhost:3000/v1");
    }

    #[test]
    fn test_status_to_error_mapping() {
        let cases = [
            (StatusCode::BAD_REQUEST, ErrorCode::HttpBadRequest),
            (StatusCode::UNAUTHORIZED, ErrorCode::HttpUnauthorized),
            (StatusCode::FORBIDDEN, ErrorCode::HttpForbidden),
            (StatusCode::NOT_FOUND, ErrorCode::HttpNotFound),
            (StatusCode::TOO_MANY_REQUESTS, ErrorCode::HttpRateLimited),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::HttpServerError),
            (StatusCode::BAD_GATEWAY, ErrorCode::HttpServerError),
        ];

        for (status, expected) in cases {
            let error = status_to_error(status, "");
            assert_eq!(error.code, expected, "status {}", status);
        }
    }
}
