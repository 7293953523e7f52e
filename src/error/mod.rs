use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Configuration errors
    ConfigInvalidApiKey,
    ConfigInvalidTimeout,

    // Network errors
    NetworkError,
    NetworkTimeout,

    // HTTP errors
    HttpBadRequest,
    HttpUnauthorized,
    HttpForbidden,
    HttpNotFound,
    HttpRateLimited,
    HttpServerError,
    HttpTimeout,
    HttpNetworkError,
    HttpInvalidResponse,
    HttpStillProcessing,

    // Polling errors
    PollingMaxRetriesReached,
    PollingCancelled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidApiKey => "CONFIG_INVALID_API_KEY",
            ErrorCode::ConfigInvalidTimeout => "CONFIG_INVALID_TIMEOUT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::NetworkTimeout => "NETWORK_TIMEOUT",
            ErrorCode::HttpBadRequest => "HTTP_BAD_REQUEST",
            ErrorCode::HttpUnauthorized => "HTTP_UNAUTHORIZED",
            ErrorCode::HttpForbidden => "HTTP_FORBIDDEN",
            ErrorCode::HttpNotFound => "HTTP_NOT_FOUND",
            ErrorCode::HttpRateLimited => "HTTP_RATE_LIMITED",
            ErrorCode::HttpServerError => "HTTP_SERVER_ERROR",
            ErrorCode::HttpTimeout => "HTTP_TIMEOUT",
            ErrorCode::HttpNetworkError => "HTTP_NETWORK_ERROR",
            ErrorCode::HttpInvalidResponse => "HTTP_INVALID_RESPONSE",
            ErrorCode::HttpStillProcessing => "HTTP_STILL_PROCESSING",
            ErrorCode::PollingMaxRetriesReached => "POLLING_MAX_RETRIES_REACHED",
            ErrorCode::PollingCancelled => "POLLING_CANCELLED",
        }
    }
}

#[derive(Error, Debug)]
#[error("[{code}] {message}")]
pub struct LinkKitError {
    pub code: ErrorCode,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LinkKitError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn config_error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code, message)
    }

    pub fn network_error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code, message)
    }

    /// Terminal error for a poll sequence that exhausted its attempt budget.
    ///
    /// The last attempt's failure is carried as `source` so callers can log
    /// it, but the code is always `PollingMaxRetriesReached`.
    pub fn max_retries_reached(attempts: u32, last_error: Option<LinkKitError>) -> Self {
        Self {
            code: ErrorCode::PollingMaxRetriesReached,
            message: format!("Polling gave up after {} attempts", attempts),
            source: last_error.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    pub fn cancelled() -> Self {
        Self::new(
            ErrorCode::PollingCancelled,
            "Poll was cancelled before completing",
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ConfigInvalidApiKey | ErrorCode::ConfigInvalidTimeout
        )
    }

    pub fn is_network_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NetworkError
                | ErrorCode::NetworkTimeout
                | ErrorCode::HttpBadRequest
                | ErrorCode::HttpUnauthorized
                | ErrorCode::HttpForbidden
                | ErrorCode::HttpNotFound
                | ErrorCode::HttpRateLimited
                | ErrorCode::HttpServerError
                | ErrorCode::HttpTimeout
                | ErrorCode::HttpNetworkError
                | ErrorCode::HttpInvalidResponse
                | ErrorCode::HttpStillProcessing
        )
    }

    /// Whether this is one of the outcomes a poll sequence itself produces.
    ///
    /// Per-attempt errors are never terminal on their own; the polling
    /// engine retries every operation error until its budget is spent.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::PollingMaxRetriesReached | ErrorCode::PollingCancelled
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, LinkKitError>;
