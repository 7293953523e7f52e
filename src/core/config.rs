use std::time::Duration;

use crate::error::{ErrorCode, LinkKitError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_INITIAL_POLL_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_MAX_NUMBER_OF_RETRIES: u32 = 5;
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct LinkKitOptions {
    pub api_key: String,
    pub timeout: Duration,
    pub local_port: Option<u16>,
}

impl LinkKitOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            local_port: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(LinkKitError::config_error(
                ErrorCode::ConfigInvalidApiKey,
                "API key is required",
            ));
        }

        let valid_prefixes = ["sk_", "pk_"];
        if !valid_prefixes.iter().any(|p| self.api_key.starts_with(p)) {
            return Err(LinkKitError::config_error(
                ErrorCode::ConfigInvalidApiKey,
                "Invalid API key format",
            ));
        }

        if self.timeout.is_zero() {
            return Err(LinkKitError::config_error(
                ErrorCode::ConfigInvalidTimeout,
                "Timeout must be positive",
            ));
        }

        Ok(())
    }

    pub fn builder(api_key: impl Into<String>) -> LinkKitOptionsBuilder {
        LinkKitOptionsBuilder::new(api_key)
    }
}

pub struct LinkKitOptionsBuilder {
    api_key: String,
    timeout: Duration,
    local_port: Option<u16>,
}

impl LinkKitOptionsBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            local_port: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn local_port(mut self, port: u16) -> Self {
        self.local_port = Some(port);
        self
    }

    pub fn build(self) -> LinkKitOptions {
        LinkKitOptions {
            api_key: self.api_key,
            timeout: self.timeout,
            local_port: self.local_port,
        }
    }
}
