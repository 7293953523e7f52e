use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::core::{resolve, LinkKitOptions, OverrideStore, PollHandle, PollTimingOptions, PollingEngine};
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{AccountList, Flow, LinkManifest, Product};

/// Client for the LinkKit API.
pub struct LinkKitClient {
    options: LinkKitOptions,
    http_client: Arc<HttpClient>,
}

impl LinkKitClient {
    pub fn new(options: LinkKitOptions) -> Result<Self> {
        options.validate()?;

        let http_client = Arc::new(HttpClient::new(options.clone())?);

        Ok(Self {
            options,
            http_client,
        })
    }

    pub fn options(&self) -> &LinkKitOptions {
        &self.options
    }

    /// Fetch the synchronized manifest for a link session.
    pub async fn synchronize(&self, session_id: &str) -> Result<LinkManifest> {
        self.http_client
            .get(&format!("/link/sessions/{}/manifest", session_id))
            .await
    }

    /// Synchronize a session and resolve its flow.
    ///
    /// The flow is decided exactly once here; the returned session holds it
    /// immutably for its lifetime.
    pub async fn bootstrap_session(
        &self,
        session_id: &str,
        overrides: &dyn OverrideStore,
    ) -> Result<LinkSession> {
        let manifest = self.synchronize(session_id).await?;
        Ok(LinkSession::bootstrap(manifest, overrides))
    }

    /// Poll a GET endpoint until it stops answering with an error.
    ///
    /// Typical use is a resource that returns 202 Accepted while the
    /// backend is still materializing it. Each call starts a fresh poll
    /// sequence with its own attempt budget.
    pub fn poll<T>(&self, path: impl Into<String>, options: PollTimingOptions) -> PollHandle<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let http_client = Arc::clone(&self.http_client);
        let path = path.into();

        PollingEngine::new(
            move || {
                let http_client = Arc::clone(&http_client);
                let path = path.clone();
                async move { http_client.get(&path).await }
            },
            options,
        )
        .start()
    }

    /// Poll the linked accounts of an authorization session.
    pub fn poll_accounts(
        &self,
        session_id: &str,
        options: PollTimingOptions,
    ) -> PollHandle<AccountList> {
        self.poll(format!("/link/sessions/{}/accounts", session_id), options)
    }
}

/// A bootstrapped link session: the synchronized manifest plus the flow
/// resolved from it. Both are immutable for the session's lifetime; the
/// flow is not a live toggle.
pub struct LinkSession {
    manifest: LinkManifest,
    flow: Flow,
}

impl LinkSession {
    pub fn bootstrap(manifest: LinkManifest, overrides: &dyn OverrideStore) -> Self {
        let flow = resolve(&manifest, overrides);
        tracing::debug!(session = %manifest.id, ?flow, "Session bootstrapped");
        Self { manifest, flow }
    }

    pub fn manifest(&self) -> &LinkManifest {
        &self.manifest
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn product(&self) -> Product {
        self.flow.product()
    }
}

pub type SharedClient = Arc<LinkKitClient>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InMemoryOverrideStore, NATIVE_OVERRIDE_KEY};
    use crate::error::ErrorCode;

    #[test]
    fn test_new_rejects_invalid_options() {
        let error = LinkKitClient::new(LinkKitOptions::new("invalid_key"))
            .err()
            .expect("expected invalid options to be rejected");
        assert_eq!(error.code, ErrorCode::ConfigInvalidApiKey);
    }

    #[test]
    fn test_session_holds_resolved_flow() {
        let manifest = LinkManifest::new("las_1", Product::Connections);
        let overrides = InMemoryOverrideStore::new();
        overrides.set_bool(NATIVE_OVERRIDE_KEY, true);

        let session = LinkSession::bootstrap(manifest, &overrides);

        assert_eq!(session.flow(), Flow::ConnectionsNative);
        assert_eq!(session.product(), Product::Connections);
        assert_eq!(session.manifest().id, "las_1");

        // Mutating the override store after bootstrap does not move the
        // already-resolved flow.
        overrides.set_bool(NATIVE_OVERRIDE_KEY, false);
        assert_eq!(session.flow(), Flow::ConnectionsNative);
    }
}
