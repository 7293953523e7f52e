//! Flow routing: the one-shot decision between native and web experiences.
//!
//! [`resolve`] is a pure function over a synchronized [`LinkManifest`] and
//! a local override provider. It runs once at session bootstrap; the
//! resulting [`Flow`] is held for the session's lifetime and never
//! re-evaluated.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::types::{Flow, LinkManifest};

/// Experiment gating the native mobile experience.
pub const EXPERIMENT_MOBILE_NATIVE: &str = "mobile_native";

/// Assignment value that enables the native path.
pub const ASSIGNMENT_TREATMENT: &str = "treatment";

/// Kill switch that forces the web experience regardless of experiment
/// assignment. Kill switches only ever force web, never native.
pub const KILLSWITCH_NATIVE_VERSION: &str = "mobile_native_killswitch";

/// Settings key for the local developer override.
pub const NATIVE_OVERRIDE_KEY: &str = "LINK_EXAMPLE_APP_ENABLE_NATIVE";

/// Local, app-scoped settings store consulted for developer overrides.
pub trait OverrideStore: Send + Sync {
    /// Boolean stored under `key`, if any.
    fn bool_value(&self, key: &str) -> Option<bool>;
}

/// Override store with nothing in it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverrides;

impl OverrideStore for NoOverrides {
    fn bool_value(&self, _key: &str) -> Option<bool> {
        None
    }
}

/// In-memory override store, used by the example app and tests.
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    values: RwLock<HashMap<String, bool>>,
}

impl InMemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&self, key: impl Into<String>, value: bool) {
        self.values.write().insert(key.into(), value);
    }

    pub fn clear(&self, key: &str) {
        self.values.write().remove(key);
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn bool_value(&self, key: &str) -> Option<bool> {
        self.values.read().get(key).copied()
    }
}

/// Resolve which flow a session should take.
///
/// Precedence, highest first:
/// 1. local override under [`NATIVE_OVERRIDE_KEY`] — `true` forces native,
///    `false` forces web;
/// 2. the [`KILLSWITCH_NATIVE_VERSION`] feature — active forces web;
/// 3. the [`EXPERIMENT_MOBILE_NATIVE`] assignment — treatment selects
///    native;
/// 4. web.
///
/// Total over its inputs: missing or malformed manifest fields resolve to
/// the web flow for the manifest's product.
pub fn resolve(manifest: &LinkManifest, overrides: &dyn OverrideStore) -> Flow {
    let product = manifest.product();

    if let Some(enable_native) = overrides.bool_value(NATIVE_OVERRIDE_KEY) {
        let flow = if enable_native {
            Flow::native(product)
        } else {
            Flow::web(product)
        };
        tracing::debug!(?flow, enable_native, "Flow forced by local override");
        return flow;
    }

    if manifest.feature_active(KILLSWITCH_NATIVE_VERSION) {
        let flow = Flow::web(product);
        tracing::debug!(?flow, "Native kill switch active, forcing web flow");
        return flow;
    }

    if manifest.assignment(EXPERIMENT_MOBILE_NATIVE) == Some(ASSIGNMENT_TREATMENT) {
        let flow = Flow::native(product);
        tracing::debug!(?flow, "Native experiment treatment, selecting native flow");
        return flow;
    }

    let flow = Flow::web(product);
    tracing::debug!(?flow, "No native signal, defaulting to web flow");
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    #[test]
    fn test_in_memory_store_roundtrip() {
        let store = InMemoryOverrideStore::new();
        assert_eq!(store.bool_value(NATIVE_OVERRIDE_KEY), None);

        store.set_bool(NATIVE_OVERRIDE_KEY, true);
        assert_eq!(store.bool_value(NATIVE_OVERRIDE_KEY), Some(true));

        store.clear(NATIVE_OVERRIDE_KEY);
        assert_eq!(store.bool_value(NATIVE_OVERRIDE_KEY), None);
    }

    #[test]
    fn test_empty_manifest_defaults_to_web() {
        let manifest = LinkManifest::new("las_1", Product::Connections);
        assert_eq!(resolve(&manifest, &NoOverrides), Flow::ConnectionsWeb);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut manifest = LinkManifest::new("las_1", Product::InstantDebits);
        manifest
            .experiment_assignments
            .insert(EXPERIMENT_MOBILE_NATIVE.to_string(), ASSIGNMENT_TREATMENT.to_string());

        let first = resolve(&manifest, &NoOverrides);
        for _ in 0..10 {
            assert_eq!(resolve(&manifest, &NoOverrides), first);
        }
        assert_eq!(first, Flow::InstantDebitsNative);
    }
}
