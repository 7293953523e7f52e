use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product variant of a link session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Connections,
    InstantDebits,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Connections => "connections",
            Product::InstantDebits => "instant_debits",
        }
    }

    /// Parse a manifest product string.
    ///
    /// Unrecognized strings fall back to `Connections`, the conservative
    /// product, so routing stays total over malformed manifests.
    pub fn parse(value: &str) -> Product {
        match value {
            "instant_debits" => Product::InstantDebits,
            _ => Product::Connections,
        }
    }
}

/// One of the mutually exclusive execution paths a session can take.
///
/// Chosen once at session bootstrap and held for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    ConnectionsNative,
    ConnectionsWeb,
    InstantDebitsNative,
    InstantDebitsWeb,
}

impl Flow {
    pub fn native(product: Product) -> Flow {
        match product {
            Product::Connections => Flow::ConnectionsNative,
            Product::InstantDebits => Flow::InstantDebitsNative,
        }
    }

    pub fn web(product: Product) -> Flow {
        match product {
            Product::Connections => Flow::ConnectionsWeb,
            Product::InstantDebits => Flow::InstantDebitsWeb,
        }
    }

    pub fn product(&self) -> Product {
        match self {
            Flow::ConnectionsNative | Flow::ConnectionsWeb => Product::Connections,
            Flow::InstantDebitsNative | Flow::InstantDebitsWeb => Product::InstantDebits,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Flow::ConnectionsNative | Flow::InstantDebitsNative)
    }
}

/// Server-delivered snapshot of session configuration.
///
/// Synchronized once at session bootstrap; flow routing reads it as an
/// immutable snapshot and never re-fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkManifest {
    pub id: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub experiment_assignments: HashMap<String, String>,
    #[serde(default)]
    pub features: HashMap<String, bool>,
    pub synchronized_at: Option<DateTime<Utc>>,
}

impl LinkManifest {
    pub fn new(id: impl Into<String>, product: Product) -> Self {
        Self {
            id: id.into(),
            product: product.as_str().to_string(),
            experiment_assignments: HashMap::new(),
            features: HashMap::new(),
            synchronized_at: None,
        }
    }

    pub fn product(&self) -> Product {
        Product::parse(&self.product)
    }

    /// Experiment assignment for `name`, if the server delivered one.
    pub fn assignment(&self, name: &str) -> Option<&str> {
        self.experiment_assignments.get(name).map(|s| s.as_str())
    }

    /// Whether the named feature flag is active. Missing flags are inactive.
    pub fn feature_active(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

/// A bank account attached to an authorization session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub id: String,
    pub institution_name: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    pub last4: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Disconnected,
}

/// Paged list of linked accounts, the eventually-consistent resource the
/// accounts poll awaits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountList {
    pub data: Vec<LinkedAccount>,
    #[serde(default)]
    pub has_more: bool,
}
