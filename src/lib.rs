//! LinkKit Rust SDK
//!
//! Rust client SDK for LinkKit bank-connections sessions. Two pieces do
//! the real work: a bounded polling engine for awaiting
//! eventually-consistent backend resources, and a flow router that picks
//! the native or web experience for a session from its synchronized
//! manifest.
//!
//! # Quick Start
//!
//! ```no_run
//! use linkkit::{LinkKitClient, LinkKitOptions, NoOverrides, PollTimingOptions};
//!
//! #[tokio::main]
//! async fn main() -> linkkit::Result<()> {
//!     let options = LinkKitOptions::new("sk_your_api_key");
//!     let client = LinkKitClient::new(options)?;
//!
//!     // Decide the flow once at bootstrap
//!     let session = client.bootstrap_session("las_123", &NoOverrides).await?;
//!     println!("resolved flow: {:?}", session.flow());
//!
//!     // Await the eventually-consistent accounts resource
//!     let accounts = client
//!         .poll_accounts("las_123", PollTimingOptions::default())
//!         .join()
//!         .await?;
//!     println!("{} accounts linked", accounts.data.len());
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod error;
pub mod http;
pub mod types;
mod client;

// Re-exports from types module
pub use types::{AccountList, AccountStatus, Flow, LinkManifest, LinkedAccount, Product};

// Re-exports from error module
pub use error::{ErrorCode, LinkKitError, Result};

// Re-exports from core module
pub use core::{
    resolve, InMemoryOverrideStore, LinkKitOptions, LinkKitOptionsBuilder, NoOverrides,
    OverrideStore, PollHandle, PollOperation, PollTimingOptions, PollTimingOptionsBuilder,
    PollingEngine, ASSIGNMENT_TREATMENT, DEFAULT_INITIAL_POLL_DELAY,
    DEFAULT_MAX_NUMBER_OF_RETRIES, DEFAULT_RETRY_INTERVAL, DEFAULT_TIMEOUT,
    EXPERIMENT_MOBILE_NATIVE, KILLSWITCH_NATIVE_VERSION, NATIVE_OVERRIDE_KEY,
};

// Re-exports from http module
pub use http::HttpClient;

// Re-exports from client module
pub use client::{LinkKitClient, LinkSession, SharedClient};
