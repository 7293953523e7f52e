mod config;
mod polling;
mod router;

pub use config::{
    LinkKitOptions, LinkKitOptionsBuilder, DEFAULT_INITIAL_POLL_DELAY,
    DEFAULT_MAX_NUMBER_OF_RETRIES, DEFAULT_RETRY_INTERVAL, DEFAULT_TIMEOUT,
};
pub use polling::{
    PollHandle, PollOperation, PollTimingOptions, PollTimingOptionsBuilder, PollingEngine,
};
pub use router::{
    resolve, InMemoryOverrideStore, NoOverrides, OverrideStore, ASSIGNMENT_TREATMENT,
    EXPERIMENT_MOBILE_NATIVE, KILLSWITCH_NATIVE_VERSION, NATIVE_OVERRIDE_KEY,
};
