//! LinkKit Rust SDK Lab
//!
//! Internal verification script for SDK functionality. Runs entirely
//! offline against stubbed operations. Run with: cargo run --bin sdk-lab

use linkkit::{
    resolve, ErrorCode, Flow, InMemoryOverrideStore, LinkKitError, LinkKitOptions, LinkManifest,
    LinkSession, NoOverrides, PollTimingOptions, PollingEngine, Product, ASSIGNMENT_TREATMENT,
    EXPERIMENT_MOBILE_NATIVE, KILLSWITCH_NATIVE_VERSION, NATIVE_OVERRIDE_KEY,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

const PASS: &str = "\x1b[32m[PASS]\x1b[0m";
const FAIL: &str = "\x1b[31m[FAIL]\x1b[0m";

#[tokio::main]
async fn main() {
    println!("=== LinkKit Rust SDK Lab ===\n");

    let mut passed = 0;
    let mut failed = 0;

    macro_rules! check {
        ($test:expr, $ok:expr) => {{
            if $ok {
                println!("{} {}", PASS, $test);
                passed += 1;
            } else {
                println!("{} {}", FAIL, $test);
                failed += 1;
            }
        }};
    }

    // Options validation
    println!("Testing options...");
    check!(
        "validate accepts sk_ keys",
        LinkKitOptions::new("sk_lab_key").validate().is_ok()
    );
    check!(
        "validate rejects malformed keys",
        LinkKitOptions::new("lab_key").validate().is_err()
    );

    // Flow routing
    println!("\nTesting flow routing...");
    let mut manifest = LinkManifest::new("las_lab", Product::Connections);
    check!(
        "bare manifest resolves web",
        resolve(&manifest, &NoOverrides) == Flow::ConnectionsWeb
    );

    manifest.experiment_assignments.insert(
        EXPERIMENT_MOBILE_NATIVE.to_string(),
        ASSIGNMENT_TREATMENT.to_string(),
    );
    check!(
        "treatment resolves native",
        resolve(&manifest, &NoOverrides) == Flow::ConnectionsNative
    );

    manifest
        .features
        .insert(KILLSWITCH_NATIVE_VERSION.to_string(), true);
    check!(
        "kill switch beats treatment",
        resolve(&manifest, &NoOverrides) == Flow::ConnectionsWeb
    );

    let overrides = InMemoryOverrideStore::new();
    overrides.set_bool(NATIVE_OVERRIDE_KEY, true);
    check!(
        "local override beats kill switch",
        resolve(&manifest, &overrides) == Flow::ConnectionsNative
    );

    let session = LinkSession::bootstrap(manifest, &overrides);
    check!(
        "session holds the resolved flow",
        session.flow() == Flow::ConnectionsNative && session.product() == Product::Connections
    );

    // Polling engine
    println!("\nTesting polling engine...");
    let options = PollTimingOptions::builder()
        .initial_poll_delay(Duration::from_millis(10))
        .max_number_of_retries(3)
        .retry_interval(Duration::from_millis(10))
        .build();

    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);
    let engine = PollingEngine::new(
        move || {
            let count = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if count < 1 {
                    Err(LinkKitError::new(
                        ErrorCode::HttpStillProcessing,
                        "still processing",
                    ))
                } else {
                    Ok("ready")
                }
            }
        },
        options.clone(),
    );
    let outcome = engine.start().join().await;
    check!(
        "poll retries through 202 and succeeds",
        outcome.is_ok() && attempts.load(Ordering::SeqCst) == 2
    );

    let engine: PollingEngine<()> = PollingEngine::new(
        || async {
            Err(LinkKitError::new(
                ErrorCode::HttpStillProcessing,
                "still processing",
            ))
        },
        options,
    );
    let outcome = engine.start().join().await;
    check!(
        "exhausted poll reports max retries",
        matches!(outcome, Err(e) if e.code == ErrorCode::PollingMaxRetriesReached)
    );

    print_summary(passed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn print_summary(passed: u32, failed: u32) {
    println!("\n=== Summary ===");
    println!("Passed: {}, Failed: {}", passed, failed);
}
