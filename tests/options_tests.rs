use linkkit::{ErrorCode, LinkKitOptions};
use std::time::Duration;

#[test]
fn test_default_values() {
    let options = LinkKitOptions::new("sk_test_key");

    assert_eq!(options.api_key, "sk_test_key");
    assert_eq!(options.timeout, Duration::from_secs(10));
    assert!(options.local_port.is_none());
}

#[test]
fn test_builder_custom_values() {
    let options = LinkKitOptions::builder("sk_test_key")
        .timeout(Duration::from_secs(30))
        .local_port(8200)
        .build();

    assert_eq!(options.timeout, Duration::from_secs(30));
    assert_eq!(options.local_port, Some(8200));
}

#[test]
fn test_local_port_none_by_default() {
    let options = LinkKitOptions::builder("sk_test_key").build();
    assert!(options.local_port.is_none());
}

#[test]
fn test_validate_valid_secret_key() {
    let options = LinkKitOptions::new("sk_test_key");
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_valid_publishable_key() {
    let options = LinkKitOptions::new("pk_test_key");
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_empty_api_key() {
    let options = LinkKitOptions::new("");
    let result = options.validate();

    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalidApiKey);
}

#[test]
fn test_validate_invalid_api_key_prefix() {
    let options = LinkKitOptions::new("invalid_key");
    let result = options.validate();

    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalidApiKey);
}

#[test]
fn test_validate_zero_timeout() {
    let options = LinkKitOptions::builder("sk_test_key")
        .timeout(Duration::ZERO)
        .build();
    let result = options.validate();

    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalidTimeout);
}

#[test]
fn test_options_clone() {
    let options = LinkKitOptions::builder("sk_test_key")
        .timeout(Duration::from_secs(5))
        .local_port(8200)
        .build();

    let cloned = options.clone();

    assert_eq!(cloned.api_key, options.api_key);
    assert_eq!(cloned.timeout, options.timeout);
    assert_eq!(cloned.local_port, options.local_port);
}

#[test]
fn test_options_debug() {
    let options = LinkKitOptions::new("sk_test_key");
    let debug_str = format!("{:?}", options);

    assert!(debug_str.contains("sk_test_key"));
    assert!(debug_str.contains("LinkKitOptions"));
}
