//! Error context extension tests

use mcc_domain::error::Error;
use mcc_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let err = io_failure().io_context("Failed to read mcc.toml").unwrap_err();

    assert!(matches!(err, Error::Io { source: Some(_), .. }));
    assert!(err.to_string().contains("Failed to read mcc.toml: gone"));
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Bad config").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_context_is_internal() {
    let err = io_failure().context("Startup").unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            evaluated = true;
            "never"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!evaluated);
}
