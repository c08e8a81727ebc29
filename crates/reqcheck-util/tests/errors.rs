use reqcheck_util::errors::ReqcheckError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = ReqcheckError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_parse_error_display() {
    let err = ReqcheckError::parse("unknown version operator: =>");
    assert_eq!(err.to_string(), "Parse error: unknown version operator: =>");
}

#[test]
fn test_invariant_error_display() {
    let err = ReqcheckError::invariant("version span must be non-empty");
    assert_eq!(
        err.to_string(),
        "Invariant violation: version span must be non-empty"
    );
}

#[test]
fn test_config_error_display() {
    let err = ReqcheckError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad syntax");
}

#[test]
fn test_conflict_error_lists_every_package() {
    let err = ReqcheckError::Conflict {
        conflicts: vec![
            ("requests".to_string(), ">2.28.0, <2.10".to_string()),
            ("numpy".to_string(), "==1.0.post1, ==1.1.1".to_string()),
        ],
    };
    assert_eq!(
        err.to_string(),
        "Inconsistent package specifiers: requests (>2.28.0, <2.10), numpy (==1.0.post1, ==1.1.1)"
    );
}

#[test]
fn test_generic_error_display() {
    let err = ReqcheckError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}
