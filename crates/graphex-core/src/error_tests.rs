//! Tests for the error taxonomy.

use super::error::{Error, ErrorKind};

#[test]
fn test_error_display() {
    let err = Error::OutOfRange { index: 7, len: 4 };
    assert_eq!(err.to_string(), "Index 7 out of range (len 4)");

    let err = Error::EdgeNotFound { from: 0, to: 3 };
    assert_eq!(err.to_string(), "Edge 0 - 3 does not exist");

    let err = Error::EmptyCollection("Queue");
    assert_eq!(err.to_string(), "Queue is empty");
}

#[test]
fn test_error_kind_matches_variant() {
    let cases = [
        (Error::OutOfRange { index: 1, len: 0 }, ErrorKind::OutOfRange),
        (
            Error::InvalidArgument("vertex count".to_string()),
            ErrorKind::InvalidArgument,
        ),
        (Error::EdgeNotFound { from: 1, to: 2 }, ErrorKind::EdgeNotFound),
        (Error::EmptyCollection("Queue"), ErrorKind::EmptyCollection),
        (Error::FullCollection { capacity: 3 }, ErrorKind::FullCollection),
        (Error::NotInCollection(9), ErrorKind::NotInCollection),
        (
            Error::InvalidKeyUpdate {
                vertex: 1,
                current: "2".to_string(),
                requested: "5".to_string(),
            },
            ErrorKind::InvalidKeyUpdate,
        ),
        (Error::Config("bad".to_string()), ErrorKind::Config),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "wrong kind for {err}");
    }
}

#[test]
fn test_error_codes_are_unique() {
    let errors = [
        Error::OutOfRange { index: 1, len: 0 },
        Error::InvalidArgument(String::new()),
        Error::EdgeNotFound { from: 1, to: 2 },
        Error::EmptyCollection("Queue"),
        Error::FullCollection { capacity: 3 },
        Error::NotInCollection(9),
        Error::InvalidKeyUpdate {
            vertex: 1,
            current: "2".to_string(),
            requested: "5".to_string(),
        },
        Error::Config(String::new()),
    ];

    let mut codes: Vec<&str> = errors.iter().map(Error::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
    assert!(codes.iter().all(|c| c.starts_with("GRAPHEX-")));
}

#[test]
fn test_check_index() {
    assert!(Error::check_index(0, 1).is_ok());
    assert_eq!(
        Error::check_index(1, 1),
        Err(Error::OutOfRange { index: 1, len: 1 })
    );
}
