// tests/builtin_safe_ops.rs

use std::collections::HashMap;

use exhausterr::builtin::{
    BadIndex, BadKey, ZeroDivision, safe_divide, safe_get, safe_get_or, safe_index,
};
use exhausterr::{Err, Error, ExceptionType, Ok};
use exhausterr_test_utils::expect_exception;

fn sample_map() -> HashMap<String, u32> {
    HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)])
}

#[test]
fn safe_divide_rejects_zero_only() {
    assert_eq!(safe_divide(10.0, 4.0), Ok(2.5));
    assert_eq!(safe_divide(-0.0, 3.0), Ok(-0.0));
    assert_eq!(safe_divide(1.0, 0.0), Err(ZeroDivision));
    assert_eq!(safe_divide(1.0, -0.0), Err(ZeroDivision));
}

#[test]
fn safe_get_reports_the_missing_key() {
    let map = sample_map();

    assert_eq!(safe_get(&map, "a"), Ok(&1));

    match safe_get(&map, "zz") {
        Ok(v) => panic!("unexpected value {v}"),
        Err(err) => {
            assert_eq!(err, BadKey::for_key("zz"));
            assert_eq!(err.exception_type(), ExceptionType::KEY);
            assert_eq!(err.describe(), "Mapping has no key \"zz\"");
        }
    }
}

#[test]
fn safe_get_or_falls_back_to_default() {
    let map = sample_map();
    let fallback = 0;

    assert_eq!(safe_get_or(&map, "b", &fallback), Ok(&2));
    assert_eq!(safe_get_or(&map, "missing", &fallback), Ok(&0));
}

#[test]
fn safe_index_reports_position_and_length() {
    let items = ["x", "y"];

    assert_eq!(safe_index(&items, 1), Ok(&"y"));

    let Err(err) = safe_index(&items, 5) else {
        panic!("index 5 should be out of range");
    };
    assert_eq!(err, BadIndex::new(5, 2));
    assert_eq!(err.fields().get("index"), Some("5"));
    assert_eq!(err.fields().get("len"), Some("2"));
    assert_eq!(err.describe(), "Index 5 is out of range for length 2");
}

#[test]
fn unwrapping_a_bad_index_raises_index_exception() {
    let items = vec![1, 2, 3];
    let exception = expect_exception(|| *safe_index(&items, 3).unwrap());

    assert!(exception.is(ExceptionType::INDEX));
    assert_eq!(exception.fields().get("len"), Some("3"));
}

#[test]
fn builtin_errors_collect_notes_for_the_exception() {
    let map = sample_map();

    let Err(mut err) = safe_get(&map, "k") else {
        panic!("key k should be missing");
    };
    err.add_notes(["context"]).expect("builtin errors store notes");
    err.add_notes(["loading profile"]).expect("builtin errors store notes");

    // notes never change what the error is
    assert_eq!(err, BadKey::for_key("k"));
    assert_eq!(err.notes(), ["context", "loading profile"]);

    let exception = err.to_exception();
    assert!(exception.is(ExceptionType::KEY));
    assert_eq!(exception.notes(), ["context", "loading profile"]);

    let res: exhausterr::Result<(), BadKey> = Err(err);
    let raised = expect_exception(move || res.expect("resolving user"));
    assert_eq!(raised.notes(), ["context", "loading profile", "resolving user"]);
}
