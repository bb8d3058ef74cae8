// tests/result_variants.rs

use exhausterr::builtin::{ArithmeticError, ZeroDivision, safe_int_divide};
use exhausterr::{Err, Error, NoneOr, Ok, Result};
use exhausterr_test_utils::builders::{Bare, Unmapped};
use exhausterr_test_utils::init_tracing;

#[test]
fn ok_is_truthy_whatever_the_payload() {
    init_tracing();

    assert!(bool::from(&Ok::<i32, Bare>(0)));
    assert!(bool::from(&Ok::<&str, Bare>("")));
    assert!(bool::from(&Ok::<(), Bare>(())));
    assert!(bool::from(&Ok::<Option<u8>, Bare>(None)));
    assert!(bool::from(&Ok::<Vec<u8>, Bare>(Vec::new())));

    // An error-looking payload on the success side is still a success.
    let wrapped: Result<Bare, ZeroDivision> = Ok(Bare);
    assert!(wrapped.is_ok());
    assert!(!wrapped.is_err());
}

#[test]
fn err_is_falsy() {
    let res: Result<i32, ZeroDivision> = Err(ZeroDivision);
    assert!(!bool::from(&res));
    assert!(!bool::from(res));
    assert!(res.is_err());
}

#[test]
fn unwrap_on_ok_returns_payload_unchanged() {
    let payload = vec![1, 2, 3];
    let res: Result<Vec<i32>, Bare> = Ok(payload.clone());
    assert_eq!(res.unwrap(), payload);
}

#[test]
fn structural_equality() {
    assert_eq!(Ok::<i32, Bare>(1), Ok(1));
    assert_ne!(Ok::<i32, Bare>(1), Ok(2));
    assert_ne!(Ok::<i32, Bare>(1), Err(Bare));

    let a: Result<(), Unmapped> = Err(Unmapped {
        reason: "x".to_string(),
    });
    let b: Result<(), Unmapped> = Err(Unmapped {
        reason: "x".to_string(),
    });
    let c: Result<(), Unmapped> = Err(Unmapped {
        reason: "y".to_string(),
    });
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn division_scenario_is_handled_exhaustively() {
    assert_eq!(safe_int_divide(10, 2), Ok(5));
    assert_eq!(safe_int_divide(10, 0), Err(ArithmeticError::ZeroDivision(ZeroDivision)));

    let describe = |res: Result<i64, ArithmeticError>| match res {
        Ok(v) => format!("ok {v}"),
        Err(ArithmeticError::ZeroDivision(_)) => "zero".to_string(),
        Err(ArithmeticError::Overflow(o)) => format!("overflow in {}", o.operation),
    };

    assert_eq!(describe(safe_int_divide(10, 2)), "ok 5");
    assert_eq!(describe(safe_int_divide(10, 0)), "zero");
    assert_eq!(describe(safe_int_divide(i64::MIN, -1)), format!("overflow in {} / -1", i64::MIN));
}

#[test]
fn narrowing_with_if_let() {
    let res: Result<u32, ZeroDivision> = Ok(4);
    if let Ok(v) = res {
        assert_eq!(v, 4);
    } else {
        panic!("expected Ok");
    }

    let res: Result<u32, ZeroDivision> = Err(ZeroDivision);
    let Err(err) = res else {
        panic!("expected Err");
    };
    assert_eq!(err.describe(), "Cannot divide by zero");
}

#[test]
fn views_and_std_conversion() {
    let res: Result<String, Bare> = Ok("v".to_string());
    assert_eq!(res.as_ref(), Ok(&"v".to_string()));
    assert_eq!(res.clone().ok(), Some("v".to_string()));
    assert_eq!(res.clone().err(), None);

    let std_res: std::result::Result<String, Bare> = res.into_std();
    assert_eq!(std_res, std::result::Result::Ok("v".to_string()));

    let std_err: std::result::Result<String, Bare> = std::result::Result::Err(Bare);
    let back: Result<String, Bare> = std_err.into();
    assert_eq!(back.err(), Some(Bare));
}

#[test]
fn question_mark_through_std_boundary() {
    fn halve_then_divide(a: i64, b: i64) -> std::result::Result<i64, ArithmeticError> {
        let half = safe_int_divide(a, 2).into_std()?;
        safe_int_divide(half, b).into_std()
    }

    assert_eq!(halve_then_divide(20, 5), std::result::Result::Ok(2));
    assert!(halve_then_divide(20, 0).is_err());
}

#[test]
fn none_or_and_defaults() {
    fn save(ok: bool) -> NoneOr<Bare> {
        if ok { Result::unit() } else { Result::err_default() }
    }

    assert_eq!(save(true), Ok(()));
    assert_eq!(save(false), Err(Bare));
}

#[test]
fn display_shows_variant_and_description() {
    let ok: Result<i32, ZeroDivision> = Ok(3);
    let err: Result<i32, ZeroDivision> = Err(ZeroDivision);
    assert_eq!(ok.to_string(), "Ok(3)");
    assert_eq!(err.to_string(), "Err(Cannot divide by zero)");
}

#[test]
fn into_inner_reads_either_payload() {
    #[derive(Debug, PartialEq)]
    enum Outcome {
        Quotient(i64),
        Failed(String),
    }

    impl From<i64> for Outcome {
        fn from(v: i64) -> Self {
            Outcome::Quotient(v)
        }
    }

    impl From<ArithmeticError> for Outcome {
        fn from(err: ArithmeticError) -> Self {
            Outcome::Failed(err.describe())
        }
    }

    assert_eq!(safe_int_divide(9, 3).into_inner::<Outcome>(), Outcome::Quotient(3));
    assert_eq!(
        safe_int_divide(9, 0).into_inner::<Outcome>(),
        Outcome::Failed("Cannot divide by zero".to_string())
    );

    // the same type on both sides converts to itself
    let either: Result<Bare, Bare> = Err(Bare);
    assert_eq!(either.into_inner::<Bare>(), Bare);
}
