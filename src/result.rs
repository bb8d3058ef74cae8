// src/result.rs

//! The `Ok`/`Err` variant pair.
//!
//! [`Result`] deliberately mirrors the shape of the standard library's result
//! but constrains the error side to [`Error`] values, so the compiler rejects
//! `Err(42)` and every `match` over a `Result` must cover both variants.
//! Error unions are plain enums of errors (see
//! [`ArithmeticError`](crate::builtin::ArithmeticError)), so nested matches
//! are checked the same way:
//!
//! ```
//! use exhausterr::builtin::{safe_int_divide, ArithmeticError};
//! use exhausterr::{Err, Ok};
//!
//! let message = match safe_int_divide(10, 0) {
//!     Ok(q) => format!("quotient {q}"),
//!     Err(ArithmeticError::ZeroDivision(_)) => "division by zero".to_string(),
//!     Err(ArithmeticError::Overflow(_)) => "overflow".to_string(),
//! };
//! assert_eq!(message, "division by zero");
//! ```
//!
//! There are no combinators (`map`, `and_then`, ...). Convert with
//! [`Result::into_std`] when `?` propagation is wanted.

use std::fmt;

use crate::error::Error;
use crate::exception::raise;

/// Either a success value or an [`Error`].
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E: Error> {
    Ok(T),
    Err(E),
}

/// A result whose happy path carries nothing.
pub type NoneOr<E> = Result<(), E>;

impl<T, E: Error> Result<T, E> {
    /// `true` for `Ok`, whatever the payload.
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the `Ok` payload, or raise the error as its exception.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => error.throw(),
        }
    }

    /// Like [`Result::unwrap`], attaching `note` to the raised exception.
    #[track_caller]
    pub fn expect(self, note: &str) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => raise(error.to_exception().with_note(note)),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Result::Ok(value) => Some(value),
            Result::Err(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => None,
            Result::Err(error) => Some(error),
        }
    }
    /// The payload of whichever variant this is, converted into a common type.
    ///
    /// ```
    /// use exhausterr::builtin::ZeroDivision;
    /// use exhausterr::{Err, Ok, Result};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Reading {
    ///     Value(f64),
    ///     Missing,
    /// }
    ///
    /// impl From<f64> for Reading {
    ///     fn from(v: f64) -> Self {
    ///         Reading::Value(v)
    ///     }
    /// }
    ///
    /// impl From<ZeroDivision> for Reading {
    ///     fn from(_: ZeroDivision) -> Self {
    ///         Reading::Missing
    ///     }
    /// }
    ///
    /// let ok: Result<f64, ZeroDivision> = Ok(2.5);
    /// let err: Result<f64, ZeroDivision> = Err(ZeroDivision);
    /// assert_eq!(ok.into_inner::<Reading>(), Reading::Value(2.5));
    /// assert_eq!(err.into_inner::<Reading>(), Reading::Missing);
    /// ```
    pub fn into_inner<U>(self) -> U
    where
        T: Into<U>,
        E: Into<U>,
    {
        match self {
            Result::Ok(value) => value.into(),
            Result::Err(error) => error.into(),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<E: Error> Result<(), E> {
    /// `Ok(())`, for functions returning [`NoneOr`].
    pub fn unit() -> Self {
        Result::Ok(())
    }
}

impl<T, E: Error + Default> Result<T, E> {
    /// `Err` holding the error type's default value.
    pub fn err_default() -> Self {
        Result::Err(E::default())
    }
}

impl<T, E: Error> From<&Result<T, E>> for bool {
    fn from(result: &Result<T, E>) -> bool {
        result.is_ok()
    }
}

impl<T, E: Error> From<Result<T, E>> for bool {
    fn from(result: Result<T, E>) -> bool {
        result.is_ok()
    }
}

impl<T, E: Error> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E: Error> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: Error> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Ok(value) => write!(f, "Ok({value})"),
            Result::Err(error) => write!(f, "Err({})", error.describe()),
        }
    }
}
