// src/builtin.rs

//! Value-level counterparts of common runtime failures, and safe primitives
//! returning them instead of panicking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::define_error;
use crate::error::{Error, Fields, Notes};
use crate::exception::ExceptionType;
use crate::result::Result;

define_error! {
    /// Division or remainder by zero.
    pub struct ZeroDivision;
    exception = ExceptionType::ZERO_DIVISION;
    description = "Cannot divide by zero";
}

define_error! {
    /// An integer operation whose result does not fit its type.
    pub struct Overflow {
        pub operation: String,
    }
    notes;
    exception = ExceptionType::OVERFLOW;
    description = "Integer overflow in {operation}";
}

define_error! {
    /// A key missing from a mapping. The key is kept in its `Debug` form.
    pub struct BadKey {
        pub key: String,
    }
    notes;
    exception = ExceptionType::KEY;
    description = "Mapping has no key {key}";
}

define_error! {
    /// An index past the end of a sequence.
    pub struct BadIndex {
        pub index: usize,
        pub len: usize,
    }
    notes;
    exception = ExceptionType::INDEX;
    description = "Index {index} is out of range for length {len}";
}

impl BadKey {
    pub fn for_key<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        BadKey::new(format!("{key:?}"))
    }
}

/// Everything integer division can fail with.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    ZeroDivision(ZeroDivision),
    Overflow(Overflow),
}

impl From<ZeroDivision> for ArithmeticError {
    fn from(err: ZeroDivision) -> Self {
        ArithmeticError::ZeroDivision(err)
    }
}

impl From<Overflow> for ArithmeticError {
    fn from(err: Overflow) -> Self {
        ArithmeticError::Overflow(err)
    }
}

impl Error for ArithmeticError {
    fn exception_type(&self) -> ExceptionType {
        match self {
            ArithmeticError::ZeroDivision(e) => e.exception_type(),
            ArithmeticError::Overflow(e) => e.exception_type(),
        }
    }

    fn description_template(&self) -> Option<&'static str> {
        match self {
            ArithmeticError::ZeroDivision(e) => e.description_template(),
            ArithmeticError::Overflow(e) => e.description_template(),
        }
    }

    fn fields(&self) -> Fields {
        match self {
            ArithmeticError::ZeroDivision(e) => e.fields(),
            ArithmeticError::Overflow(e) => e.fields(),
        }
    }

    fn note_storage(&self) -> Option<&Notes> {
        match self {
            ArithmeticError::ZeroDivision(e) => e.note_storage(),
            ArithmeticError::Overflow(e) => e.note_storage(),
        }
    }

    fn note_storage_mut(&mut self) -> Option<&mut Notes> {
        match self {
            ArithmeticError::ZeroDivision(e) => e.note_storage_mut(),
            ArithmeticError::Overflow(e) => e.note_storage_mut(),
        }
    }
}

/// `a / b`, or [`ZeroDivision`] when `b` is zero.
pub fn safe_divide(a: f64, b: f64) -> Result<f64, ZeroDivision> {
    if b == 0.0 {
        return Result::Err(ZeroDivision);
    }
    Result::Ok(a / b)
}

/// Floor division (rounds towards negative infinity).
///
/// `i64::MIN / -1` does not fit an `i64` and yields [`Overflow`].
pub fn safe_int_divide(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        return Result::Err(ZeroDivision.into());
    }
    let Some(quotient) = a.checked_div(b) else {
        return Result::Err(Overflow::new(format!("{a} / {b}")).into());
    };
    // Truncated towards zero; step down when the signs differ and it was inexact.
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Result::Ok(quotient - 1)
    } else {
        Result::Ok(quotient)
    }
}

/// `map[key]`, or [`BadKey`] when absent.
pub fn safe_get<'a, K, V, Q>(map: &'a HashMap<K, V>, key: &Q) -> Result<&'a V, BadKey>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + fmt::Debug + ?Sized,
{
    match map.get(key) {
        Some(value) => Result::Ok(value),
        None => Result::Err(BadKey::for_key(key)),
    }
}

/// `map[key]`, falling back to `default` when absent. Never fails, but keeps
/// the `Result` shape so call sites read the same as [`safe_get`].
pub fn safe_get_or<'a, K, V, Q>(map: &'a HashMap<K, V>, key: &Q, default: &'a V) -> Result<&'a V, BadKey>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + fmt::Debug + ?Sized,
{
    match safe_get(map, key) {
        Result::Ok(value) => Result::Ok(value),
        Result::Err(_) => Result::Ok(default),
    }
}

/// `items[index]`, or [`BadIndex`] when out of range.
pub fn safe_index<T>(items: &[T], index: usize) -> Result<&T, BadIndex> {
    match items.get(index) {
        Some(item) => Result::Ok(item),
        None => Result::Err(BadIndex::new(index, items.len())),
    }
}
