// src/lib.rs

//! Failures as values.
//!
//! [`Result`] is a closed `Ok`/`Err` pair whose error side must be an
//! [`Error`]: plain data with structured [`Fields`], checked exhaustively by
//! `match`. Leaving value-based handling is always explicit:
//! [`Result::unwrap`] and [`Error::throw`] turn the error into an
//! [`Exception`] and unwind with it.
//!
//! ```
//! use exhausterr::builtin::{safe_divide, ZeroDivision};
//! use exhausterr::{catch_exception, Err, ExceptionType, Ok};
//!
//! assert_eq!(safe_divide(10.0, 2.0), Ok(5.0));
//! assert_eq!(safe_divide(10.0, 0.0), Err(ZeroDivision));
//!
//! let raised = catch_exception(|| safe_divide(1.0, 0.0).unwrap()).unwrap_err();
//! assert!(raised.is(ExceptionType::ZERO_DIVISION));
//! ```

pub mod builtin;
pub mod cli;
pub mod config;
pub mod describe;
pub mod error;
pub mod errors;
pub mod exception;
pub mod logging;
pub mod report;
pub mod result;
pub mod types;

use std::collections::HashMap;

use tracing::debug;

pub use crate::error::{Error, Fields, Notes};
pub use crate::exception::{Exception, ExceptionType, catch_exception, raise};
pub use crate::result::Result::{Err, Ok};
pub use crate::result::{NoneOr, Result};

use crate::builtin::{safe_divide, safe_get, safe_get_or, safe_index, safe_int_divide};
use crate::cli::{CliArgs, Command};

/// High-level entry point used by `main.rs`.
///
/// Runs the requested operation and returns the line to print. Errors are
/// handled by matching on the result, or escalated with `unwrap` when
/// `--unwrap` was given.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    debug!(command = ?args.command, unwrap = args.unwrap, "running command");

    let line = match &args.command {
        Command::Divide { a, b } => settle(safe_divide(*a, *b), args.unwrap),
        Command::IntDivide { a, b } => settle(safe_int_divide(*a, *b), args.unwrap),
        Command::Lookup {
            key,
            entries,
            default,
        } => {
            let map: HashMap<String, String> = entries.iter().cloned().collect();
            let found = match default {
                Some(default) => safe_get_or(&map, key.as_str(), default),
                None => safe_get(&map, key.as_str()),
            };
            settle(found, args.unwrap)
        }
        Command::Index { index, items } => settle(safe_index(items, *index), args.unwrap),
    };

    anyhow::Ok(line)
}

fn settle<T: std::fmt::Display, E: Error>(result: Result<T, E>, escalate: bool) -> String {
    if escalate {
        return result.unwrap().to_string();
    }
    match result {
        Ok(value) => value.to_string(),
        Err(error) => format!("error [{}]: {}", error.exception_type(), error.describe()),
    }
}
