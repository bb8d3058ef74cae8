// src/exception.rs

//! The escalated form of an [`Error`](crate::Error).
//!
//! An [`Exception`] only exists once a caller explicitly gives up on
//! value-based handling (`unwrap`, `expect`, `throw`). It is raised by
//! unwinding with the exception as the panic payload, and can be recovered
//! further up the stack with [`catch_exception`].
//!
//! Unwinding requires `panic = "unwind"`; with `panic = "abort"` a raised
//! exception terminates the process.

use std::cell::Cell;
use std::fmt;
use std::panic::{self, UnwindSafe};

use serde::Serialize;
use thiserror::Error;

use crate::error::Fields;

/// Tag identifying which kind of exception an error escalates into.
///
/// Error types pick one through [`Error::exception_type`](crate::Error::exception_type);
/// those that don't fall back to [`ExceptionType::GENERIC`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExceptionType(&'static str);

impl ExceptionType {
    pub const GENERIC: ExceptionType = ExceptionType("Exception");
    pub const ZERO_DIVISION: ExceptionType = ExceptionType("ZeroDivisionException");
    pub const OVERFLOW: ExceptionType = ExceptionType("OverflowException");
    pub const KEY: ExceptionType = ExceptionType("KeyException");
    pub const INDEX: ExceptionType = ExceptionType("IndexException");

    /// Declare a custom exception type.
    pub const fn new(name: &'static str) -> Self {
        ExceptionType(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl Default for ExceptionType {
    fn default() -> Self {
        ExceptionType::GENERIC
    }
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An error converted into something that can unwind the stack.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {message}")]
pub struct Exception {
    kind: ExceptionType,
    message: String,
    notes: Vec<String>,
    fields: Fields,
}

impl Exception {
    pub fn new(kind: ExceptionType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            notes: Vec::new(),
            fields: Fields::new(),
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn kind(&self) -> ExceptionType {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Does this exception carry the given type tag?
    pub fn is(&self, kind: ExceptionType) -> bool {
        self.kind == kind
    }
}

/// Raise `exception`, unwinding until a [`catch_exception`] (or the thread
/// boundary) is reached.
#[track_caller]
pub fn raise(exception: Exception) -> ! {
    panic::panic_any(exception)
}

thread_local! {
    static CATCH_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as inside a [`catch_exception`] call.
struct CatchScope;

impl CatchScope {
    fn enter() -> Self {
        CATCH_DEPTH.with(|depth| depth.set(depth.get() + 1));
        CatchScope
    }
}

impl Drop for CatchScope {
    fn drop(&mut self) {
        CATCH_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Whether an exception raised right now on this thread would be caught by
/// an enclosing [`catch_exception`].
pub fn is_catching() -> bool {
    CATCH_DEPTH.with(|depth| depth.get() > 0)
}

/// Run `f`, turning a raised [`Exception`] back into a value.
///
/// Panics whose payload is not an [`Exception`] keep unwinding untouched.
pub fn catch_exception<F, R>(f: F) -> Result<R, Exception>
where
    F: FnOnce() -> R + UnwindSafe,
{
    let outcome = {
        let _scope = CatchScope::enter();
        panic::catch_unwind(f)
    };
    match outcome {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Exception>() {
            Ok(exception) => Err(*exception),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
