// src/error.rs

//! The [`Error`] base type: failures as plain values.
//!
//! An error is ordinary data. It travels as the payload of
//! [`Result::Err`](crate::Result::Err) and only becomes an
//! [`Exception`] when a caller explicitly asks for it through
//! [`Error::to_exception`] or [`Error::throw`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::describe;
use crate::errors::{ExhausterrError, Result};
use crate::exception::{Exception, ExceptionType, raise};

/// Structured context of an error, in declaration order.
///
/// Values are stored rendered (via `Display`) so that the same context can be
/// attached to an [`Exception`] and substituted into description templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fields(Vec<(&'static str, String)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<V: fmt::Display + ?Sized>(mut self, name: &'static str, value: &V) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, replacing an earlier value with the same name in place.
    pub fn insert<V: fmt::Display + ?Sized>(&mut self, name: &'static str, value: &V) {
        let rendered = value.to_string();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = rendered,
            None => self.0.push((name, rendered)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Free-form notes attached to an error after construction.
///
/// Notes never take part in equality or hashing: two errors that differ only
/// in their notes compare equal.
#[derive(Debug, Clone, Default)]
pub struct Notes(Vec<String>);

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: impl Into<String>) {
        self.0.push(note.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl PartialEq for Notes {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Notes {}

impl Hash for Notes {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

/// Base trait for value-level errors.
///
/// Every method has a default, so the smallest implementation is an empty
/// `impl Error for MyError {}`: no fields, no description, and escalation
/// into [`ExceptionType::GENERIC`]. Prefer [`define_error!`](crate::define_error)
/// for errors with fields.
pub trait Error: fmt::Debug {
    /// The exception type this error escalates into.
    fn exception_type(&self) -> ExceptionType {
        ExceptionType::GENERIC
    }

    /// Description with `{field}` placeholders, rendered by [`Error::describe`].
    fn description_template(&self) -> Option<&'static str> {
        None
    }

    fn fields(&self) -> Fields {
        Fields::new()
    }

    fn note_storage(&self) -> Option<&Notes> {
        None
    }

    fn note_storage_mut(&mut self) -> Option<&mut Notes> {
        None
    }

    fn notes(&self) -> &[String] {
        self.note_storage().map(Notes::as_slice).unwrap_or(&[])
    }

    /// Attach notes that will be carried over to the exception.
    ///
    /// Fails if the error type declares no [`Notes`] storage.
    fn add_notes<I, S>(&mut self, notes: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let storage = self
            .note_storage_mut()
            .ok_or(ExhausterrError::NotesUnsupported(std::any::type_name::<Self>()))?;
        for note in notes {
            storage.push(note);
        }
        Ok(())
    }

    /// The complete error description; empty without a template.
    fn describe(&self) -> String {
        match self.description_template() {
            Some(template) => describe::render_lenient(template, &self.fields()),
            None => String::new(),
        }
    }

    /// Build the equivalent exception. Pure: the error is left untouched and
    /// every call returns a fresh, equal exception.
    fn to_exception(&self) -> Exception {
        let mut exception =
            Exception::new(self.exception_type(), self.describe()).with_fields(self.fields());
        for note in self.notes() {
            exception = exception.with_note(note.clone());
        }
        exception
    }

    /// Convert into an exception and raise it.
    #[track_caller]
    fn throw(&self) -> ! {
        let exception = self.to_exception();
        debug!(exception = %exception, "escalating error into exception");
        raise(exception)
    }
}

impl<E: Error + ?Sized> Error for &E {
    fn exception_type(&self) -> ExceptionType {
        (**self).exception_type()
    }

    fn description_template(&self) -> Option<&'static str> {
        (**self).description_template()
    }

    fn fields(&self) -> Fields {
        (**self).fields()
    }

    fn note_storage(&self) -> Option<&Notes> {
        (**self).note_storage()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<E: Error + ?Sized> Error for Box<E> {
    fn exception_type(&self) -> ExceptionType {
        (**self).exception_type()
    }

    fn description_template(&self) -> Option<&'static str> {
        (**self).description_template()
    }

    fn fields(&self) -> Fields {
        (**self).fields()
    }

    fn note_storage(&self) -> Option<&Notes> {
        (**self).note_storage()
    }

    fn note_storage_mut(&mut self) -> Option<&mut Notes> {
        (**self).note_storage_mut()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Declare an error struct together with its [`Error`] implementation.
///
/// ```
/// use exhausterr::{define_error, Error, ExceptionType};
///
/// define_error! {
///     /// A user id that is not registered.
///     pub struct UnknownUser {
///         pub id: u64,
///     }
///     exception = ExceptionType::KEY;
///     description = "no user with id {id}";
/// }
///
/// let err = UnknownUser { id: 7 };
/// assert_eq!(err.describe(), "no user with id 7");
/// assert_eq!(err.fields().get("id"), Some("7"));
/// ```
///
/// Both `exception` and `description` are optional; without `exception` the
/// error escalates into [`ExceptionType::GENERIC`]. Field types must
/// implement `Display`. Unit errors additionally derive `Copy`, `Default`,
/// `Eq` and `Hash`; struct errors derive `Debug`, `Clone` and `PartialEq`.
///
/// A struct error followed by `notes;` also gets a private [`Notes`] field,
/// so [`Error::add_notes`] works on it, and a `new` constructor taking the
/// declared fields in order. Notes never take part in equality.
///
/// ```
/// use exhausterr::{define_error, Error};
///
/// define_error! {
///     pub struct StaleLock {
///         pub path: String,
///     }
///     notes;
///     description = "lock {path} is stale";
/// }
///
/// let mut err = StaleLock::new("/tmp/app.lock".to_string());
/// err.add_notes(["held by pid 42"]).unwrap();
/// assert_eq!(err, StaleLock::new("/tmp/app.lock".to_string()));
/// assert_eq!(err.to_exception().notes(), ["held by pid 42"]);
/// ```
#[macro_export]
macro_rules! define_error {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
        $(exception = $exc:expr;)?
        $(description = $desc:literal;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Error for $name {
            fn exception_type(&self) -> $crate::ExceptionType {
                $crate::__error_exception_type!($($exc)?)
            }

            fn description_template(&self) -> ::core::option::Option<&'static str> {
                $crate::__error_description!($($desc)?)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty),* $(,)?
        }
        notes;
        $(exception = $exc:expr;)?
        $(description = $desc:literal;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $ty,)*
            notes: $crate::Notes,
        }

        impl $name {
            #[allow(dead_code)]
            $vis fn new($($field: $ty),*) -> Self {
                Self {
                    $($field,)*
                    notes: $crate::Notes::new(),
                }
            }
        }

        impl $crate::Error for $name {
            fn exception_type(&self) -> $crate::ExceptionType {
                $crate::__error_exception_type!($($exc)?)
            }

            fn description_template(&self) -> ::core::option::Option<&'static str> {
                $crate::__error_description!($($desc)?)
            }

            fn fields(&self) -> $crate::Fields {
                $crate::Fields::new()$(.with(stringify!($field), &self.$field))*
            }

            fn note_storage(&self) -> ::core::option::Option<&$crate::Notes> {
                ::core::option::Option::Some(&self.notes)
            }

            fn note_storage_mut(&mut self) -> ::core::option::Option<&mut $crate::Notes> {
                ::core::option::Option::Some(&mut self.notes)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty),* $(,)?
        }
        $(exception = $exc:expr;)?
        $(description = $desc:literal;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $ty),*
        }

        impl $crate::Error for $name {
            fn exception_type(&self) -> $crate::ExceptionType {
                $crate::__error_exception_type!($($exc)?)
            }

            fn description_template(&self) -> ::core::option::Option<&'static str> {
                $crate::__error_description!($($desc)?)
            }

            fn fields(&self) -> $crate::Fields {
                $crate::Fields::new()$(.with(stringify!($field), &self.$field))*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __error_exception_type {
    () => {
        $crate::ExceptionType::GENERIC
    };
    ($exc:expr) => {
        $exc
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __error_description {
    () => {
        ::core::option::Option::None
    };
    ($desc:literal) => {
        ::core::option::Option::Some($desc)
    };
}
