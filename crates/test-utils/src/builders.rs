#![allow(dead_code)]

//! Error fixtures shared by the integration tests.

use exhausterr::{Error, ExceptionType, Fields, Notes, define_error};

pub const QUOTA_EXCEEDED: ExceptionType = ExceptionType::new("QuotaExceeded");

define_error! {
    /// Declares no exception type, so it escalates into the generic one.
    pub struct Unmapped {
        pub reason: String,
    }
    description = "unmapped failure: {reason}";
}

define_error! {
    /// No fields, no description, no exception type.
    pub struct Bare;
}

/// Hand-written error with notes storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Quota {
    pub user: String,
    pub used: u64,
    pub limit: u64,
    notes: Notes,
}

impl Error for Quota {
    fn exception_type(&self) -> ExceptionType {
        QUOTA_EXCEEDED
    }

    fn description_template(&self) -> Option<&'static str> {
        Some("{user} used {used} of {limit}")
    }

    fn fields(&self) -> Fields {
        Fields::new()
            .with("user", &self.user)
            .with("used", &self.used)
            .with("limit", &self.limit)
    }

    fn note_storage(&self) -> Option<&Notes> {
        Some(&self.notes)
    }

    fn note_storage_mut(&mut self) -> Option<&mut Notes> {
        Some(&mut self.notes)
    }
}

/// Builder for [`Quota`] errors.
pub struct QuotaBuilder {
    user: String,
    used: u64,
    limit: u64,
}

impl QuotaBuilder {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            used: 0,
            limit: 0,
        }
    }

    pub fn used(mut self, used: u64) -> Self {
        self.used = used;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(self) -> Quota {
        Quota {
            user: self.user,
            used: self.used,
            limit: self.limit,
            notes: Notes::new(),
        }
    }
}
