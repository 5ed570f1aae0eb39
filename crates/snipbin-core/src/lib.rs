//! snipbin-core
//!
//! Pure domain types, validation rules, and storage key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the snipbin service.

pub mod clock;
pub mod error;
pub mod keys;
pub mod models;
pub mod validation;
