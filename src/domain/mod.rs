//! Domain value objects.
//!
//! This module contains the type-safe wrapper for the digits-only form
//! of a phone field value. The wrapper normalizes at construction time
//! so downstream code never sees formatting characters.

pub mod digits;

pub use digits::PhoneDigits;
