//! Environment-sourced configuration.
//!
//! Each submodule owns one concern and exposes a `from_env()` constructor.
//!
//! - [`cors`]: allowed web origins
//! - [`database`]: PostgreSQL connection pool
//! - [`email`]: SMTP credentials and sender identity
//! - [`jwt`]: signing secret and token expiry
//! - [`otp`]: shared secret for the emailed one-time code

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
pub mod otp;
