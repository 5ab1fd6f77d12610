//! Shared utilities.
//!
//! - [`email`]: SMTP delivery of 2FA codes and recovery links
//! - [`errors`]: application error type and API error envelope
//! - [`jwt`]: JWT token creation and verification
//! - [`otp`]: time-based one-time code derivation
//! - [`password`]: bcrypt hashing and verification
//! - [`response`]: API success envelope

pub mod email;
pub mod errors;
pub mod jwt;
pub mod otp;
pub mod password;
pub mod response;
