//! Request middleware.
//!
//! [`auth`] provides the bearer-token extractor that gates every route
//! outside the `/usuario` auth endpoints.

pub mod auth;
