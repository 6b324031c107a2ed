//! Security Module
//!
//! Provides security features for the Sprout API:
//! - Authentication (JWT bearer tokens)
//! - Security Middleware

pub mod auth;
pub mod middleware;

#[cfg(test)]
mod security_tests;

pub use auth::{Authenticator, Claims, Credentials, JwtAuth, JwtTokenGenerator};
