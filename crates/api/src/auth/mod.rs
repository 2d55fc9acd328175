//! Bearer-token authentication.
//!
//! The server only verifies HS256 access tokens; issuing them is the login
//! backend's job. Two roles exist: admins run the dashboard, clients see
//! their own inquiries.

pub mod jwt;

/// Role claim carried by admin tokens.
pub const ROLE_ADMIN: &str = "admin";

/// Role claim carried by client tokens.
pub const ROLE_CLIENT: &str = "client";
