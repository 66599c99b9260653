//! Request/Response data transfer objects
//!
//! The wire format is camelCase JSON; domain types stay snake_case and are
//! converted at this boundary.

pub mod claims;
