//! HTTP endpoint handlers
//!
//! Each mutating endpoint is a thin translation from form fields to a
//! single repository call, answered with a redirect back to the listing.

pub mod health;
pub mod records;
