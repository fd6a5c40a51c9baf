//! Business logic services.
//!
//! Services coordinate repositories and enforce the application's rules:
//! credential verification and registration conflicts, the transactional seat
//! reservation flow, and catalog/ticket listings.

pub mod auth;
pub mod booking;
pub mod movie;
pub mod ticket;
