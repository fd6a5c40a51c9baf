//! Fixture insert helpers for booking tests.
//!
//! These functions insert rows directly through the entity layer so tests can
//! arrange users, movies, showings, and tickets without going through the
//! server's service layer.

pub mod catalog;
pub mod user;

pub use catalog::{insert_movie, insert_showing, insert_ticket};
pub use user::{insert_user, insert_user_with_password};
