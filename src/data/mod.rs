//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations and are generic over [`sea_orm::ConnectionTrait`] so they can
//! run against the connection pool or inside a transaction.

pub mod movie;
pub mod showing;
pub mod ticket;
pub mod user;
