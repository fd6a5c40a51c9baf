//! Data transfer objects and application state models.

pub mod api;
pub mod app;
pub mod movie;
pub mod session;
pub mod ticket;
pub mod user;
