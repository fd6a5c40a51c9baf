//! Boxoffice server core modules.
//!
//! This crate contains all server-side functionality for the Boxoffice ticket
//! booking application, including HTTP routing, session-based authentication,
//! the movie/showing catalog, and the seat reservation flow. Controllers call
//! services, services call repositories, and repositories talk to the database
//! through SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
