//! Authentication services.
//!
//! Registration and credential verification live here, separate from the user
//! entity itself. Session handling stays in the controllers and session
//! wrappers, so identity always flows through the call chain as an explicit
//! argument.

pub mod login;
pub mod password;
pub mod register;
