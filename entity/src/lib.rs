pub mod prelude;

pub mod movie;
pub mod showing;
pub mod ticket;
pub mod user;
