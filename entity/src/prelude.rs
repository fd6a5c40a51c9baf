pub use super::movie::Entity as Movie;
pub use super::showing::Entity as Showing;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
