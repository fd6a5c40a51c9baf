//! Tests for ticket booking controller endpoints.

mod get_booking;
mod my_tickets;
