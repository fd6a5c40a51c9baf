/// Plaintext password used by the user fixtures.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Default ticket price for showing fixtures.
pub static TEST_SHOWING_PRICE: f64 = 12.50;
