pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::TEST_PASSWORD, fixtures, test_setup_with_booking_tables, test_setup_with_tables,
        TestError, TestSetup,
    };
}
