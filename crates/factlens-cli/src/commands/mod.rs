//! Command implementations.

pub mod check;
pub mod health;
pub mod results;

pub use self::check::{build_request, execute_check};
pub use self::health::execute_health;
pub use self::results::execute_results;
