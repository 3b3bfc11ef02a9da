pub mod logging;
#[cfg(test)]
pub mod fixtures;

mod errors;
pub use errors::{DatabaseError, Result};
