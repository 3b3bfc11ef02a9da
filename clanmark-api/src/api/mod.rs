pub mod bookmark;
pub mod catchers;
pub mod configs;
pub mod errors;
pub mod fairings;
pub mod guards;
