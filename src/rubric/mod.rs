pub mod tables;
pub mod validation;

pub use tables::*;
pub use validation::validate_rubric;
