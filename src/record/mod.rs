pub mod edit;
pub mod types;

pub use edit::{EditError, SubjectPatch};
pub use types::*;
