pub mod breakdown;
pub mod development;
pub mod duty;
pub mod engine;
pub mod life;
pub mod multi_subject;
pub mod normalize;
pub mod teaching;

pub use breakdown::{format_number, CategoryResult, LineItem};
pub use engine::{aggregate, evaluate, Evaluation};
pub use multi_subject::{score_multi_subject, MultiSubjectDetails};
pub use normalize::normalize_subject_name;
