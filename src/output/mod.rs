pub mod formatter;

pub use formatter::{
    format_breakdown, format_evaluation, format_points, format_subject_details, format_summary,
    format_warnings, should_use_colors,
};
