/// Canonical form of a subject name.
///
/// Trims, collapses every internal whitespace run to one space, then
/// lower-cases Latin letters only; Hangul and other scripts pass through.
/// An empty result means the entry is not a subject at all.
pub fn normalize_subject_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
