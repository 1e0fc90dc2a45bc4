use serde::{Deserialize, Serialize};

use super::breakdown::{clamp_score, format_number, CategoryResult, SECTION_TEACHING};
use super::normalize::normalize_subject_name;
use crate::record::{MultiSubject, Semester, SubjectEntry};
use crate::rubric::MultiSubjectRubric;

/// Normalized subject names per semester, for display only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSubjectDetails {
    pub sem1_subjects: Vec<String>,
    pub sem2_subjects: Vec<String>,
    pub sem1_count: usize,
    pub sem2_count: usize,
}

impl MultiSubjectDetails {
    pub fn is_empty(&self) -> bool {
        self.sem1_count == 0 && self.sem2_count == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSubjectResult {
    pub result: CategoryResult,
    pub details: MultiSubjectDetails,
}

#[derive(Debug, Clone, PartialEq)]
struct SemesterScore {
    count: usize,
    additional: f64,
    penalty: f64,
    score: f64,
}

/// Score multi-subject teaching across both semesters.
///
/// Entries whose name normalizes to empty are dropped before anything is
/// counted. A semester with no valid entries adds nothing and gets no line.
pub fn score_multi_subject(
    subjects: &MultiSubject,
    rubric: &MultiSubjectRubric,
) -> MultiSubjectResult {
    let mut result = CategoryResult::default();
    let mut details = MultiSubjectDetails::default();
    let mut raw = 0.0;

    for semester in Semester::ALL {
        let valid: Vec<(String, &SubjectEntry)> = subjects
            .semester(semester)
            .iter()
            .filter_map(|entry| {
                let name = normalize_subject_name(&entry.name);
                (!name.is_empty()).then_some((name, entry))
            })
            .collect();

        let names: Vec<String> = valid.iter().map(|(name, _)| name.clone()).collect();
        match semester {
            Semester::Sem1 => {
                details.sem1_count = names.len();
                details.sem1_subjects = names;
            }
            Semester::Sem2 => {
                details.sem2_count = names.len();
                details.sem2_subjects = names;
            }
        }

        let entries: Vec<&SubjectEntry> = valid.iter().map(|(_, entry)| *entry).collect();
        if let Some(scored) = score_semester(&entries, rubric) {
            raw += scored.score;

            let mut formula = format!(
                "기본 {}점 + 추가 {}점",
                format_number(rubric.base_score),
                format_number(scored.additional)
            );
            if scored.penalty > 0.0 {
                formula.push_str(&format!(" - 감점 {:.1}점", scored.penalty));
            }
            result.line(
                SECTION_TEACHING,
                format!("다과목지도 ({})", semester.label()),
                format!("{}과목", scored.count),
                formula,
                scored.score,
            );
        }
    }

    let score = clamp_score(raw, rubric.max_score, "다과목지도", &mut result.warnings);
    result.score = score;
    MultiSubjectResult { result, details }
}

fn score_semester(entries: &[&SubjectEntry], rubric: &MultiSubjectRubric) -> Option<SemesterScore> {
    if entries.is_empty() {
        return None;
    }

    let count = entries.len();
    let additional = rubric.additional_for(count);
    let penalty: f64 = entries
        .iter()
        .map(|entry| {
            let mut p = 0.0;
            if entry.detail_length != rubric.full_detail_length {
                p += rubric.detail_penalty;
            }
            if !entry.has_exam {
                p += rubric.exam_penalty;
            }
            p
        })
        .sum();

    Some(SemesterScore {
        count,
        additional,
        penalty,
        score: (rubric.base_score + additional - penalty).max(0.0),
    })
}
