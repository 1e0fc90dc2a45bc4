use serde::{Deserialize, Serialize};

use super::breakdown::{CategoryResult, LineItem};
use super::development::score_development;
use super::duty::score_duty;
use super::life::score_life;
use super::multi_subject::MultiSubjectDetails;
use super::teaching::{score_teaching, TeachingResult};
use crate::record::InputRecord;
use crate::rubric::Rubric;

/// The full evaluation: category scores, their sum, and everything needed
/// to explain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub total: f64,
    pub teaching: f64,
    pub life: f64,
    pub dev: f64,
    pub duty: f64,
    pub breakdown: Vec<LineItem>,
    pub warnings: Vec<String>,
    pub multi_subject_details: MultiSubjectDetails,
}

/// Score a record against a rubric. Pure: the same record and rubric always
/// produce the same evaluation.
pub fn evaluate(record: &InputRecord, rubric: &Rubric) -> Evaluation {
    let teaching = score_teaching(&record.teaching, &rubric.teaching);
    let life = score_life(&record.life, &rubric.life);
    let dev = score_development(&record.dev, &rubric.development);
    let duty = score_duty(&record.duty, &rubric.duty);

    let evaluation = aggregate(teaching, life, dev, duty);
    tracing::debug!(
        total = evaluation.total,
        lines = evaluation.breakdown.len(),
        warnings = evaluation.warnings.len(),
        "evaluation complete"
    );
    evaluation
}

/// Combine the already-capped category results in fixed order: teaching,
/// life, development, duty. No further cap applies to the total.
pub fn aggregate(
    teaching: TeachingResult,
    life: CategoryResult,
    dev: CategoryResult,
    duty: CategoryResult,
) -> Evaluation {
    let TeachingResult {
        result: teaching,
        multi_subject_details,
    } = teaching;

    let total = teaching.score + life.score + dev.score + duty.score;
    let mut breakdown = Vec::new();
    let mut warnings = Vec::new();
    let scores = [teaching.score, life.score, dev.score, duty.score];

    for category in [teaching, life, dev, duty] {
        breakdown.extend(category.breakdown);
        warnings.extend(category.warnings);
    }

    Evaluation {
        total,
        teaching: scores[0],
        life: scores[1],
        dev: scores[2],
        duty: scores[3],
        breakdown,
        warnings,
        multi_subject_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Attendance, Club, SubjectEntry};

    fn sample_record() -> InputRecord {
        let mut record = InputRecord::default();
        record.teaching.hours_penalty = true;
        record.teaching.class_open_count = 3;
        record.teaching.multi_subject.sem1 = vec![
            SubjectEntry {
                name: "  Foo   BAR ".to_string(),
                detail_length: "500".to_string(),
                has_exam: true,
            },
            SubjectEntry::default(),
        ];
        record.life.morning = Attendance::Full;
        record.dev.leader = true;
        record.duty.club = Club::Regular;
        record
    }

    #[test]
    fn test_default_record_total() {
        let evaluation = evaluate(&InputRecord::default(), &Rubric::default());
        // teaching 25, life 27, dev 6.5, duty 26
        assert_eq!(evaluation.teaching, 25.0);
        assert_eq!(evaluation.life, 27.0);
        assert_eq!(evaluation.dev, 6.5);
        assert_eq!(evaluation.duty, 26.0);
        assert_eq!(evaluation.total, 84.5);
        assert!(evaluation.warnings.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let evaluation = evaluate(&sample_record(), &Rubric::default());
        let sum = evaluation.teaching + evaluation.life + evaluation.dev + evaluation.duty;
        assert_eq!(evaluation.total, sum);
        // 25 - 0.5 + 1.4 + 1.0
        assert!((evaluation.teaching - 26.9).abs() < 1e-9);
        assert_eq!(evaluation.life, 28.5);
        assert_eq!(evaluation.dev, 8.5);
        assert_eq!(evaluation.duty, 28.0);
    }

    #[test]
    fn test_breakdown_order_by_category() {
        let evaluation = evaluate(&sample_record(), &Rubric::default());
        let sections: Vec<&str> = evaluation
            .breakdown
            .iter()
            .map(|l| l.section.as_str())
            .collect();
        let mut deduped = sections.clone();
        deduped.dedup();
        assert_eq!(deduped, vec!["학습지도", "생활지도", "전문성개발", "담당업무"]);
    }

    #[test]
    fn test_multi_subject_details_pass_through() {
        let evaluation = evaluate(&sample_record(), &Rubric::default());
        assert_eq!(evaluation.multi_subject_details.sem1_count, 1);
        assert_eq!(
            evaluation.multi_subject_details.sem1_subjects,
            vec!["foo bar".to_string()]
        );
    }

    #[test]
    fn test_warnings_in_category_order() {
        let mut rubric = Rubric::default();
        rubric.teaching.max_score = 20.0;
        rubric.duty.max_score = 20.0;
        let evaluation = evaluate(&InputRecord::default(), &rubric);
        assert_eq!(evaluation.warnings.len(), 2);
        assert!(evaluation.warnings[0].starts_with("학습지도"));
        assert!(evaluation.warnings[1].starts_with("담당업무"));
        assert_eq!(evaluation.total, 20.0 + 27.0 + 6.5 + 20.0);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let record = sample_record();
        let rubric = Rubric::default();
        assert_eq!(evaluate(&record, &rubric), evaluate(&record, &rubric));
    }

    #[test]
    fn test_evaluation_serializes_camel_case() {
        let evaluation = evaluate(&sample_record(), &Rubric::default());
        let json = serde_json::to_value(&evaluation).unwrap();
        assert!(json["multiSubjectDetails"]["sem1Subjects"].is_array());
        assert_eq!(json["multiSubjectDetails"]["sem2Count"], 0);
        assert_eq!(json["breakdown"][0]["item"], "수업시수");
    }
}
