//! End-to-end properties of the scoring engine through the public API.

use tempfile::TempDir;
use teacher_eval::record::{Attendance, Club, InputRecord, Semester, SubjectPatch};
use teacher_eval::rubric::Rubric;
use teacher_eval::scoring::evaluate;
use teacher_eval::snapshot::{load_snapshot, save_snapshot};

fn busy_record() -> InputRecord {
    let mut record = InputRecord::default();
    record.teaching.hours_penalty = true;
    record.teaching.class_open_count = 5;
    record.life.morning = Attendance::Full;
    record.life.night = Attendance::Full;
    record.dev.leader = true;
    record.dev.member = true;
    record.dev.award = "2+".to_string();
    record.duty.difficult = "level2".to_string();
    record.duty.club = Club::Regular;
    record.duty.mutual = "6+".to_string();

    for name in ["국어", "  Math   II ", "   "] {
        let index = record.add_subject(Semester::Sem1);
        record
            .update_subject(
                Semester::Sem1,
                index,
                SubjectPatch {
                    name: Some(name.to_string()),
                    detail_length: Some("250".to_string()),
                    has_exam: Some(false),
                },
            )
            .unwrap();
    }
    record
}

#[test]
fn test_every_category_stays_within_its_cap() {
    let rubric = Rubric::default();
    let evaluation = evaluate(&busy_record(), &rubric);

    assert!((0.0..=rubric.teaching.max_score).contains(&evaluation.teaching));
    assert!((0.0..=rubric.life.max_score).contains(&evaluation.life));
    assert!((0.0..=rubric.development.max_score).contains(&evaluation.dev));
    assert!((0.0..=rubric.duty.max_score).contains(&evaluation.duty));

    let sum = evaluation.teaching + evaluation.life + evaluation.dev + evaluation.duty;
    assert!((evaluation.total - sum).abs() < 1e-9);
}

#[test]
fn test_warning_only_for_strict_overflow() {
    let evaluation = evaluate(&busy_record(), &Rubric::default());
    // dev: 6.5 + 2.0 + 0.5 + 1.5 = 10.5 > 10
    assert_eq!(evaluation.dev, 10.0);
    assert!(evaluation.warnings.iter().any(|w| w.contains("전문성개발")));
    // life: 27 + 1.5 + 1.5 = 30, exactly at cap
    assert_eq!(evaluation.life, 30.0);
    assert!(!evaluation.warnings.iter().any(|w| w.contains("생활지도")));
}

#[test]
fn test_blank_subject_names_are_ignored() {
    let evaluation = evaluate(&busy_record(), &Rubric::default());
    let details = &evaluation.multi_subject_details;
    assert_eq!(details.sem1_count, 2);
    assert_eq!(details.sem1_subjects, vec!["국어", "math ii"]);
    assert_eq!(details.sem2_count, 0);
}

#[test]
fn test_json_round_trip_scores_identically() {
    let record = busy_record();
    let json = serde_json::to_string(&record).unwrap();
    let reloaded: InputRecord = serde_json::from_str(&json).unwrap();

    let rubric = Rubric::default();
    assert_eq!(evaluate(&record, &rubric), evaluate(&reloaded, &rubric));
}

#[test]
fn test_snapshot_round_trip_scores_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let record = busy_record();
    save_snapshot(&path, &record).unwrap();

    let loaded = load_snapshot(&path).unwrap().unwrap();
    let rubric = Rubric::default();
    assert_eq!(evaluate(&loaded.record, &rubric), evaluate(&record, &rubric));
}

#[test]
fn test_recompute_is_idempotent() {
    let record = busy_record();
    let rubric = Rubric::default();
    let first = evaluate(&record, &rubric);
    let second = evaluate(&record, &rubric);
    assert_eq!(first, second);
}

#[test]
fn test_breakdown_order_follows_categories() {
    let evaluation = evaluate(&busy_record(), &Rubric::default());
    let sections: Vec<&str> = evaluation
        .breakdown
        .iter()
        .map(|line| line.section.as_str())
        .collect();
    let first_of = |name: &str| sections.iter().position(|s| *s == name).unwrap();
    let last_of = |name: &str| sections.iter().rposition(|s| *s == name).unwrap();

    assert!(last_of("학습지도") < first_of("생활지도"));
    assert!(last_of("생활지도") < first_of("전문성개발"));
    assert!(last_of("전문성개발") < first_of("담당업무"));
}
