use super::tables::{PointTable, Rubric};

/// Validate a rubric before any scoring happens.
/// Returns all validation errors at once (not just the first).
pub fn validate_rubric(rubric: &Rubric) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let caps = [
        ("rubric.teaching.max_score", rubric.teaching.max_score),
        ("rubric.teaching.hours.max_score", rubric.teaching.hours.max_score),
        (
            "rubric.teaching.multi_subject.max_score",
            rubric.teaching.multi_subject.max_score,
        ),
        ("rubric.life.max_score", rubric.life.max_score),
        ("rubric.development.max_score", rubric.development.max_score),
        ("rubric.duty.max_score", rubric.duty.max_score),
    ];
    for (path, cap) in caps {
        if !cap.is_finite() || cap <= 0.0 {
            errors.push(format!("{}: must be a positive number, got {}", path, cap));
        }
    }

    let scalars = [
        ("rubric.teaching.hours.penalty", rubric.teaching.hours.penalty),
        (
            "rubric.teaching.multi_subject.base_score",
            rubric.teaching.multi_subject.base_score,
        ),
        (
            "rubric.teaching.multi_subject.detail_penalty",
            rubric.teaching.multi_subject.detail_penalty,
        ),
        (
            "rubric.teaching.multi_subject.exam_penalty",
            rubric.teaching.multi_subject.exam_penalty,
        ),
        ("rubric.life.base_score", rubric.life.base_score),
        ("rubric.life.morning.full", rubric.life.morning.full),
        ("rubric.life.morning.half", rubric.life.morning.half),
        ("rubric.life.night.full", rubric.life.night.full),
        ("rubric.life.night.half", rubric.life.night.half),
        ("rubric.development.leader", rubric.development.leader),
        ("rubric.development.member", rubric.development.member),
        ("rubric.duty.club.regular_full", rubric.duty.club.regular_full),
        ("rubric.duty.club.regular_half", rubric.duty.club.regular_half),
        ("rubric.duty.club.autonomous", rubric.duty.club.autonomous),
    ];
    for (path, value) in scalars {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", path));
        }
    }

    let class_open = &rubric.teaching.class_open;
    if !class_open.max_score.is_finite() || class_open.max_score < 0.0 {
        errors.push("rubric.teaching.class_open.max_score: must be non-negative".to_string());
    }
    if !class_open.point_per_session.is_finite() || class_open.point_per_session < 0.0 {
        errors.push(
            "rubric.teaching.class_open.point_per_session: must be non-negative".to_string(),
        );
    }

    let multi = &rubric.teaching.multi_subject;
    if multi.additional.is_empty() {
        errors.push("rubric.teaching.multi_subject.additional: must not be empty".to_string());
    }
    for (i, value) in multi.additional.iter().enumerate() {
        if !value.is_finite() {
            errors.push(format!(
                "rubric.teaching.multi_subject.additional[{}]: must be a finite number",
                i
            ));
        }
    }

    let hours = &rubric.teaching.hours;
    for (band, points) in &hours.bands {
        if *points > hours.max_score {
            errors.push(format!(
                "rubric.teaching.hours.bands['{}']: {} exceeds hours max_score {}",
                band, points, hours.max_score
            ));
        }
    }

    let tables: [(&str, &PointTable); 9] = [
        ("rubric.teaching.hours.bands", &hours.bands),
        ("rubric.development.training", &rubric.development.training),
        ("rubric.development.award", &rubric.development.award),
        ("rubric.duty.work_months", &rubric.duty.work_months),
        ("rubric.duty.homeroom", &rubric.duty.homeroom),
        (
            "rubric.duty.non_homeroom.senior_track",
            &rubric.duty.non_homeroom.senior_track,
        ),
        (
            "rubric.duty.non_homeroom.general_track",
            &rubric.duty.non_homeroom.general_track,
        ),
        ("rubric.duty.difficult", &rubric.duty.difficult),
        ("rubric.duty.mutual", &rubric.duty.mutual),
    ];
    for (path, table) in tables {
        validate_table(path, table, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_table(path: &str, table: &PointTable, errors: &mut Vec<String>) {
    if table.is_empty() {
        errors.push(format!("{}: must have at least one entry", path));
    }
    for (key, points) in table {
        if !points.is_finite() {
            errors.push(format!("{}['{}']: must be a finite number", path, key));
        }
    }
}
