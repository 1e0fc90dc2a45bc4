use super::breakdown::{format_number, CategoryResult, SECTION_LIFE};
use crate::record::{Attendance, LifeInput};
use crate::rubric::{AttendanceRubric, LifeRubric};

/// 생활지도: fixed base score plus morning and night supervision bonuses.
pub fn score_life(input: &LifeInput, rubric: &LifeRubric) -> CategoryResult {
    let mut result = CategoryResult::default();
    let mut raw = rubric.base_score;

    result.line(
        SECTION_LIFE,
        "기본점수",
        "-",
        format!("{}점", format_number(rubric.base_score)),
        rubric.base_score,
    );

    raw += attendance_bonus(&mut result, "등교지도", &input.morning, &rubric.morning);
    raw += attendance_bonus(&mut result, "야간자율학습", &input.night, &rubric.night);

    result.finish(raw, rubric.max_score, "생활지도 영역")
}

fn attendance_bonus(
    result: &mut CategoryResult,
    item: &str,
    attendance: &Attendance,
    rubric: &AttendanceRubric,
) -> f64 {
    let (selected, points) = match attendance {
        Attendance::Full => ("전체", rubric.full),
        Attendance::Half => ("한학기만", rubric.half),
        Attendance::None | Attendance::Unrecognized(_) => return 0.0,
    };
    result.line(
        SECTION_LIFE,
        item,
        selected,
        format!("+{}점", format_number(points)),
        points,
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::Rubric;

    fn life(morning: Attendance, night: Attendance) -> LifeInput {
        LifeInput { morning, night }
    }

    #[test]
    fn test_base_only() {
        let out = score_life(&LifeInput::default(), &Rubric::default().life);
        assert_eq!(out.score, 27.0);
        assert_eq!(out.breakdown.len(), 1);
        assert_eq!(out.breakdown[0].item, "기본점수");
        assert_eq!(out.breakdown[0].formula, "27점");
    }

    #[test]
    fn test_morning_full_night_none() {
        let out = score_life(
            &life(Attendance::Full, Attendance::None),
            &Rubric::default().life,
        );
        assert_eq!(out.score, 28.5);
        assert!(out.warnings.is_empty());
        assert_eq!(out.breakdown.len(), 2);
        assert_eq!(out.breakdown[1].item, "등교지도");
        assert_eq!(out.breakdown[1].selected, "전체");
        assert_eq!(out.breakdown[1].formula, "+1.5점");
    }

    #[test]
    fn test_both_half() {
        let out = score_life(
            &life(Attendance::Half, Attendance::Half),
            &Rubric::default().life,
        );
        assert_eq!(out.score, 28.5);
        assert_eq!(out.breakdown[2].item, "야간자율학습");
        assert_eq!(out.breakdown[2].formula, "+0.75점");
    }

    #[test]
    fn test_both_full_reaches_cap_without_warning() {
        let out = score_life(
            &life(Attendance::Full, Attendance::Full),
            &Rubric::default().life,
        );
        assert_eq!(out.score, 30.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_unrecognized_adds_nothing() {
        let out = score_life(
            &life(
                Attendance::Unrecognized("sometimes".to_string()),
                Attendance::Unrecognized(String::new()),
            ),
            &Rubric::default().life,
        );
        assert_eq!(out.score, 27.0);
        assert_eq!(out.breakdown.len(), 1);
    }

    #[test]
    fn test_cap_warning() {
        let mut rubric = Rubric::default().life;
        rubric.base_score = 29.0;
        let out = score_life(&life(Attendance::Full, Attendance::None), &rubric);
        assert_eq!(out.score, 30.0);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].starts_with("생활지도 영역 점수(30.5점)"));
    }
}
