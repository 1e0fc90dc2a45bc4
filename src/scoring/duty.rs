use super::breakdown::{format_number, CategoryResult, SECTION_DUTY};
use crate::record::{Club, DutyInput, DutyType, Track};
use crate::rubric::{lookup, DutyRubric};

/// 담당업무: months worked, the homeroom or non-homeroom role, and bonuses for
/// difficult duties, clubs and the mutual-aid association.
pub fn score_duty(input: &DutyInput, rubric: &DutyRubric) -> CategoryResult {
    let mut result = CategoryResult::default();

    let work_months = lookup(&rubric.work_months, &input.work_months);
    let mut raw = work_months;
    let months_label = if input.work_months == "12" {
        "12개월"
    } else {
        "12개월 미만"
    };
    result.line(
        SECTION_DUTY,
        "근무개월수",
        months_label,
        format!("{}점", format_number(work_months)),
        work_months,
    );

    // Exactly one role line: homeroom, or one of the two non-homeroom tracks.
    let (item, period, table) = match (&input.duty_type, &input.non_homeroom_track) {
        (DutyType::Homeroom, _) => ("담임", &input.homeroom_period, &rubric.homeroom),
        (_, Track::Senior) => (
            "비담임 (부장/정년)",
            &input.senior_period,
            &rubric.non_homeroom.senior_track,
        ),
        (_, Track::General | Track::Unrecognized(_)) => (
            "비담임 (기획/계원/진로/보건/명퇴)",
            &input.general_period,
            &rubric.non_homeroom.general_track,
        ),
    };
    let role = lookup(table, period);
    raw += role;
    result.line(
        SECTION_DUTY,
        item,
        period.clone(),
        format!("{}점", format_number(role)),
        role,
    );

    if input.difficult != "none" {
        let difficult = lookup(&rubric.difficult, &input.difficult);
        raw += difficult;
        let label = match input.difficult.as_str() {
            "level1" => "방송/교과부장/담당+추가행정".to_string(),
            "level2" => "교무부장/학년부장+담임/교무기획".to_string(),
            other => other.to_string(),
        };
        result.line(
            SECTION_DUTY,
            "곤란/이중업무",
            label,
            format!("+{}점", format_number(difficult)),
            difficult,
        );
    }

    let club = match &input.club {
        Club::Regular => Some(("정규 동아리 12개월", rubric.club.regular_full)),
        Club::RegularHalf => Some(("정규 동아리 한학기만", rubric.club.regular_half)),
        Club::Autonomous => Some(("자율 동아리 12개월", rubric.club.autonomous)),
        Club::None => None,
        Club::Unrecognized(tag) => {
            tracing::debug!(tag = tag.as_str(), "unrecognized club selection, contributing 0");
            None
        }
    };
    if let Some((label, points)) = club {
        raw += points;
        result.line(
            SECTION_DUTY,
            "동아리",
            label,
            format!("+{}점", format_number(points)),
            points,
        );
    }

    if input.mutual != "none" {
        let mutual = lookup(&rubric.mutual, &input.mutual);
        raw += mutual;
        let label = match input.mutual.as_str() {
            "6+" => "6개월 이상".to_string(),
            "6-" => "6개월 미만".to_string(),
            other => other.to_string(),
        };
        result.line(
            SECTION_DUTY,
            "상조회",
            label,
            format!("+{}점", format_number(mutual)),
            mutual,
        );
    }

    result.finish(raw, rubric.max_score, "담당업무 영역")
}
