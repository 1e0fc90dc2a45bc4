use super::breakdown::{format_number, CategoryResult, SECTION_TEACHING};
use super::multi_subject::{score_multi_subject, MultiSubjectDetails};
use crate::record::TeachingInput;
use crate::rubric::{lookup, TeachingRubric};

#[derive(Debug, Clone, PartialEq)]
pub struct TeachingResult {
    pub result: CategoryResult,
    pub multi_subject_details: MultiSubjectDetails,
}

/// 학습지도: hours band (with optional penalty), multi-subject teaching and
/// open classes, capped at the category maximum.
pub fn score_teaching(input: &TeachingInput, rubric: &TeachingRubric) -> TeachingResult {
    let mut result = CategoryResult::default();

    let band_score = lookup(&rubric.hours.bands, &input.hours_band);
    let mut hours_score = band_score;
    result.line(
        SECTION_TEACHING,
        "수업시수",
        input.hours_band.clone(),
        format!("{}점", format_number(band_score)),
        band_score,
    );

    if input.hours_penalty {
        let penalty = rubric.hours.penalty;
        hours_score += penalty;
        result.line(
            SECTION_TEACHING,
            "수업시수 감점",
            "2~6개월 미만",
            format!("{}점", format_number(penalty)),
            penalty,
        );
    }

    if input.hours_different {
        result
            .line(SECTION_TEACHING, "수업시수 참고", "1,2학기 시수 상이", "-", 0.0)
            .note = "참고용 (점수 미반영)".to_string();
    }

    let multi = score_multi_subject(&input.multi_subject, &rubric.multi_subject);
    result.breakdown.extend(multi.result.breakdown);
    result.warnings.extend(multi.result.warnings);

    let class_open = &rubric.class_open;
    let count = input.class_open_count;
    let class_open_score =
        (f64::from(count) * class_open.point_per_session).min(class_open.max_score);
    result.line(
        SECTION_TEACHING,
        "수업공개",
        format!("{}회", count),
        format!(
            "min({} × {}, {:.1})",
            count,
            format_number(class_open.point_per_session),
            class_open.max_score
        ),
        class_open_score,
    );

    let raw = hours_score + multi.result.score + class_open_score;
    TeachingResult {
        result: result.finish(raw, rubric.max_score, "학습지도 영역"),
        multi_subject_details: multi.details,
    }
}
