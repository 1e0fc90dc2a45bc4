use super::breakdown::{format_number, CategoryResult, SECTION_DEVELOPMENT};
use crate::record::DevInput;
use crate::rubric::{lookup, DevelopmentRubric};

/// 전문성개발: training tier plus research-role and award bonuses.
pub fn score_development(input: &DevInput, rubric: &DevelopmentRubric) -> CategoryResult {
    let mut result = CategoryResult::default();

    let training = lookup(&rubric.training, &input.training);
    let mut raw = training;
    result.line(
        SECTION_DEVELOPMENT,
        "연수시간",
        input.training.clone(),
        format!("{}점", format_number(training)),
        training,
    );

    if input.leader {
        raw += rubric.leader;
        result.line(
            SECTION_DEVELOPMENT,
            "연구대회/교과연구/다락방 팀장",
            "체크",
            format!("+{}점", format_number(rubric.leader)),
            rubric.leader,
        );
    }

    if input.member {
        raw += rubric.member;
        result.line(
            SECTION_DEVELOPMENT,
            "다락방 팀원",
            "체크",
            format!("+{}점", format_number(rubric.member)),
            rubric.member,
        );
    }

    let award = lookup(&rubric.award, &input.award);
    if award > 0.0 {
        raw += award;
        result.line(
            SECTION_DEVELOPMENT,
            "포상",
            format!("{}회", input.award),
            format!("+{}점", format_number(award)),
            award,
        );
    }

    result.finish(raw, rubric.max_score, "전문성개발 영역")
}
