use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point values keyed by a selection tag (e.g. `"18+"`, `"level1"`, `"6+"`).
pub type PointTable = BTreeMap<String, f64>;

/// Look up a selection tag, degrading to 0 for keys the table doesn't know.
pub fn lookup(table: &PointTable, key: &str) -> f64 {
    match table.get(key) {
        Some(points) => *points,
        None => {
            tracing::debug!(key, "selection not in rubric table, contributing 0");
            0.0
        }
    }
}

fn table(entries: &[(&str, f64)]) -> PointTable {
    entries
        .iter()
        .map(|(key, points)| (key.to_string(), *points))
        .collect()
}

/// The evaluation rubric: every point value and cap used by the scorers.
///
/// `Rubric::default()` is the canonical table. Operators can replace it
/// wholesale through the `rubric:` key of the config file.
///
/// Example YAML (excerpt):
/// ```yaml
/// rubric:
///   life:
///     max_score: 30
///     base_score: 27
///     morning: { full: 1.5, half: 0.75 }
///     night: { full: 1.5, half: 0.75 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rubric {
    pub teaching: TeachingRubric,
    pub life: LifeRubric,
    pub development: DevelopmentRubric,
    pub duty: DutyRubric,
}

/// 학습지도: hours band, multi-subject teaching and open classes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TeachingRubric {
    pub max_score: f64,
    pub hours: HoursRubric,
    pub multi_subject: MultiSubjectRubric,
    pub class_open: ClassOpenRubric,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HoursRubric {
    /// Upper bound for any single band value
    pub max_score: f64,
    pub bands: PointTable,
    /// Added when hours were only covered for 2 to 6 months (negative)
    pub penalty: f64,
}

/// Per-semester formula: `base_score + additional[count] - penalties`,
/// with the two semesters together capped at `max_score`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MultiSubjectRubric {
    pub max_score: f64,
    pub base_score: f64,
    /// Additional score by subject count: index 0 is one subject; the last
    /// entry applies to every larger count.
    pub additional: Vec<f64>,
    /// Per subject whose detail length is anything but `full_detail_length`
    pub detail_penalty: f64,
    /// Per subject without an exam
    pub exam_penalty: f64,
    pub full_detail_length: String,
}

impl MultiSubjectRubric {
    /// Additional score for `count` valid subjects in one semester.
    pub fn additional_for(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.additional
            .get(count - 1)
            .or_else(|| self.additional.last())
            .copied()
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassOpenRubric {
    pub max_score: f64,
    pub point_per_session: f64,
}

/// 생활지도: a fixed base plus morning and night supervision bonuses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LifeRubric {
    pub max_score: f64,
    pub base_score: f64,
    pub morning: AttendanceRubric,
    pub night: AttendanceRubric,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AttendanceRubric {
    /// Whole year
    pub full: f64,
    /// One semester only
    pub half: f64,
}

/// 전문성개발: training hours, research roles and awards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DevelopmentRubric {
    pub max_score: f64,
    pub training: PointTable,
    pub leader: f64,
    pub member: f64,
    pub award: PointTable,
}

/// 담당업무: months worked, homeroom or staff role, and duty bonuses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DutyRubric {
    pub max_score: f64,
    pub work_months: PointTable,
    pub homeroom: PointTable,
    pub non_homeroom: NonHomeroomRubric,
    pub difficult: PointTable,
    pub club: ClubRubric,
    pub mutual: PointTable,
}

/// The two tracks share period keys but never point values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NonHomeroomRubric {
    pub senior_track: PointTable,
    pub general_track: PointTable,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClubRubric {
    pub regular_full: f64,
    pub regular_half: f64,
    pub autonomous: f64,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            teaching: TeachingRubric {
                max_score: 30.0,
                hours: HoursRubric {
                    max_score: 25.0,
                    bands: table(&[
                        ("18+", 25.0),
                        ("17", 24.0),
                        ("16", 23.0),
                        ("15", 22.0),
                        ("14-", 21.0),
                    ]),
                    penalty: -0.5,
                },
                multi_subject: MultiSubjectRubric {
                    max_score: 4.0,
                    base_score: 1.0,
                    additional: vec![0.4, 0.7, 1.0],
                    detail_penalty: 0.1,
                    exam_penalty: 0.1,
                    full_detail_length: "500".to_string(),
                },
                class_open: ClassOpenRubric {
                    max_score: 1.0,
                    point_per_session: 0.5,
                },
            },
            life: LifeRubric {
                max_score: 30.0,
                base_score: 27.0,
                morning: AttendanceRubric {
                    full: 1.5,
                    half: 0.75,
                },
                night: AttendanceRubric {
                    full: 1.5,
                    half: 0.75,
                },
            },
            development: DevelopmentRubric {
                max_score: 10.0,
                training: table(&[("45+", 6.5), ("30-45", 5.5), ("30-", 4.5)]),
                leader: 2.0,
                member: 0.5,
                award: table(&[("0", 0.0), ("1", 1.0), ("2+", 1.5)]),
            },
            duty: DutyRubric {
                max_score: 30.0,
                work_months: table(&[("12", 2.0), ("12-", 1.0)]),
                homeroom: table(&[("12", 24.0), ("6-12", 22.0), ("2-6", 20.0)]),
                non_homeroom: NonHomeroomRubric {
                    senior_track: table(&[("12", 24.0), ("6-12", 23.0), ("2-6", 22.0)]),
                    general_track: table(&[("12", 23.0), ("6-12", 21.0), ("2-6", 19.0)]),
                },
                difficult: table(&[("none", 0.0), ("level1", 0.5), ("level2", 1.0)]),
                club: ClubRubric {
                    regular_full: 2.0,
                    regular_half: 1.0,
                    autonomous: 0.5,
                },
                mutual: table(&[("none", 0.0), ("6+", 1.0), ("6-", 0.5)]),
            },
        }
    }
}
