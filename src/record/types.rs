use serde::{Deserialize, Deserializer, Serialize};

/// Wire tags for a branch selector. A value outside the known set is kept
/// verbatim in `Unrecognized` so it survives a save/load cycle.
macro_rules! selector_tags {
    ($selector:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $selector {
            pub fn known(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($selector::$variant),)+
                    _ => None,
                }
            }

            pub fn tag(&self) -> &str {
                match self {
                    $($selector::$variant => $tag,)+
                    $selector::Unrecognized(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $selector {
            fn from(tag: String) -> Self {
                $selector::known(&tag).unwrap_or($selector::Unrecognized(tag))
            }
        }

        impl From<$selector> for String {
            fn from(selector: $selector) -> Self {
                selector.tag().to_string()
            }
        }
    };
}

/// Everything the evaluee selected. One instance per evaluation; the caller
/// owns it and mutates it between recalculations.
///
/// Field names and tag values follow the transfer format exactly
/// (`hoursBand`, `"nonHomeroom"`, `"6+"`, ...). Missing sections or fields
/// fall back to the reset state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRecord {
    pub teaching: TeachingInput,
    pub life: LifeInput,
    pub dev: DevInput,
    pub duty: DutyInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeachingInput {
    #[serde(deserialize_with = "selection_tag")]
    pub hours_band: String,
    pub hours_penalty: bool,
    /// Semesters had different hours. Shown in the breakdown, never scored.
    pub hours_different: bool,
    #[serde(alias = "classOpen")]
    pub class_open_count: u32,
    pub multi_subject: MultiSubject,
}

impl Default for TeachingInput {
    fn default() -> Self {
        Self {
            hours_band: "18+".to_string(),
            hours_penalty: false,
            hours_different: false,
            class_open_count: 0,
            multi_subject: MultiSubject::default(),
        }
    }
}

/// Subjects taught per semester, in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSubject {
    pub sem1: Vec<SubjectEntry>,
    pub sem2: Vec<SubjectEntry>,
}

impl MultiSubject {
    pub fn semester(&self, semester: Semester) -> &[SubjectEntry] {
        match semester {
            Semester::Sem1 => &self.sem1,
            Semester::Sem2 => &self.sem2,
        }
    }

    pub fn semester_mut(&mut self, semester: Semester) -> &mut Vec<SubjectEntry> {
        match semester {
            Semester::Sem1 => &mut self.sem1,
            Semester::Sem2 => &mut self.sem2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Sem1,
    Sem2,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::Sem1, Semester::Sem2];

    pub fn label(self) -> &'static str {
        match self {
            Semester::Sem1 => "1학기",
            Semester::Sem2 => "2학기",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Semester::Sem1 => "sem1",
            Semester::Sem2 => "sem2",
        }
    }
}

/// One subject row. Identity is its index within the semester list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectEntry {
    pub name: String,
    /// "500", "250" or "" (not chosen)
    #[serde(deserialize_with = "selection_tag")]
    pub detail_length: String,
    pub has_exam: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeInput {
    pub morning: Attendance,
    pub night: Attendance,
}

/// How long a supervision duty was held.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attendance {
    #[default]
    None,
    Full,
    Half,
    Unrecognized(String),
}

selector_tags!(Attendance {
    None => "none",
    Full => "full",
    Half => "half",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevInput {
    #[serde(deserialize_with = "selection_tag")]
    pub training: String,
    pub leader: bool,
    pub member: bool,
    #[serde(deserialize_with = "selection_tag")]
    pub award: String,
}

impl Default for DevInput {
    fn default() -> Self {
        Self {
            training: "45+".to_string(),
            leader: false,
            member: false,
            award: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DutyInput {
    #[serde(deserialize_with = "selection_tag")]
    pub work_months: String,
    pub duty_type: DutyType,
    #[serde(deserialize_with = "selection_tag")]
    pub homeroom_period: String,
    pub non_homeroom_track: Track,
    #[serde(deserialize_with = "selection_tag")]
    pub senior_period: String,
    #[serde(deserialize_with = "selection_tag")]
    pub general_period: String,
    #[serde(deserialize_with = "selection_tag")]
    pub difficult: String,
    pub club: Club,
    #[serde(deserialize_with = "selection_tag")]
    pub mutual: String,
}

impl Default for DutyInput {
    fn default() -> Self {
        Self {
            work_months: "12".to_string(),
            duty_type: DutyType::Homeroom,
            homeroom_period: "12".to_string(),
            non_homeroom_track: Track::Senior,
            senior_period: "12".to_string(),
            general_period: "12".to_string(),
            difficult: "none".to_string(),
            club: Club::None,
            mutual: "none".to_string(),
        }
    }
}

/// Anything other than `homeroom` is scored as non-homeroom.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DutyType {
    #[default]
    Homeroom,
    NonHomeroom,
    Unrecognized(String),
}

selector_tags!(DutyType {
    Homeroom => "homeroom",
    NonHomeroom => "nonHomeroom",
});

/// Non-homeroom track. Anything other than `senior` is scored as general.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Track {
    #[default]
    Senior,
    General,
    Unrecognized(String),
}

selector_tags!(Track {
    Senior => "senior",
    General => "general",
});

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Club {
    #[default]
    None,
    /// Regular club, whole year
    Regular,
    /// Regular club, one semester only
    RegularHalf,
    /// Autonomous club, whole year
    Autonomous,
    Unrecognized(String),
}

selector_tags!(Club {
    None => "none",
    Regular => "regular",
    RegularHalf => "regularHalf",
    Autonomous => "autonomous",
});

/// Accept a selection tag written either as a string or as a bare number
/// (`"12"` and `12` both become `"12"`).
fn selection_tag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tag {
        Text(String),
        Integer(i64),
        Float(f64),
        Missing(Option<()>),
    }

    Ok(match Tag::deserialize(deserializer)? {
        Tag::Text(text) => text,
        Tag::Integer(n) => n.to_string(),
        Tag::Float(f) => f.to_string(),
        Tag::Missing(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_reset_state() {
        let record = InputRecord::default();
        assert_eq!(record.teaching.hours_band, "18+");
        assert_eq!(record.teaching.class_open_count, 0);
        assert!(record.teaching.multi_subject.sem1.is_empty());
        assert_eq!(record.life.morning, Attendance::None);
        assert_eq!(record.dev.training, "45+");
        assert_eq!(record.dev.award, "0");
        assert_eq!(record.duty.duty_type, DutyType::Homeroom);
        assert_eq!(record.duty.non_homeroom_track, Track::Senior);
        assert_eq!(record.duty.club, Club::None);
        assert_eq!(record.duty.mutual, "none");
    }

    #[test]
    fn test_parse_transfer_format() {
        let json = r#"{
            "teaching": {
                "hoursBand": "17",
                "hoursPenalty": true,
                "hoursDifferent": false,
                "multiSubject": {
                    "sem1": [{ "name": "Math", "detailLength": "500", "hasExam": true }],
                    "sem2": []
                },
                "classOpenCount": 2
            },
            "life": { "morning": "full", "night": "half" },
            "dev": { "training": "30-45", "leader": true, "member": false, "award": "2+" },
            "duty": {
                "workMonths": "12-",
                "dutyType": "nonHomeroom",
                "homeroomPeriod": "12",
                "nonHomeroomTrack": "general",
                "seniorPeriod": "12",
                "generalPeriod": "6-12",
                "difficult": "level1",
                "club": "regularHalf",
                "mutual": "6-"
            }
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.teaching.hours_band, "17");
        assert!(record.teaching.hours_penalty);
        assert_eq!(record.teaching.class_open_count, 2);
        assert_eq!(record.teaching.multi_subject.sem1[0].detail_length, "500");
        assert_eq!(record.life.night, Attendance::Half);
        assert_eq!(record.dev.award, "2+");
        assert_eq!(record.duty.duty_type, DutyType::NonHomeroom);
        assert_eq!(record.duty.non_homeroom_track, Track::General);
        assert_eq!(record.duty.club, Club::RegularHalf);
    }

    #[test]
    fn test_legacy_class_open_key() {
        let json = r#"{ "teaching": { "classOpen": 3 } }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.teaching.class_open_count, 3);
        assert_eq!(record.teaching.hours_band, "18+");
    }

    #[test]
    fn test_numeric_tags_accepted() {
        let json = r#"{ "dev": { "award": 1 }, "duty": { "workMonths": 12 } }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dev.award, "1");
        assert_eq!(record.duty.work_months, "12");
    }

    #[test]
    fn test_null_detail_length_is_empty() {
        let json = r#"{ "name": "Art", "detailLength": null, "hasExam": false }"#;
        let entry: SubjectEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.detail_length, "");
    }

    #[test]
    fn test_unrecognized_selectors_still_parse() {
        let json = r#"{
            "life": { "morning": "sometimes" },
            "duty": { "dutyType": "other", "nonHomeroomTrack": "x", "club": "chess" }
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.life.morning, Attendance::Unrecognized("sometimes".to_string()));
        assert_eq!(record.duty.duty_type, DutyType::Unrecognized("other".to_string()));
        assert_eq!(record.duty.non_homeroom_track, Track::Unrecognized("x".to_string()));
        assert_eq!(record.duty.club, Club::Unrecognized("chess".to_string()));
    }

    #[test]
    fn test_unrecognized_selectors_written_back_verbatim() {
        let json = r#"{
            "life": { "morning": "sometimes", "night": "half" },
            "duty": { "dutyType": "other", "club": "chess" }
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["life"]["morning"], "sometimes");
        assert_eq!(value["life"]["night"], "half");
        assert_eq!(value["duty"]["dutyType"], "other");
        assert_eq!(value["duty"]["club"], "chess");

        let reloaded: InputRecord = serde_json::from_value(value).unwrap();
        assert_eq!(reloaded, record);
    }

    #[test]
    fn test_known_tags() {
        assert_eq!(Club::known("regularHalf"), Some(Club::RegularHalf));
        assert_eq!(Club::known("chess"), None);
        assert_eq!(DutyType::NonHomeroom.tag(), "nonHomeroom");
        assert_eq!(Track::Unrecognized("x".to_string()).tag(), "x");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(InputRecord::default()).unwrap();
        assert_eq!(json["teaching"]["hoursBand"], "18+");
        assert_eq!(json["teaching"]["classOpenCount"], 0);
        assert_eq!(json["duty"]["dutyType"], "homeroom");
        assert_eq!(json["duty"]["nonHomeroomTrack"], "senior");
        assert!(json["teaching"]["multiSubject"]["sem1"].is_array());
    }
}
