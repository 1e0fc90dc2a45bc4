use std::str::FromStr;

use thiserror::Error;

use super::types::{Attendance, Club, DutyType, InputRecord, Semester, SubjectEntry, Track};

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("invalid value '{value}' for {field}: expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
    #[error("unknown semester '{0}' (use sem1|sem2)")]
    UnknownSemester(String),
    #[error("no subject at index {index} in {semester} ({len} entries)")]
    IndexOutOfRange {
        semester: &'static str,
        index: usize,
        len: usize,
    },
}

/// Field-by-field changes to one subject entry. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct SubjectPatch {
    pub name: Option<String>,
    pub detail_length: Option<String>,
    pub has_exam: Option<bool>,
}

impl InputRecord {
    /// Append an empty subject to a semester. Returns its index.
    pub fn add_subject(&mut self, semester: Semester) -> usize {
        let entries = self.teaching.multi_subject.semester_mut(semester);
        entries.push(SubjectEntry::default());
        entries.len() - 1
    }

    /// Remove a subject by position. Later entries shift down by one.
    pub fn delete_subject(
        &mut self,
        semester: Semester,
        index: usize,
    ) -> Result<SubjectEntry, EditError> {
        let entries = self.teaching.multi_subject.semester_mut(semester);
        if index >= entries.len() {
            return Err(EditError::IndexOutOfRange {
                semester: semester.key(),
                index,
                len: entries.len(),
            });
        }
        Ok(entries.remove(index))
    }

    /// Apply a patch to one entry. The patch is checked in full first, so a
    /// rejected patch leaves the entry untouched.
    pub fn update_subject(
        &mut self,
        semester: Semester,
        index: usize,
        patch: SubjectPatch,
    ) -> Result<(), EditError> {
        if let Some(detail_length) = &patch.detail_length {
            if !matches!(detail_length.as_str(), "500" | "250" | "") {
                return Err(EditError::InvalidValue {
                    field: "detailLength".to_string(),
                    value: detail_length.clone(),
                    expected: "500|250|\"\"",
                });
            }
        }

        let entries = self.teaching.multi_subject.semester_mut(semester);
        let len = entries.len();
        let entry = entries.get_mut(index).ok_or(EditError::IndexOutOfRange {
            semester: semester.key(),
            index,
            len,
        })?;

        if let Some(name) = patch.name {
            entry.name = name;
        }
        if let Some(detail_length) = patch.detail_length {
            entry.detail_length = detail_length;
        }
        if let Some(has_exam) = patch.has_exam {
            entry.has_exam = has_exam;
        }
        Ok(())
    }

    /// Set a scalar field from its dotted path and string form,
    /// e.g. `set_field("duty.club", "regularHalf")`.
    ///
    /// Rubric-keyed tags (bands, periods, tiers) are stored as given; a tag
    /// the rubric doesn't know simply scores 0.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), EditError> {
        let teaching = &mut self.teaching;
        let life = &mut self.life;
        let dev = &mut self.dev;
        let duty = &mut self.duty;

        match path {
            "teaching.hoursBand" => teaching.hours_band = value.to_string(),
            "teaching.hoursPenalty" => teaching.hours_penalty = parse_bool(path, value)?,
            "teaching.hoursDifferent" => teaching.hours_different = parse_bool(path, value)?,
            "teaching.classOpenCount" | "teaching.classOpen" => {
                teaching.class_open_count =
                    value.trim().parse().map_err(|_| EditError::InvalidValue {
                        field: path.to_string(),
                        value: value.to_string(),
                        expected: "a non-negative integer",
                    })?
            }
            "life.morning" => life.morning = parse_selector(path, value)?,
            "life.night" => life.night = parse_selector(path, value)?,
            "dev.training" => dev.training = value.to_string(),
            "dev.leader" => dev.leader = parse_bool(path, value)?,
            "dev.member" => dev.member = parse_bool(path, value)?,
            "dev.award" => dev.award = value.to_string(),
            "duty.workMonths" => duty.work_months = value.to_string(),
            "duty.dutyType" => duty.duty_type = parse_selector(path, value)?,
            "duty.homeroomPeriod" => duty.homeroom_period = value.to_string(),
            "duty.nonHomeroomTrack" => duty.non_homeroom_track = parse_selector(path, value)?,
            "duty.seniorPeriod" => duty.senior_period = value.to_string(),
            "duty.generalPeriod" => duty.general_period = value.to_string(),
            "duty.difficult" => duty.difficult = value.to_string(),
            "duty.club" => duty.club = parse_selector(path, value)?,
            "duty.mutual" => duty.mutual = value.to_string(),
            _ => return Err(EditError::UnknownField(path.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, EditError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(EditError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: "true|false",
        }),
    }
}

/// Parse a branch selector; the error names the field being edited.
fn parse_selector<T>(field: &str, value: &str) -> Result<T, EditError>
where
    T: FromStr<Err = EditError>,
{
    value.parse().map_err(|err| match err {
        EditError::InvalidValue {
            value, expected, ..
        } => EditError::InvalidValue {
            field: field.to_string(),
            value,
            expected,
        },
        other => other,
    })
}

fn invalid(value: &str, expected: &'static str) -> EditError {
    EditError::InvalidValue {
        field: String::new(),
        value: value.to_string(),
        expected,
    }
}

impl FromStr for Semester {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sem1" | "1" => Ok(Semester::Sem1),
            "sem2" | "2" => Ok(Semester::Sem2),
            other => Err(EditError::UnknownSemester(other.to_string())),
        }
    }
}

impl FromStr for Attendance {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attendance::known(s.trim()).ok_or_else(|| invalid(s.trim(), "none|full|half"))
    }
}

impl FromStr for DutyType {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DutyType::known(s.trim()).ok_or_else(|| invalid(s.trim(), "homeroom|nonHomeroom"))
    }
}

impl FromStr for Track {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::known(s.trim()).ok_or_else(|| invalid(s.trim(), "senior|general"))
    }
}

impl FromStr for Club {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Club::known(s.trim())
            .ok_or_else(|| invalid(s.trim(), "none|regular|regularHalf|autonomous"))
    }
}
