use serde::{Deserialize, Serialize};

pub const SECTION_TEACHING: &str = "학습지도";
pub const SECTION_LIFE: &str = "생활지도";
pub const SECTION_DEVELOPMENT: &str = "전문성개발";
pub const SECTION_DUTY: &str = "담당업무";

/// One row of the score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub section: String, // e.g. "학습지도"
    pub item: String,    // e.g. "수업시수"
    pub selected: String, // human-readable selection, e.g. "18+", "3회"
    pub formula: String, // e.g. "25점", "min(3 × 0.5, 1.0)"
    pub points: f64,
    pub note: String,
}

/// Score, ordered breakdown and warnings for one category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryResult {
    pub score: f64,
    pub breakdown: Vec<LineItem>,
    pub warnings: Vec<String>,
}

impl CategoryResult {
    pub(crate) fn line(
        &mut self,
        section: &str,
        item: impl Into<String>,
        selected: impl Into<String>,
        formula: impl Into<String>,
        points: f64,
    ) -> &mut LineItem {
        self.breakdown.push(LineItem {
            section: section.to_string(),
            item: item.into(),
            selected: selected.into(),
            formula: formula.into(),
            points,
            note: String::new(),
        });
        let last = self.breakdown.len() - 1;
        &mut self.breakdown[last]
    }

    /// Clamp the raw category sum into `[0, cap]` and store it as the score.
    pub(crate) fn finish(mut self, raw: f64, cap: f64, label: &str) -> Self {
        self.score = clamp_score(raw, cap, label, &mut self.warnings);
        self
    }
}

/// Clamp `raw` into `[0, cap]`. Exceeding the cap records a warning; only a
/// value strictly above the cap counts, so landing exactly on it is silent.
pub(crate) fn clamp_score(raw: f64, cap: f64, label: &str, warnings: &mut Vec<String>) -> f64 {
    if raw > cap {
        tracing::debug!(label, raw, cap, "score capped");
        warnings.push(format!(
            "{} 점수({}점)가 최대값 {}점으로 제한되었습니다.",
            label,
            format_number(raw),
            format_number(cap)
        ));
        cap
    } else {
        raw.max(0.0)
    }
}

/// Render a point value without float noise: at most two decimals, trailing
/// zeros dropped ("25", "0.75", "-0.5").
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
