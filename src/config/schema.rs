use serde::{Deserialize, Serialize};

use crate::rubric::Rubric;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Complete rubric override. When absent the built-in rubric is used.
    #[serde(default)]
    pub rubric: Option<Rubric>,

    /// Where the input-record snapshot lives (defaults to
    /// ~/.config/teacher-eval/state.json)
    #[serde(default)]
    pub state_path: Option<String>,
}

impl Config {
    /// The rubric every scorer should use for this run.
    pub fn effective_rubric(&self) -> Rubric {
        self.rubric.clone().unwrap_or_default()
    }
}
