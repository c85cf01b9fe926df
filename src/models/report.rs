use super::daily::DailyAggregate;
use serde::{Deserialize, Serialize};

/// How report rows are ordered.
///
/// `Lexical` compares the rendered date labels as strings, which is what
/// the browser version did. `Chronological` sorts by calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrdering {
    #[default]
    Lexical,
    Chronological,
}

/// Monthly attendance summary for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub month: u32,
    pub year: i32,
    pub days: Vec<DailyAggregate>,
    pub total_days: usize,
    pub total_hours: f64,
    pub avg_hours: f64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
