use super::punch_type::PunchType;
use chrono::NaiveDate;
use serde::Serialize;

/// Up to one `"HH:MM"` label per punch type for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayPunches {
    pub entry: Option<String>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub exit: Option<String>,
}

impl DayPunches {
    pub fn get(&self, kind: PunchType) -> Option<&str> {
        match kind {
            PunchType::Entry => self.entry.as_deref(),
            PunchType::LunchStart => self.lunch_start.as_deref(),
            PunchType::LunchEnd => self.lunch_end.as_deref(),
            PunchType::Exit => self.exit.as_deref(),
        }
    }

    /// Overwrites any label already present for `kind`.
    pub fn set(&mut self, kind: PunchType, time: impl Into<String>) {
        let slot = match kind {
            PunchType::Entry => &mut self.entry,
            PunchType::LunchStart => &mut self.lunch_start,
            PunchType::LunchEnd => &mut self.lunch_end,
            PunchType::Exit => &mut self.exit,
        };
        *slot = Some(time.into());
    }

    pub fn is_empty(&self) -> bool {
        PunchType::ALL.iter().all(|k| self.get(*k).is_none())
    }
}

/// One report row: a local calendar date, its punches and worked hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub label: String,
    pub punches: DayPunches,
    pub hours: f64,
}
