use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four punches of a working day, in their expected order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    Entry,
    LunchStart,
    LunchEnd,
    Exit,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::Entry,
        PunchType::LunchStart,
        PunchType::LunchEnd,
        PunchType::Exit,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::Entry => "entry",
            PunchType::LunchStart => "lunch_start",
            PunchType::LunchEnd => "lunch_end",
            PunchType::Exit => "exit",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(PunchType::Entry),
            "lunch_start" => Some(PunchType::LunchStart),
            "lunch_end" => Some(PunchType::LunchEnd),
            "exit" => Some(PunchType::Exit),
            _ => None,
        }
    }

    /// Human readable label used in messages and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::Entry => "Entry",
            PunchType::LunchStart => "Lunch-Start",
            PunchType::LunchEnd => "Lunch-End",
            PunchType::Exit => "Exit",
        }
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
