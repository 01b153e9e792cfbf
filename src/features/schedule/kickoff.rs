use std::fmt;

use chrono::{NaiveTime, TimeDelta};

use crate::shared::constants::KICKOFF_FORMAT;

/// Wall-clock kickoff time of a fixture, rendered as `10h00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Kickoff(NaiveTime);

impl Kickoff {
    #[cfg(test)]
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a `HHhMM` label
    pub fn parse(label: &str) -> Option<Self> {
        NaiveTime::parse_from_str(label.trim(), KICKOFF_FORMAT)
            .ok()
            .map(Self)
    }

    /// The kickoff `minutes` later; minutes past 59 carry into the hour.
    ///
    /// `None` when the result would fall on the next day.
    pub fn plus_minutes(self, minutes: u32) -> Option<Self> {
        match self
            .0
            .overflowing_add_signed(TimeDelta::minutes(i64::from(minutes)))
        {
            (time, 0) => Some(Self(time)),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        self.0.format(KICKOFF_FORMAT).to_string()
    }
}

impl fmt::Display for Kickoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
