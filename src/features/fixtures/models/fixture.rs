use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Segment of the tournament day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Phase {
    /// Pool play on the split fields; the only phase that counts for standings
    #[serde(rename = "matin", alias = "morning")]
    Morning,
    /// Full-squad friendly on the big field
    #[serde(rename = "apresmidi", alias = "afternoon")]
    Afternoon,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Morning => "matin",
            Phase::Afternoon => "apresmidi",
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Phase::Morning)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown phase '{0}'")]
pub struct PhaseParseError(pub String);

impl FromStr for Phase {
    type Err = PhaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matin" | "morning" => Ok(Phase::Morning),
            "apresmidi" | "afternoon" => Ok(Phase::Afternoon),
            other => Err(PhaseParseError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Phase {
    type Error = PhaseParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Database model for a stored fixture
///
/// Columns keep the names used on the wire (`categorie`, `equipe1`, ...).
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Fixture {
    pub id: Uuid,
    #[sqlx(rename = "categorie")]
    pub category: String,
    #[sqlx(rename = "equipe1")]
    pub team1: String,
    #[sqlx(rename = "equipe2")]
    pub team2: String,
    #[sqlx(try_from = "String")]
    pub phase: Phase,
    #[sqlx(rename = "terrain")]
    pub field: Option<i32>,
    #[sqlx(rename = "heure")]
    pub kickoff: String,
    pub score1: Option<i32>,
    pub score2: Option<i32>,
    /// Score at the break, afternoon friendlies only
    #[sqlx(rename = "mi_temps1")]
    pub half_time1: Option<i32>,
    #[sqlx(rename = "mi_temps2")]
    pub half_time2: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fixture {
    /// Both scores, when the match has been fully recorded
    pub fn result(&self) -> Option<(i32, i32)> {
        self.score1.zip(self.score2)
    }

    /// Whether this fixture pits `a` against `b`, in either order
    pub fn is_pairing(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }
}

/// A fixture produced by the schedule generator: no identity, no scores yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFixture {
    pub category: String,
    pub team1: String,
    pub team2: String,
    pub phase: Phase,
    pub field: Option<i32>,
    pub kickoff: String,
}

/// Tallies recorded for a fixture; any of them may still be unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureScores {
    pub score1: Option<i32>,
    pub score2: Option<i32>,
    pub half_time1: Option<i32>,
    pub half_time2: Option<i32>,
}

/// A validated write coming from the admin surface
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureWrite {
    /// Target fixture; when absent the natural pairing is used to find one
    pub id: Option<Uuid>,
    pub fixture: NewFixture,
    pub scores: FixtureScores,
}
