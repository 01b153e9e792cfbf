use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::fixtures::models::Phase;
use crate::features::schedule::Kickoff;
use crate::shared::constants::MAX_PARALLEL_FIELDS;
use crate::shared::validation::CATEGORY_REGEX;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read tournament file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tournament file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tournament settings: {0}")]
    Invalid(String),
}

/// Everything fixed before the first whistle: categories, squads and the day's timetable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub categories: Vec<CategorySettings>,
    pub morning: MorningSettings,
    #[serde(default)]
    pub afternoon: Vec<AfternoonFixtureSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySettings {
    pub name: String,
    /// Subdivided squads playing the morning pool
    pub morning_teams: Vec<String>,
    /// Full squads playing the afternoon friendly
    #[serde(default)]
    pub afternoon_teams: Vec<String>,
}

/// Morning pool play parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningSettings {
    /// First kickoff, `HHhMM`
    pub start: String,
    pub match_minutes: u32,
    pub break_minutes: u32,
    pub fields: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfternoonFixtureSettings {
    pub category: String,
    pub team1: String,
    pub team2: String,
    pub kickoff: String,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        let teams = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

        Self {
            categories: vec![
                CategorySettings {
                    name: "U11".to_string(),
                    morning_teams: teams(&["Forges 1", "Forges 2", "Foucarmont 1", "Foucarmont 2"]),
                    afternoon_teams: teams(&["Forges", "Foucarmont"]),
                },
                CategorySettings {
                    name: "U13".to_string(),
                    morning_teams: teams(&["Forges 1", "Forges 2", "Gournay 1", "Gournay 2"]),
                    afternoon_teams: teams(&["Forges", "Gournay"]),
                },
            ],
            morning: MorningSettings {
                start: "10h00".to_string(),
                match_minutes: 6,
                break_minutes: 4,
                fields: 2,
            },
            afternoon: vec![
                AfternoonFixtureSettings {
                    category: "U11".to_string(),
                    team1: "Forges".to_string(),
                    team2: "Foucarmont".to_string(),
                    kickoff: "14h00".to_string(),
                },
                AfternoonFixtureSettings {
                    category: "U13".to_string(),
                    team1: "Forges".to_string(),
                    team2: "Gournay".to_string(),
                    kickoff: "15h00".to_string(),
                },
            ],
        }
    }
}

impl TournamentSettings {
    /// Read settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn category(&self, name: &str) -> Option<&CategorySettings> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Teams allowed to play in `phase` for `category`
    pub fn roster(&self, category: &str, phase: Phase) -> Option<&[String]> {
        self.category(category).map(|c| match phase {
            Phase::Morning => c.morning_teams.as_slice(),
            Phase::Afternoon => c.afternoon_teams.as_slice(),
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.categories.is_empty() {
            return invalid("at least one category is required".to_string());
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !CATEGORY_REGEX.is_match(&category.name) {
                return invalid(format!("category name '{}' is not valid", category.name));
            }
            if !seen.insert(category.name.as_str()) {
                return invalid(format!("category '{}' is declared twice", category.name));
            }
            check_roster(&category.name, "morning", &category.morning_teams)?;
            check_roster(&category.name, "afternoon", &category.afternoon_teams)?;
        }

        let Some(start) = Kickoff::parse(&self.morning.start) else {
            return invalid(format!(
                "morning start '{}' is not a HHhMM time",
                self.morning.start
            ));
        };
        if self.morning.match_minutes == 0 {
            return invalid("morning match_minutes must be greater than zero".to_string());
        }
        if !(1..=MAX_PARALLEL_FIELDS).contains(&self.morning.fields) {
            return invalid(format!(
                "morning fields must be between 1 and {}, got {}",
                MAX_PARALLEL_FIELDS, self.morning.fields
            ));
        }

        // The last morning round must still kick off on the tournament day
        let slot = self
            .morning
            .match_minutes
            .saturating_add(self.morning.break_minutes);
        for category in &self.categories {
            let teams = category.morning_teams.len() as u32;
            let fixtures = teams.saturating_mul(teams.saturating_sub(1)) / 2;
            let rounds = fixtures.div_ceil(self.morning.fields);
            let last_round = rounds.saturating_sub(1).saturating_mul(slot);
            if rounds > 0 && start.plus_minutes(last_round).is_none() {
                return invalid(format!(
                    "{} morning pool starting at {} runs past midnight",
                    category.name, start
                ));
            }
        }

        for fixture in &self.afternoon {
            let Some(roster) = self.roster(&fixture.category, Phase::Afternoon) else {
                return invalid(format!(
                    "afternoon fixture references unknown category '{}'",
                    fixture.category
                ));
            };
            if fixture.team1 == fixture.team2 {
                return invalid(format!(
                    "afternoon fixture in {} opposes '{}' to itself",
                    fixture.category, fixture.team1
                ));
            }
            for team in [&fixture.team1, &fixture.team2] {
                if !roster.contains(team) {
                    return invalid(format!(
                        "afternoon team '{}' is not in the {} afternoon squad list",
                        team, fixture.category
                    ));
                }
            }
            if Kickoff::parse(&fixture.kickoff).is_none() {
                return invalid(format!(
                    "afternoon kickoff '{}' is not a HHhMM time",
                    fixture.kickoff
                ));
            }
        }

        Ok(())
    }
}

fn check_roster(category: &str, phase: &str, teams: &[String]) -> Result<(), SettingsError> {
    let mut seen = HashSet::new();
    for team in teams {
        if team.trim().is_empty() {
            return Err(SettingsError::Invalid(format!(
                "{} {} roster contains an empty team name",
                category, phase
            )));
        }
        if !seen.insert(team.as_str()) {
            return Err(SettingsError::Invalid(format!(
                "{} {} roster lists '{}' twice",
                category, phase, team
            )));
        }
    }
    Ok(())
}
