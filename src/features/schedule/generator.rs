//! Fixture generation for the tournament day.
//!
//! Morning pool play is a single round-robin per category spread over the
//! parallel fields; the afternoon is a fixed list of friendlies.

use crate::features::fixtures::models::{NewFixture, Phase};
use crate::features::schedule::Kickoff;
use crate::features::tournament::{MorningSettings, SettingsError, TournamentSettings};

/// Timetable of the morning pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorningParams {
    pub start: Kickoff,
    pub match_minutes: u32,
    pub break_minutes: u32,
    pub fields: u32,
}

impl MorningParams {
    pub fn from_settings(settings: &MorningSettings) -> Result<Self, SettingsError> {
        let start = Kickoff::parse(&settings.start).ok_or_else(|| {
            SettingsError::Invalid(format!(
                "morning start '{}' is not a HHhMM time",
                settings.start
            ))
        })?;

        Ok(Self {
            start,
            match_minutes: settings.match_minutes,
            break_minutes: settings.break_minutes,
            fields: settings.fields.max(1),
        })
    }

    /// Minutes between two consecutive rounds
    pub fn slot_minutes(&self) -> u32 {
        self.match_minutes.saturating_add(self.break_minutes)
    }
}

/// Every unordered pairing of `roster`, exactly once.
///
/// Order is (0,1), (0,2) … (0,n-1), (1,2) … which also fixes the order in
/// which fixtures receive fields and kickoffs.
pub fn round_robin(roster: &[String]) -> Vec<(&str, &str)> {
    let mut pairs = Vec::with_capacity(roster.len() * roster.len().saturating_sub(1) / 2);
    for (i, home) in roster.iter().enumerate() {
        for away in &roster[i + 1..] {
            pairs.push((home.as_str(), away.as_str()));
        }
    }
    pairs
}

/// Morning fixtures of one category.
///
/// Fixture `k` plays on field `k % fields + 1`; fixtures of the same round
/// share a kickoff and each new round starts one slot later. Fewer than two
/// teams yields no fixtures. Fails when a round would kick off past midnight.
pub fn generate_morning(
    category: &str,
    roster: &[String],
    params: &MorningParams,
) -> Result<Vec<NewFixture>, SettingsError> {
    let fields = params.fields.max(1) as usize;

    round_robin(roster)
        .into_iter()
        .enumerate()
        .map(|(index, (team1, team2))| {
            let round = (index / fields) as u32;
            let kickoff = params
                .start
                .plus_minutes(round.saturating_mul(params.slot_minutes()))
                .ok_or_else(|| {
                    SettingsError::Invalid(format!(
                        "{} morning round {} would start after midnight",
                        category,
                        round + 1
                    ))
                })?;

            Ok(NewFixture {
                category: category.to_string(),
                team1: team1.to_string(),
                team2: team2.to_string(),
                phase: Phase::Morning,
                field: Some((index % fields) as i32 + 1),
                kickoff: kickoff.label(),
            })
        })
        .collect()
}

/// The configured afternoon friendlies, in configuration order
pub fn afternoon_fixtures(settings: &TournamentSettings) -> Result<Vec<NewFixture>, SettingsError> {
    settings
        .afternoon
        .iter()
        .map(|fixture| {
            let kickoff = Kickoff::parse(&fixture.kickoff).ok_or_else(|| {
                SettingsError::Invalid(format!(
                    "afternoon kickoff '{}' is not a HHhMM time",
                    fixture.kickoff
                ))
            })?;

            Ok(NewFixture {
                category: fixture.category.clone(),
                team1: fixture.team1.clone(),
                team2: fixture.team2.clone(),
                phase: Phase::Afternoon,
                field: None,
                kickoff: kickoff.label(),
            })
        })
        .collect()
}

/// The whole day: each category's morning pool in category order, then the afternoon
pub fn generate_tournament(
    settings: &TournamentSettings,
) -> Result<Vec<NewFixture>, SettingsError> {
    let params = MorningParams::from_settings(&settings.morning)?;

    let mut fixtures = Vec::new();
    for category in &settings.categories {
        fixtures.extend(generate_morning(
            &category.name,
            &category.morning_teams,
            &params,
        )?);
    }
    fixtures.extend(afternoon_fixtures(settings)?);

    Ok(fixtures)
}
