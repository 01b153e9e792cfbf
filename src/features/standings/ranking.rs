//! League table computation for the morning pool.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::features::fixtures::models::Fixture;

/// Points handed out per match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub win: i32,
    pub loss: i32,
    pub draw: i32,
}

/// Youth rule: every team that shows up scores, a draw beats a loss.
pub const TOURNAMENT_SCORING: ScoringRule = ScoringRule {
    win: 3,
    loss: 1,
    draw: 2,
};

/// One row of the league table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub team: String,
    pub points: i32,
    pub played: u32,
    pub goal_diff: i32,
}

impl Standing {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            points: 0,
            played: 0,
            goal_diff: 0,
        }
    }

    fn record(&mut self, scored: i32, conceded: i32, rule: &ScoringRule) {
        self.played += 1;
        self.goal_diff += scored - conceded;
        self.points += match scored.cmp(&conceded) {
            Ordering::Greater => rule.win,
            Ordering::Less => rule.loss,
            Ordering::Equal => rule.draw,
        };
    }
}

fn compare_points(a: &Standing, b: &Standing) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_difference(a: &Standing, b: &Standing) -> Ordering {
    b.goal_diff.cmp(&a.goal_diff)
}

/// Rank `roster` from the recorded `fixtures` with the tournament scoring rule
pub fn rank(fixtures: &[Fixture], roster: &[String]) -> Vec<Standing> {
    rank_with(fixtures, roster, &TOURNAMENT_SCORING)
}

/// Build the table for `roster`.
///
/// Every roster team gets a row even without a match. Only ranked-phase
/// fixtures with both scores count; a fixture naming a team outside the
/// roster is skipped. Rows are ordered by points, then goal difference, and
/// remaining ties keep roster order.
pub fn rank_with(fixtures: &[Fixture], roster: &[String], rule: &ScoringRule) -> Vec<Standing> {
    let mut table: Vec<Standing> = roster.iter().map(|team| Standing::new(team)).collect();
    let index: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, team)| (team.as_str(), i))
        .collect();

    for fixture in fixtures.iter().filter(|f| f.phase.is_ranked()) {
        let Some((score1, score2)) = fixture.result() else {
            continue;
        };
        let (Some(&home), Some(&away)) = (
            index.get(fixture.team1.as_str()),
            index.get(fixture.team2.as_str()),
        ) else {
            tracing::debug!(
                "Skipping {} vs {}: team not in the {} roster",
                fixture.team1,
                fixture.team2,
                fixture.category
            );
            continue;
        };
        if home == away {
            continue;
        }

        table[home].record(score1, score2, rule);
        table[away].record(score2, score1, rule);
    }

    // sort_by is stable, which keeps roster order for full ties
    table.sort_by(|a, b| compare_points(a, b).then_with(|| compare_goal_difference(a, b)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::models::Phase;
    use chrono::Utc;
    use uuid::Uuid;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn played(team1: &str, team2: &str, score1: Option<i32>, score2: Option<i32>) -> Fixture {
        let now = Utc::now();
        Fixture {
            id: Uuid::now_v7(),
            category: "U11".to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            phase: Phase::Morning,
            field: Some(1),
            kickoff: "10h00".to_string(),
            score1,
            score2,
            half_time1: None,
            half_time2: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn row(table: &[Standing], team: &str) -> Standing {
        table.iter().find(|s| s.team == team).cloned().unwrap()
    }

    #[test]
    fn test_no_results_keeps_roster_order() {
        let teams = roster(&["C", "A", "D", "B"]);
        let table = rank(&[], &teams);

        let order: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "D", "B"]);
        assert!(table
            .iter()
            .all(|s| s.points == 0 && s.played == 0 && s.goal_diff == 0));
    }

    #[test]
    fn test_win_and_loss_points() {
        let table = rank(&[played("A", "B", Some(3), Some(1))], &roster(&["A", "B"]));

        assert_eq!(
            row(&table, "A"),
            Standing {
                team: "A".to_string(),
                points: 3,
                played: 1,
                goal_diff: 2
            }
        );
        assert_eq!(
            row(&table, "B"),
            Standing {
                team: "B".to_string(),
                points: 1,
                played: 1,
                goal_diff: -2
            }
        );
    }

    #[test]
    fn test_draw_points() {
        let table = rank(&[played("A", "B", Some(2), Some(2))], &roster(&["A", "B"]));

        for team in ["A", "B"] {
            let standing = row(&table, team);
            assert_eq!(standing.points, 2);
            assert_eq!(standing.goal_diff, 0);
            assert_eq!(standing.played, 1);
        }
    }

    #[test]
    fn test_half_entered_score_is_not_played() {
        let fixtures = [
            played("A", "B", Some(5), None),
            played("A", "C", None, Some(1)),
        ];
        let table = rank(&fixtures, &roster(&["A", "B", "C"]));

        assert!(table.iter().all(|s| s.played == 0 && s.points == 0));
    }

    #[test]
    fn test_afternoon_friendly_does_not_count() {
        let mut friendly = played("A", "B", Some(10), Some(0));
        friendly.phase = Phase::Afternoon;

        let table = rank(&[friendly], &roster(&["A", "B"]));
        assert!(table.iter().all(|s| s.played == 0));
    }

    #[test]
    fn test_unknown_team_is_skipped() {
        let fixtures = [
            played("A", "Intruder", Some(4), Some(0)),
            played("A", "B", Some(1), Some(0)),
        ];
        let table = rank(&fixtures, &roster(&["A", "B"]));

        assert_eq!(table.len(), 2);
        assert_eq!(row(&table, "A").played, 1);
        assert_eq!(row(&table, "A").goal_diff, 1);
    }

    #[test]
    fn test_sorted_by_points_then_goal_difference() {
        let fixtures = [
            played("A", "B", Some(1), Some(0)),
            played("C", "D", Some(6), Some(0)),
            played("A", "C", Some(2), Some(2)),
            played("B", "D", Some(3), Some(3)),
        ];
        let table = rank(&fixtures, &roster(&["A", "B", "C", "D"]));

        // A: 3+2=5 pts (+1), C: 3+2=5 pts (+6), B: 1+2=3 (-1), D: 1+2=3 (-6)
        let order: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_full_ties_keep_roster_order() {
        let fixtures = [
            played("B", "A", Some(1), Some(1)),
            played("D", "C", Some(0), Some(0)),
        ];
        let table = rank(&fixtures, &roster(&["D", "B", "A", "C"]));

        let order: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(order, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_custom_rule() {
        let rule = ScoringRule {
            win: 3,
            loss: 0,
            draw: 1,
        };
        let table = rank_with(
            &[played("A", "B", Some(0), Some(2))],
            &roster(&["A", "B"]),
            &rule,
        );

        assert_eq!(row(&table, "B").points, 3);
        assert_eq!(row(&table, "A").points, 0);
    }
}
