//! League table derived from recorded game results.
//!
//! A team wins a game by scoring strictly more goals than its opponent.
//! Teams without any games still appear with all counters at zero. Goals
//! are tallied for display only; they never affect the order.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::types::DbId;

/// A team as listed in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub id: DbId,
    pub name: String,
    pub group: Option<String>,
}

/// The final score of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub home_goals: i32,
    pub away_goals: i32,
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub team_id: DbId,
    pub name: String,
    pub group: Option<String>,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
}

impl Standing {
    fn new(team: &TeamEntry) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            group: team.group.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    fn record(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += i64::from(scored);
        self.goals_against += i64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }
}

/// Build the league table, ordered by wins (desc), then team name, then
/// team id.
///
/// Results referring to teams not in `teams` are ignored.
pub fn compute_standings(teams: &[TeamEntry], results: &[GameResult]) -> Vec<Standing> {
    let mut table: HashMap<DbId, Standing> = teams
        .iter()
        .map(|team| (team.id, Standing::new(team)))
        .collect();

    for result in results {
        if let Some(home) = table.get_mut(&result.home_team_id) {
            home.record(result.home_goals, result.away_goals);
        }
        if let Some(away) = table.get_mut(&result.away_team_id) {
            away.record(result.away_goals, result.home_goals);
        }
    }

    let mut standings: Vec<Standing> = table.into_values().collect();
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    standings
}

/// The part of the table belonging to one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTable {
    /// `None` collects teams that were not assigned to a group.
    pub group: Option<String>,
    pub standings: Vec<Standing>,
}

/// Split an ordered table into per-group tables.
///
/// Groups come out sorted by name, with ungrouped teams last. The order
/// inside each group is the order of `standings`.
pub fn split_by_group(standings: Vec<Standing>) -> Vec<GroupTable> {
    let mut named: BTreeMap<String, Vec<Standing>> = BTreeMap::new();
    let mut ungrouped = Vec::new();
    for standing in standings {
        match &standing.group {
            Some(group) => named.entry(group.clone()).or_default().push(standing),
            None => ungrouped.push(standing),
        }
    }

    let mut tables: Vec<GroupTable> = named
        .into_iter()
        .map(|(group, standings)| GroupTable {
            group: Some(group),
            standings,
        })
        .collect();
    if !ungrouped.is_empty() || tables.is_empty() {
        tables.push(GroupTable {
            group: None,
            standings: ungrouped,
        });
    }
    tables
}
