//! Ranking tables and the season x team wins matrix.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One (entity, metric) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    pub value: u64,
}

/// Entities ordered by a metric, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingTable {
    /// Column label for the entity, e.g. `batter`.
    pub entity_label: String,
    /// Column label for the metric, e.g. `runs`.
    pub metric_label: String,
    pub entries: Vec<RankingEntry>,
}

impl RankingTable {
    /// Rank groups by value, descending.
    ///
    /// `groups` must be in first-appearance order; the sort is stable so
    /// that order survives among equal values.
    pub fn from_groups(
        entity_label: &str,
        metric_label: &str,
        mut groups: Vec<(String, u64)>,
        top_n: Option<usize>,
    ) -> Self {
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = top_n {
            groups.truncate(n);
        }

        Self {
            entity_label: entity_label.to_string(),
            metric_label: metric_label.to_string(),
            entries: groups
                .into_iter()
                .map(|(name, value)| RankingEntry { name, value })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    #[cfg(test)]
    pub(crate) fn pairs(&self) -> Vec<(&str, u64)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.value))
            .collect()
    }
}

/// Accumulates per-key totals while remembering the order keys were first seen.
#[derive(Debug, Default)]
pub(crate) struct GroupCounter {
    index: HashMap<String, usize>,
    totals: Vec<(String, u64)>,
}

impl GroupCounter {
    pub(crate) fn add(&mut self, key: &str, amount: u64) {
        match self.index.get(key) {
            Some(&i) => self.totals[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.totals.len());
                self.totals.push((key.to_string(), amount));
            }
        }
    }

    pub(crate) fn into_groups(self) -> Vec<(String, u64)> {
        self.totals
    }
}

/// Wins per (season, team), with every missing combination filled to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SeasonWinsMatrix {
    /// Season labels, ascending.
    pub seasons: Vec<String>,
    /// Team names, alphabetical.
    pub teams: Vec<String>,
    /// `counts[season][team]`.
    pub counts: Vec<Vec<u64>>,
}

impl SeasonWinsMatrix {
    /// Pivot `(season, winner)` pairs into the matrix.
    pub fn from_wins<'a>(wins: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut cells: BTreeMap<(&str, &str), u64> = BTreeMap::new();
        let mut seasons = BTreeSet::new();
        let mut teams = BTreeSet::new();

        for (season, team) in wins {
            *cells.entry((season, team)).or_insert(0) += 1;
            seasons.insert(season);
            teams.insert(team);
        }

        let counts = seasons
            .iter()
            .map(|s| {
                teams
                    .iter()
                    .map(|t| cells.get(&(*s, *t)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Self {
            seasons: seasons.into_iter().map(str::to_string).collect(),
            teams: teams.into_iter().map(str::to_string).collect(),
            counts,
        }
    }

    /// Total wins of each team across all seasons, in `teams` order.
    pub fn team_totals(&self) -> Vec<u64> {
        (0..self.teams.len())
            .map(|t| self.counts.iter().map(|row| row[t]).sum())
            .collect()
    }

    /// The `n` teams with the most wins overall.
    /// Equal totals fall back to alphabetical order.
    pub fn top_teams(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, u64)> =
            self.teams.iter().zip(self.team_totals()).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(n)
            .map(|(team, _)| team.clone())
            .collect()
    }

    /// Wins per season for one team, ordered by season.
    pub fn column(&self, team: &str) -> Vec<u64> {
        match self.teams.iter().position(|t| t == team) {
            Some(t) => self.counts.iter().map(|row| row[t]).collect(),
            None => vec![0; self.seasons.len()],
        }
    }
}
