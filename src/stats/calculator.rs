//! Statistics Calculator Module
//! Summary counts and top-N rankings over the match and delivery tables.

use crate::data::{DeliveryRecord, MatchRecord};
use crate::stats::ranking::GroupCounter;
use crate::stats::{RankingTable, SeasonWinsMatrix};
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Number of rows kept by the top-N rankings when no size is requested.
pub const DEFAULT_TOP_N: usize = 10;

/// Dismissal kind that is never credited to a bowler.
pub const RUN_OUT: &str = "run out";

/// Headline counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_matches: usize,
    pub total_seasons: usize,
    pub total_teams: usize,
    /// Distinct batters; players who never faced a ball are not counted.
    pub total_players_estimated: usize,
}

impl SummaryStats {
    /// Metric name / value pairs in display order.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("total_matches", self.total_matches),
            ("total_seasons", self.total_seasons),
            ("total_teams", self.total_teams),
            ("total_players_estimated", self.total_players_estimated),
        ]
    }
}

/// Pure aggregations; inputs are only ever borrowed.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn summary_stats(matches: &[MatchRecord], deliveries: &[DeliveryRecord]) -> SummaryStats {
        let seasons: HashSet<&str> = matches
            .iter()
            .filter_map(|m| Self::key(&m.season))
            .collect();
        let teams: HashSet<&str> = matches
            .iter()
            .flat_map(|m| [Self::key(&m.team1), Self::key(&m.team2)])
            .flatten()
            .collect();
        let batters: HashSet<&str> = deliveries
            .iter()
            .filter_map(|d| Self::key(&d.batter))
            .collect();

        SummaryStats {
            total_matches: matches.len(),
            total_seasons: seasons.len(),
            total_teams: teams.len(),
            total_players_estimated: batters.len(),
        }
    }

    /// Runs off the bat summed per batter. Negative run values are clamped
    /// to zero.
    pub fn top_scorers(deliveries: &[DeliveryRecord], top_n: usize) -> RankingTable {
        let mut runs = GroupCounter::default();
        let mut negative = 0usize;
        for d in deliveries {
            let Some(batter) = Self::key(&d.batter) else {
                continue;
            };
            if d.batsman_runs < 0 {
                negative += 1;
            }
            runs.add(batter, d.batsman_runs.max(0) as u64);
        }
        if negative > 0 {
            warn!(rows = negative, "negative batsman_runs clamped to zero");
        }
        RankingTable::from_groups("batter", "runs", runs.into_groups(), Some(top_n))
    }

    /// Dismissals (other than run outs) counted per dismissed player.
    pub fn top_wicket_takers(deliveries: &[DeliveryRecord], top_n: usize) -> RankingTable {
        let mut wickets = GroupCounter::default();
        for d in deliveries.iter().filter(|d| Self::is_bowler_wicket(d)) {
            if let Some(player) = d.player_dismissed.as_deref().and_then(Self::key) {
                wickets.add(player, 1);
            }
        }
        RankingTable::from_groups("player", "wickets", wickets.into_groups(), Some(top_n))
    }

    /// Wins per team, optionally restricted to one season. No-result matches
    /// are skipped.
    pub fn team_wins_by_season(matches: &[MatchRecord], season: Option<&str>) -> RankingTable {
        let mut wins = GroupCounter::default();
        for m in matches {
            if season.is_some_and(|s| m.season != s) {
                continue;
            }
            if let Some(winner) = m.winner.as_deref().and_then(Self::key) {
                wins.add(winner, 1);
            }
        }
        RankingTable::from_groups("team", "wins", wins.into_groups(), None)
    }

    /// Wins of every team in every season.
    pub fn season_wins_matrix(matches: &[MatchRecord]) -> SeasonWinsMatrix {
        SeasonWinsMatrix::from_wins(matches.iter().filter_map(|m| {
            let season = Self::key(&m.season)?;
            let winner = m.winner.as_deref().and_then(Self::key)?;
            Some((season, winner))
        }))
    }

    /// Grouping key, or `None` for an empty (missing) value.
    fn key(value: &str) -> Option<&str> {
        (!value.is_empty()).then_some(value)
    }

    fn is_bowler_wicket(d: &DeliveryRecord) -> bool {
        d.player_dismissed.is_some() && d.dismissal_kind.as_deref() != Some(RUN_OUT)
    }
}
