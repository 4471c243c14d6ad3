//! Typed match and delivery records.

use serde::Serialize;

/// One row of the match table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub season: String,
    pub team1: String,
    pub team2: String,
    /// `None` for no-result matches.
    pub winner: Option<String>,
}

impl MatchRecord {
    pub fn new(season: &str, team1: &str, team2: &str, winner: Option<&str>) -> Self {
        Self {
            season: season.to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            winner: winner.map(str::to_string),
        }
    }
}

/// One ball bowled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRecord {
    pub batter: String,
    pub batsman_runs: i64,
    pub player_dismissed: Option<String>,
    pub dismissal_kind: Option<String>,
}

impl DeliveryRecord {
    pub fn new(batter: &str, batsman_runs: i64) -> Self {
        Self {
            batter: batter.to_string(),
            batsman_runs,
            player_dismissed: None,
            dismissal_kind: None,
        }
    }

    /// Mark this ball as a dismissal of `player`.
    pub fn with_dismissal(mut self, player: &str, kind: &str) -> Self {
        self.player_dismissed = Some(player.to_string());
        self.dismissal_kind = Some(kind.to_string());
        self
    }
}

/// Both tables as loaded for a single request.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matches: Vec<MatchRecord>,
    pub deliveries: Vec<DeliveryRecord>,
}

impl Dataset {
    pub fn new(matches: Vec<MatchRecord>, deliveries: Vec<DeliveryRecord>) -> Self {
        Self {
            matches,
            deliveries,
        }
    }
}
