//! Chart Plotter Module
//! Builds renderer-independent chart descriptions from aggregator output.

use crate::data::MatchRecord;
use crate::stats::{RankingTable, StatsCalculator};
use serde::Serialize;

/// How many teams the season line chart follows.
pub const TOP_TEAMS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// A named series of values aligned with the chart's categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<u64>,
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    /// Stable identifier, used as the HTML element id.
    pub id: String,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub kind: ChartKind,
    /// X-axis labels, in display order.
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }

    /// Largest value over all series, 0 for an empty chart.
    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Builds the dashboard's chart descriptions.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar chart of a top scorers ranking.
    pub fn bar_top_scorers(table: &RankingTable) -> ChartSpec {
        Self::ranking_bar("runs_graph", "Top Run Scorers", "Runs", table)
    }

    /// Bar chart of a top wicket takers ranking.
    pub fn bar_top_wickets(table: &RankingTable) -> ChartSpec {
        Self::ranking_bar("wk_graph", "Top Wicket Takers", "Wickets", table)
    }

    /// One line per team for the teams with the most wins overall,
    /// x = season, y = wins in that season.
    pub fn line_team_wins_over_seasons(matches: &[MatchRecord]) -> ChartSpec {
        let matrix = StatsCalculator::season_wins_matrix(matches);

        let series = matrix
            .top_teams(TOP_TEAMS)
            .into_iter()
            .map(|team| ChartSeries {
                values: matrix.column(&team),
                name: team,
            })
            .collect();

        ChartSpec {
            id: "wins_season_graph".to_string(),
            title: "Wins by Season (Top 6 Teams)".to_string(),
            x_title: "Season".to_string(),
            y_title: "Wins".to_string(),
            kind: ChartKind::Line,
            categories: matrix.seasons,
            series,
        }
    }

    fn ranking_bar(id: &str, title: &str, y_title: &str, table: &RankingTable) -> ChartSpec {
        ChartSpec {
            id: id.to_string(),
            title: title.to_string(),
            x_title: "Player".to_string(),
            y_title: y_title.to_string(),
            kind: ChartKind::Bar,
            categories: table.names(),
            series: vec![ChartSeries {
                name: table.metric_label.clone(),
                values: table.values(),
            }],
        }
    }
}
