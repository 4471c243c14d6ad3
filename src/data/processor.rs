//! Data Processor Module
//! Converts loaded frames into typed records, once, at load time.

use crate::data::{DeliveryRecord, MatchRecord, NA_VALUES};
use polars::prelude::*;

/// Turns validated DataFrames into record vectors.
pub struct DataProcessor;

impl DataProcessor {
    /// Build match records from a frame holding `season`, `team1`, `team2`, `winner`.
    pub fn matches_from_frame(df: &DataFrame) -> PolarsResult<Vec<MatchRecord>> {
        let season = Self::text_column(df, "season")?;
        let team1 = Self::text_column(df, "team1")?;
        let team2 = Self::text_column(df, "team2")?;
        let winner = Self::text_column(df, "winner")?;

        let records = season
            .into_iter()
            .zip(team1)
            .zip(team2)
            .zip(winner)
            .map(|(((season, team1), team2), winner)| MatchRecord {
                season: season.unwrap_or_default(),
                team1: team1.unwrap_or_default(),
                team2: team2.unwrap_or_default(),
                winner,
            })
            .collect();

        Ok(records)
    }

    /// Build delivery records from a frame holding `batter`, `batsman_runs`,
    /// `player_dismissed`, `dismissal_kind`.
    pub fn deliveries_from_frame(df: &DataFrame) -> PolarsResult<Vec<DeliveryRecord>> {
        let batter = Self::text_column(df, "batter")?;
        let dismissed = Self::text_column(df, "player_dismissed")?;
        let kind = Self::text_column(df, "dismissal_kind")?;

        let runs_col = df.column("batsman_runs")?.cast(&DataType::Int64)?;
        let runs: Vec<i64> = runs_col
            .i64()?
            .into_iter()
            .map(|v| v.unwrap_or(0))
            .collect();

        let records = batter
            .into_iter()
            .zip(runs)
            .zip(dismissed)
            .zip(kind)
            .map(
                |(((batter, batsman_runs), player_dismissed), dismissal_kind)| DeliveryRecord {
                    batter: batter.unwrap_or_default(),
                    batsman_runs,
                    player_dismissed,
                    dismissal_kind,
                },
            )
            .collect();

        Ok(records)
    }

    /// Read a column as optional strings. Nulls, blank cells and NA markers
    /// become `None`.
    fn text_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let values = column
            .str()?
            .into_iter()
            .map(|v| {
                v.map(str::trim)
                    .filter(|s| !s.is_empty() && !NA_VALUES.contains(s))
                    .map(str::to_string)
            })
            .collect();
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_seasons_become_labels() {
        let df = df! {
            "season" => [2008i64, 2009],
            "team1" => ["A", "B"],
            "team2" => ["B", "C"],
            "winner" => [Some("A"), None],
        }
        .unwrap();

        let records = DataProcessor::matches_from_frame(&df).unwrap();
        assert_eq!(records[0], MatchRecord::new("2008", "A", "B", Some("A")));
        assert_eq!(records[1], MatchRecord::new("2009", "B", "C", None));
    }

    #[test]
    fn null_runs_count_as_zero() {
        let df = df! {
            "batter" => ["A", "B"],
            "batsman_runs" => [Some(4i64), None],
            "player_dismissed" => [None, Some("B")],
            "dismissal_kind" => [None, Some("bowled")],
        }
        .unwrap();

        let records = DataProcessor::deliveries_from_frame(&df).unwrap();
        assert_eq!(records[0], DeliveryRecord::new("A", 4));
        assert_eq!(records[1], DeliveryRecord::new("B", 0).with_dismissal("B", "bowled"));
    }

    #[test]
    fn na_markers_become_none() {
        let df = df! {
            "batter" => ["A", "NA", "B"],
            "batsman_runs" => [1i64, 2, 0],
            "player_dismissed" => ["NA", "N/A", "B"],
            "dismissal_kind" => ["NA", "null", "caught"],
        }
        .unwrap();

        let records = DataProcessor::deliveries_from_frame(&df).unwrap();
        assert_eq!(records[0], DeliveryRecord::new("A", 1));
        assert_eq!(records[1], DeliveryRecord::new("", 2));
        assert_eq!(records[2], DeliveryRecord::new("B", 0).with_dismissal("B", "caught"));
    }
}
