//! Stats module - summary counts, rankings and the season-wins matrix

mod calculator;
mod ranking;

pub use calculator::{StatsCalculator, SummaryStats, DEFAULT_TOP_N, RUN_OUT};
pub use ranking::{RankingEntry, RankingTable, SeasonWinsMatrix};
