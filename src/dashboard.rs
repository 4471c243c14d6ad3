//! Per-request pipeline: load -> aggregate -> chart -> render.

use crate::charts::{ChartPlotter, ChartSpec, StaticChartRenderer};
use crate::config::DashboardConfig;
use crate::data::{Dataset, LoadError};
use crate::stats::{RankingTable, StatsCalculator, SummaryStats, DEFAULT_TOP_N};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Dashboard worker failed: {0}")]
    Worker(String),
}

/// State for one request: the configuration plus a freshly loaded dataset.
/// Dropped once the page has been rendered.
pub struct RequestContext<'a> {
    pub config: &'a DashboardConfig,
    pub dataset: Dataset,
}

impl<'a> RequestContext<'a> {
    pub fn load(config: &'a DashboardConfig) -> Result<Self, LoadError> {
        let dataset = config.loader().load()?;
        Ok(Self { config, dataset })
    }

    pub fn with_dataset(config: &'a DashboardConfig, dataset: Dataset) -> Self {
        Self { config, dataset }
    }
}

/// Aggregator output for the default page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    pub stats: SummaryStats,
    pub top_runs: RankingTable,
    pub top_wickets: RankingTable,
    pub team_wins: RankingTable,
}

impl DashboardReport {
    pub fn compute(dataset: &Dataset) -> Self {
        Self {
            stats: StatsCalculator::summary_stats(&dataset.matches, &dataset.deliveries),
            top_runs: StatsCalculator::top_scorers(&dataset.deliveries, DEFAULT_TOP_N),
            top_wickets: StatsCalculator::top_wicket_takers(&dataset.deliveries, DEFAULT_TOP_N),
            team_wins: StatsCalculator::team_wins_by_season(&dataset.matches, None),
        }
    }
}

/// A chart ready for the page. `svg` is `None` when drawing failed.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub spec: ChartSpec,
    pub svg: Option<String>,
}

impl RenderedChart {
    pub fn render(spec: ChartSpec) -> Self {
        match StaticChartRenderer::render_svg(&spec) {
            Ok(svg) => Self {
                spec,
                svg: Some(svg),
            },
            Err(e) => {
                warn!(chart = %spec.id, error = %e, "chart rendering failed, using placeholder");
                Self { spec, svg: None }
            }
        }
    }
}

/// Everything the page template needs.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub report: DashboardReport,
    pub runs_graph: RenderedChart,
    pub wk_graph: RenderedChart,
    pub wins_season_graph: RenderedChart,
}

impl Dashboard {
    /// Aggregate the context's dataset and render the three charts in parallel.
    pub fn build(ctx: &RequestContext<'_>) -> Self {
        let report = DashboardReport::compute(&ctx.dataset);

        let runs_spec = ChartPlotter::bar_top_scorers(&report.top_runs);
        let wk_spec = ChartPlotter::bar_top_wickets(&report.top_wickets);
        let season_spec = ChartPlotter::line_team_wins_over_seasons(&ctx.dataset.matches);

        let (runs_graph, (wk_graph, wins_season_graph)) = rayon::join(
            || RenderedChart::render(runs_spec),
            || {
                rayon::join(
                    || RenderedChart::render(wk_spec),
                    || RenderedChart::render(season_spec),
                )
            },
        );

        Self {
            report,
            runs_graph,
            wk_graph,
            wins_season_graph,
        }
    }

    /// Load, aggregate and render the full HTML page.
    pub fn render_page(config: &DashboardConfig) -> Result<String, DashboardError> {
        let ctx = RequestContext::load(config)?;
        let dashboard = Self::build(&ctx);
        Ok(crate::web::page::render(&dashboard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DeliveryRecord, MatchRecord};

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                MatchRecord::new("2008", "A", "B", Some("A")),
                MatchRecord::new("2009", "B", "C", Some("B")),
                MatchRecord::new("2009", "A", "C", None),
            ],
            vec![
                DeliveryRecord::new("Kohli", 4),
                DeliveryRecord::new("Dhoni", 6).with_dismissal("Dhoni", "caught"),
                DeliveryRecord::new("Kohli", 0).with_dismissal("Kohli", "run out"),
            ],
        )
    }

    #[test]
    fn report_uses_unfiltered_team_wins() {
        let report = DashboardReport::compute(&dataset());
        assert_eq!(report.stats.total_matches, 3);
        assert_eq!(report.team_wins.pairs(), vec![("A", 1), ("B", 1)]);
        assert_eq!(report.top_wickets.pairs(), vec![("Dhoni", 1)]);
        assert_eq!(report.top_runs.pairs(), vec![("Dhoni", 6), ("Kohli", 4)]);
    }

    #[test]
    fn build_keeps_chart_order() {
        let config = DashboardConfig::default();
        let ctx = RequestContext::with_dataset(&config, dataset());
        let dashboard = Dashboard::build(&ctx);

        assert_eq!(dashboard.runs_graph.spec.id, "runs_graph");
        assert_eq!(dashboard.wk_graph.spec.id, "wk_graph");
        assert_eq!(dashboard.wins_season_graph.spec.id, "wins_season_graph");
        assert_eq!(dashboard.wins_season_graph.spec.categories, vec!["2008", "2009"]);
    }

    #[test]
    fn empty_dataset_still_builds() {
        let config = DashboardConfig::default();
        let ctx = RequestContext::with_dataset(&config, Dataset::default());
        let dashboard = Dashboard::build(&ctx);

        assert!(dashboard.report.top_runs.is_empty());
        assert!(dashboard.wins_season_graph.spec.is_empty());
    }

    #[test]
    fn missing_data_fails_the_whole_page() {
        let config = DashboardConfig {
            matches_path: "does/not/exist.csv".into(),
            ..DashboardConfig::default()
        };
        let err = Dashboard::render_page(&config).unwrap_err();
        assert!(matches!(err, DashboardError::Load(LoadError::Missing { .. })));
    }
}
