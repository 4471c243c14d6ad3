//! HTML page rendering.

use crate::dashboard::{Dashboard, RenderedChart};
use crate::stats::{RankingTable, SummaryStats};
use std::fmt::Write;

const TABLE_CLASSES: &str = "table table-striped";

/// Render the whole dashboard as one HTML document.
pub fn render(dashboard: &Dashboard) -> String {
    let report = &dashboard.report;
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<title>Cricket Dashboard</title>\
<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\
<style>.chart svg{{max-width:100%;height:auto}}</style>\
</head><body><div class=\"container my-4\">\
<h1>Cricket Match Analytics</h1>\
<h2>Summary</h2>{stats}\
<h2>Top Run Scorers</h2>{runs_graph}{runs_table}\
<h2>Top Wicket Takers</h2>{wk_graph}{wk_table}\
<h2>Team Wins</h2>{wins_graph}{wins_table}\
</div></body></html>",
        stats = summary_list(&report.stats),
        runs_graph = chart_div(&dashboard.runs_graph),
        runs_table = ranking_table(&report.top_runs),
        wk_graph = chart_div(&dashboard.wk_graph),
        wk_table = ranking_table(&report.top_wickets),
        wins_graph = chart_div(&dashboard.wins_season_graph),
        wins_table = ranking_table(&report.team_wins),
    )
}

fn summary_list(stats: &SummaryStats) -> String {
    let mut out = String::from("<ul class=\"summary\">");
    for (name, value) in stats.entries() {
        let _ = write!(
            out,
            "<li><strong>{}</strong>: <span id=\"{name}\">{value}</span></li>",
            metric_title(name)
        );
    }
    out.push_str("</ul>");
    out
}

/// `total_players_estimated` -> `Total players estimated`
fn metric_title(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn chart_div(chart: &RenderedChart) -> String {
    match &chart.svg {
        Some(svg) => format!(
            "<div class=\"chart\" id=\"{}\">{}</div>",
            escape_html(&chart.spec.id),
            strip_xml_declaration(svg)
        ),
        None => format!(
            "<div class=\"chart chart-unavailable\" id=\"{}\"><p>{} chart unavailable</p></div>",
            escape_html(&chart.spec.id),
            escape_html(&chart.spec.title)
        ),
    }
}

/// Ranking as an HTML table: header row of column labels, one row per entry,
/// no index column. An empty ranking renders an empty body.
pub fn ranking_table(table: &RankingTable) -> String {
    let mut out = format!(
        "<table border=\"1\" class=\"dataframe {TABLE_CLASSES}\">\
<thead><tr style=\"text-align: right;\"><th>{}</th><th>{}</th></tr></thead><tbody>",
        escape_html(&table.entity_label),
        escape_html(&table.metric_label)
    );
    for entry in &table.entries {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.name),
            entry.value
        );
    }
    out.push_str("</tbody></table>");
    out
}

fn strip_xml_declaration(svg: &str) -> &str {
    match svg.find("<svg") {
        Some(start) => &svg[start..],
        None => svg,
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartPlotter;
    use crate::dashboard::DashboardReport;
    use crate::data::{Dataset, DeliveryRecord, MatchRecord};
    use crate::stats::StatsCalculator;

    #[test]
    fn table_matches_dataframe_layout() {
        let deliveries = vec![DeliveryRecord::new("A", 4), DeliveryRecord::new("B", 6)];
        let html = ranking_table(&StatsCalculator::top_scorers(&deliveries, 10));

        assert!(html.starts_with("<table border=\"1\" class=\"dataframe table table-striped\">"));
        assert!(html.contains("<th>batter</th><th>runs</th>"));
        assert!(html.contains("<tr><td>B</td><td>6</td></tr><tr><td>A</td><td>4</td></tr>"));
    }

    #[test]
    fn empty_table_has_empty_body() {
        let html = ranking_table(&StatsCalculator::team_wins_by_season(&[], Some("2020")));
        assert!(html.contains("<th>team</th><th>wins</th>"));
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn names_are_escaped() {
        assert_eq!(escape_html("<b>\"R&D\"</b>"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
        let html = ranking_table(&StatsCalculator::top_scorers(
            &[DeliveryRecord::new("O'Brien <script>", 1)],
            10,
        ));
        assert!(html.contains("O&#39;Brien &lt;script&gt;"));
    }

    #[test]
    fn metric_titles_are_readable() {
        assert_eq!(metric_title("total_matches"), "Total matches");
        assert_eq!(metric_title(""), "");
    }

    #[test]
    fn svg_prolog_is_dropped() {
        assert_eq!(
            strip_xml_declaration("<?xml version=\"1.0\"?>\n<svg></svg>"),
            "<svg></svg>"
        );
    }

    #[test]
    fn page_contains_all_sections() {
        let dataset = Dataset::new(
            vec![MatchRecord::new("2020", "X", "Y", Some("X"))],
            vec![DeliveryRecord::new("A", 4).with_dismissal("A", "bowled")],
        );
        let report = DashboardReport::compute(&dataset);
        let unavailable = |spec| RenderedChart { spec, svg: None };
        let dashboard = Dashboard {
            runs_graph: unavailable(ChartPlotter::bar_top_scorers(&report.top_runs)),
            wk_graph: unavailable(ChartPlotter::bar_top_wickets(&report.top_wickets)),
            wins_season_graph: unavailable(ChartPlotter::line_team_wins_over_seasons(
                &dataset.matches,
            )),
            report,
        };

        let html = render(&dashboard);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<span id=\"total_matches\">1</span>"));
        assert!(html.contains("id=\"runs_graph\""));
        assert!(html.contains("id=\"wk_graph\""));
        assert!(html.contains("id=\"wins_season_graph\""));
        assert!(html.contains("Top Run Scorers chart unavailable"));
        assert_eq!(html.matches("<table").count(), 3);
        assert!(html.contains("<tr><td>X</td><td>1</td></tr>"));
    }
}
