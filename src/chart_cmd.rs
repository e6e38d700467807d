//! Chart command: print the four pillars as a table.

use anyhow::Result;
use tracing::{info, info_span};

use bazi_chart::Chart;
use bazi_profile::EnrichedChart;

use crate::cli::{parse_date, parse_hour, ChartArgs};

/// Run the chart command.
pub fn run(args: ChartArgs) -> Result<()> {
    let _cmd = info_span!("chart").entered();
    let date = parse_date(&args.date)?;
    let hour = parse_hour(args.hour)?;

    let chart = Chart::compute(date, hour);
    info!(%date, hour_known = hour.is_some(), "chart computed");

    print!("{}", render(&chart));
    Ok(())
}

/// Renders a chart as an aligned text table.
fn render(chart: &Chart) -> String {
    let enriched = EnrichedChart::from_chart(chart);
    let mut out = String::new();
    out.push_str("pillar  stem-branch  element  animal\n");
    for pillar in enriched.pillars() {
        out.push_str(&format!(
            "{:<7} {:<12} {:<8} {}\n",
            pillar.slot,
            pillar.pillar,
            pillar.stem_element,
            pillar.branch_animal,
        ));
    }
    out.push_str(&format!(
        "\nday master: {} ({})\nprimary element: {}\n",
        chart.day_master(),
        chart.day_master().chinese(),
        chart.primary_element(),
    ));
    out
}
