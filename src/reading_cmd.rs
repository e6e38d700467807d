//! Reading command: emit the full structured reading as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use bazi_profile::{
    element_profile, pillar_interactions, ElementInteraction, ElementProfile, EnrichedChart,
};

use crate::cli::{parse_date, parse_hour, ReadingArgs};
use crate::config;

/// The full reading document, the payload a downstream generation or
/// persistence layer consumes.
#[derive(Debug, Serialize)]
struct ReadingDocument {
    /// The civil birth date, ISO formatted.
    birth_date: String,
    /// The birth hour, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_hour: Option<u8>,
    /// The enriched four-pillar chart.
    chart: EnrichedChart,
    /// Day-master element profile (omitted when disabled in config).
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<ElementProfile>,
    /// Pairwise pillar interactions (omitted when disabled in config).
    #[serde(skip_serializing_if = "Option::is_none")]
    interactions: Option<Vec<ElementInteraction>>,
}

/// Run the reading command.
pub fn run(args: ReadingArgs) -> Result<()> {
    let _cmd = info_span!("reading").entered();
    let config = config::load(args.config.as_deref())?;
    let date = parse_date(&args.date)?;
    let hour = parse_hour(args.hour)?;

    let chart = EnrichedChart::compute(date, hour);
    let profile = config
        .reading
        .include_profile
        .then(|| element_profile(&chart.day));
    let interactions = config
        .reading
        .include_interactions
        .then(|| pillar_interactions(&chart));
    info!(
        %date,
        hour_known = hour.is_some(),
        n_interactions = interactions.as_ref().map_or(0, Vec::len),
        "reading computed"
    );

    let document = ReadingDocument {
        birth_date: date.to_string(),
        birth_hour: hour.map(|h| h.get()),
        chart,
        profile,
        interactions,
    };

    let json = if config.reading.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match args.output {
        Some(path) => std::fs::write(&path, json.as_bytes())
            .with_context(|| format!("failed to write reading: {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
