use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use bazi_calendar::{BirthHour, CivilDate};

/// Four Pillars (BaZi) sexagenary chart calculator.
#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars (BaZi) chart calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the four pillars for a birth date.
    Chart(ChartArgs),
    /// Emit a full JSON reading (enriched chart, profile, interactions).
    Reading(ReadingArgs),
}

/// Arguments for the `chart` subcommand.
#[derive(clap::Args)]
pub struct ChartArgs {
    /// Birth date as YYYY-MM-DD (civil date, already timezone-normalized).
    #[arg(short, long)]
    pub date: String,

    /// Birth hour on the 24-hour clock (omit if unknown).
    #[arg(long)]
    pub hour: Option<u8>,
}

/// Arguments for the `reading` subcommand.
#[derive(clap::Args)]
pub struct ReadingArgs {
    /// Birth date as YYYY-MM-DD (civil date, already timezone-normalized).
    #[arg(short, long)]
    pub date: String,

    /// Birth hour on the 24-hour clock (omit if unknown).
    #[arg(long)]
    pub hour: Option<u8>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the JSON document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parses a `YYYY-MM-DD` string into a validated civil date.
pub fn parse_date(input: &str) -> Result<CivilDate> {
    let mut parts = input.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("invalid date {input:?}: expected YYYY-MM-DD");
    };
    let year: i32 = y
        .parse()
        .with_context(|| format!("invalid year in {input:?}"))?;
    let month: u8 = m
        .parse()
        .with_context(|| format!("invalid month in {input:?}"))?;
    let day: u8 = d
        .parse()
        .with_context(|| format!("invalid day in {input:?}"))?;
    CivilDate::new(year, month, day).with_context(|| format!("invalid date {input:?}"))
}

/// Validates an optional hour flag into a `BirthHour`.
pub fn parse_hour(hour: Option<u8>) -> Result<Option<BirthHour>> {
    hour.map(|h| BirthHour::new(h).context("invalid --hour"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_valid() {
        let date = parse_date("2000-03-15").unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2000").is_err());
        assert!(parse_date("2000-3").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2001-02-29").is_err());
    }

    #[test]
    fn parse_hour_range() {
        assert!(parse_hour(None).unwrap().is_none());
        assert_eq!(parse_hour(Some(14)).unwrap().unwrap().get(), 14);
        assert!(parse_hour(Some(24)).is_err());
    }
}
