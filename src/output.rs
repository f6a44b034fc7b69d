//! Rendering of an [`AggregateReport`] as text, JSON or CSV.

use crate::logic::AggregateReport;
use clap::ValueEnum;
use std::io::Write;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary.
    #[default]
    Text,
    /// Whole report as pretty JSON.
    Json,
    /// One row per round.
    Csv,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

pub fn write_report<W: Write>(
    report: &AggregateReport,
    format: OutputFormat,
    out: W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => write_text(report, out),
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Csv => write_csv(report, out),
    }
}

pub fn write_text<W: Write>(report: &AggregateReport, mut out: W) -> Result<(), OutputError> {
    let c = &report.config;
    writeln!(
        out,
        "players={}, rounds={}, qualify={}, simulations={}",
        c.players, c.rounds, c.qualify, report.simulations
    )?;
    for r in &report.per_round {
        writeln!(
            out,
            "Qualification rate for one-loss finishers who lost in round {}: {:.2}%",
            r.round,
            r.rate * 100.0
        )?;
    }
    writeln!(
        out,
        "Average players finishing {}-0: {:.2}",
        c.rounds, report.avg_unbeaten
    )?;
    writeln!(
        out,
        "Average players finishing {}-1: {:.2}",
        c.rounds.saturating_sub(1),
        report.avg_one_loss
    )?;
    Ok(())
}

pub fn write_json<W: Write>(report: &AggregateReport, mut out: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(report: &AggregateReport, out: W) -> Result<(), OutputError> {
    let mut wtr = csv::Writer::from_writer(out);
    for r in &report.per_round {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{AggregateTotals, TournamentStats};
    use crate::models::TournamentConfig;

    fn report() -> AggregateReport {
        let mut totals = AggregateTotals::new(2);
        let mut stats = TournamentStats::default();
        stats.per_round.insert(1, crate::logic::RoundTally { total: 4, qualified: 1 });
        stats.per_round.insert(2, crate::logic::RoundTally { total: 0, qualified: 0 });
        stats.unbeaten = 1;
        stats.one_loss = 4;
        totals.add(&stats);
        AggregateReport::from_totals(TournamentConfig::new(8, 2, 4), 42, &totals)
    }

    #[test]
    fn text_has_one_line_per_round_plus_averages() {
        let mut buf = Vec::new();
        write_text(&report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("lost in round 1: 25.00%"));
        assert!(text.contains("lost in round 2: 0.00%"));
        assert!(text.contains("finishing 2-0: 1.00"));
        assert!(text.contains("finishing 1-1: 4.00"));
    }

    #[test]
    fn text_handles_report_without_rounds() {
        let totals = AggregateTotals::new(0);
        let report = AggregateReport::from_totals(TournamentConfig::new(4, 0, 2), 1, &totals);
        let mut buf = Vec::new();
        write_text(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("finishing 0-0: 0.00"));
        assert!(!text.contains("lost in round"));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "round,total,qualified,rate");
        assert_eq!(lines[1], "1,4,1,0.25");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn json_carries_config_and_seed() {
        let mut buf = Vec::new();
        write_json(&report(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["players"], 8);
        assert_eq!(value["seed"], 42);
        assert_eq!(value["per_round"][0]["qualified"], 1);
    }
}
