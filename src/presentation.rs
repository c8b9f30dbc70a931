// src/presentation.rs
use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use chord_kernel_domain::{PositionScore, UnlikelyWindow};
use chord_kernel_ports::observer::ScoreObserver;
use chord_kernel_shared_kernel::{Progression, Result, StyleKey};
use chord_kernel_usecase::ScoreReport;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Prints the verbose per-position lines while a progression is scored.
pub struct ConsoleObserver<'w, W> {
    out: &'w Mutex<W>,
}

impl<'w, W: Write + Send> ConsoleObserver<'w, W> {
    pub fn new(out: &'w Mutex<W>) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ScoreObserver for ConsoleObserver<'_, W> {
    fn on_start(&self, progression: &Progression) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "Analyzing progression: [{progression}]")?;
        Ok(())
    }

    fn on_position(&self, style: &StyleKey, score: &PositionScore) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(
            out,
            "{style} follows [{}] with [{}] {:.2}% of the time",
            score.context_label(),
            score.following,
            score.percentage()
        )?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    style: &'a StyleKey,
    inversions: bool,
    look_back: usize,
    progression: &'a Progression,
    threshold: f64,
    frequencies: Vec<f64>,
    positions: &'a [PositionScore],
    flagged: &'a [UnlikelyWindow],
}

pub fn emit<W: Write>(
    out: &mut W,
    report: &ScoreReport,
    flagged: &[UnlikelyWindow],
    format: OutputFormat,
    threshold: f64,
) -> Result<()> {
    match format {
        OutputFormat::Table => print_unlikely(out, &report.style, flagged),
        OutputFormat::Json => print_json(out, report, flagged, threshold),
    }
}

fn print_unlikely<W: Write>(out: &mut W, style: &StyleKey, flagged: &[UnlikelyWindow]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "The following are places in your progression which are particularly unlikely:")?;
    for window in flagged {
        writeln!(out, "  Consider looking at the progression: [{}]", window.window)?;
        writeln!(
            out,
            "    {style} doesn't follow [{}] with [{}] very often.",
            window.context, window.following
        )?;
    }
    Ok(())
}

fn print_json<W: Write>(
    out: &mut W,
    report: &ScoreReport,
    flagged: &[UnlikelyWindow],
    threshold: f64,
) -> Result<()> {
    let json = JsonReport {
        style: &report.style,
        inversions: report.mode.is_enabled(),
        look_back: report.look_back.get(),
        progression: &report.progression,
        threshold,
        frequencies: report.frequencies(),
        positions: &report.positions,
        flagged,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
