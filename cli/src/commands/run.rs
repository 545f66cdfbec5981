use anyhow::Context;
use colored::*;
use primer_common::config::Config;
use primer_common::{success, warn};
use primer_core::catalog::{self, CatalogError, Entry, Exercise};

use crate::terminal::colors;
use crate::terminal::print::{self, Rows};

pub fn run(exercise: Exercise, args: &[String], cfg: &Config) -> anyhow::Result<()> {
    match catalog::evaluate(exercise, args) {
        Ok(value) => {
            result_found(exercise, args, &value, cfg);
            Ok(())
        }
        Err(CatalogError::Invalid(err)) => {
            input_rejected(exercise, &err.to_string(), cfg);
            Ok(())
        }
        Err(err) => Err(err).with_context(|| format!("could not run {exercise}")),
    }
}

fn result_found(exercise: Exercise, args: &[String], value: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        value.lines().for_each(print::line);
        return;
    }

    let entry: Entry = exercise.entry();
    let rows: Rows = Rows::new(entry.params.iter().copied().chain(["result"]));
    for (param, arg) in entry.params.iter().zip(args) {
        rows.row(param, arg);
    }
    rows.block("result", value, colors::VALUE);
    success!("{exercise} finished");
}

fn input_rejected(exercise: Exercise, reason: &str, cfg: &Config) {
    if !cfg.legacy {
        warn!("{reason}");
        return;
    }

    match exercise.entry().sentinel {
        Some(sentinel) if cfg.quiet > 0 => print::line(sentinel),
        Some(sentinel) => Rows::new(["result"]).row("result", sentinel.color(colors::SENTINEL)),
        None => warn!("{reason}"),
    }
}
