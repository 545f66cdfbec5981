use colored::*;
use primer_common::config::Config;
use primer_core::catalog::{Entry, Exercise};

use crate::terminal::print::{self, Rows};
use crate::terminal::colors;

fn usage(entry: &Entry) -> String {
    entry
        .params
        .iter()
        .enumerate()
        .map(|(idx, param)| {
            if idx < entry.required {
                format!("<{param}>")
            } else {
                format!("[{param}]")
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn list(cfg: &Config) {
    if cfg.quiet > 1 {
        for exercise in Exercise::ALL {
            print::line(exercise.name());
        }
        return;
    }

    let rows: Rows = Rows::new(Exercise::ALL.iter().map(|exercise| exercise.name()));
    for exercise in Exercise::ALL {
        let entry: Entry = exercise.entry();
        let value: String = format!(
            "{} {}",
            usage(&entry).color(colors::ACCENT),
            entry.summary.color(colors::TEXT_DEFAULT)
        );
        rows.row(entry.name, value);
    }

    print::rule();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
