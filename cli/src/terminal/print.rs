//! Undecorated terminal output.
//!
//! Every line is emitted on the [`PRINT_TARGET`] tracing target, which the formatter in
//! `logging` writes out verbatim while log events keep their status symbols.

use std::fmt::Display;

use colored::*;
use primer_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const LINE_WIDTH: usize = 64;

/// Target of undecorated terminal lines. Always enabled by the log filter.
pub const PRINT_TARGET: &str = "primer::print";

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Fill for the left and right of `title` so the whole spans [`LINE_WIDTH`] columns.
fn flanks(title: &str, fill: &str) -> (String, String) {
    let free: usize = LINE_WIDTH.saturating_sub(title.width());
    let left: usize = free / 2;
    (fill.repeat(left), fill.repeat(free - left))
}

fn titled_rule(title: &str, fill: &str, title_color: Color) -> String {
    let (left, right) = flanks(title, fill);
    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.color(title_color).bold(),
        right.color(colors::SEPARATOR)
    )
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ PRIMER v{} ⟧", env!("CARGO_PKG_VERSION"));
    line(&titled_rule(&title, "═", Color::BrightGreen));
    banner::print();
}

/// `──────⟦ NAME ⟧──────`, hidden when quiet.
pub fn section(name: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }
    let title: String = format!("⟦ {} ⟧", name.to_uppercase());
    line(&titled_rule(&title, "─", colors::PRIMARY));
}

/// Full width double rule.
pub fn rule() {
    line(&"═".repeat(LINE_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `> msg`
pub fn status(msg: impl Display) {
    line(&format!("{} {msg}", ">".color(colors::SEPARATOR)));
}

/// Centers text that may already carry color codes.
pub fn centered(msg: &str) {
    let indent: usize = LINE_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    line(&format!("{}{msg}", " ".repeat(indent)));
}

/// Status lines of the form `key.....: value` whose colons line up.
pub struct Rows {
    key_width: usize,
}

impl Rows {
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let key_width: usize = keys.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Self { key_width }
    }

    fn leader(&self, key: &str) -> String {
        let dots: String = ".".repeat((self.key_width + 1).saturating_sub(key.width()));
        format!("{}{}", key.color(colors::PRIMARY), format!("{dots}:").color(colors::SEPARATOR))
    }

    pub fn row(&self, key: &str, value: impl Display) {
        status(format!("{} {value}", self.leader(key)));
    }

    /// A highlighted value spanning several lines; the ones after the first are indented
    /// under it.
    pub fn block(&self, key: &str, value: &str, color: Color) {
        let indent: String = " ".repeat(self.key_width + 2);
        for (idx, text) in value.lines().enumerate() {
            let text: ColoredString = text.color(color).bold();
            if idx == 0 {
                self.row(key, text);
            } else {
                status(format!("{indent} {text}"));
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
