pub mod list;
pub mod run;
pub mod tour;

use clap::{ArgAction, Parser, Subcommand};
use primer_common::config::Config;
use primer_core::catalog::Exercise;

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Small validated exercises from an introductory programming course.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less, repeat to print only results
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Explain why an input was rejected
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not show the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print rejected input as -1, false or "Invalid value"
    #[arg(long, global = true)]
    pub legacy: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every exercise
    #[command(alias = "l")]
    List,
    /// Run one exercise with the given arguments
    #[command(alias = "r")]
    Run {
        exercise: Exercise,
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// Replay the example session of one or all exercises
    #[command(alias = "t")]
    Tour { exercise: Option<Exercise> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_banner: self.no_banner,
            legacy: self.legacy,
        }
    }
}
