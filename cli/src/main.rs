mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, run, tour};
use primer_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    match commands.command {
        Commands::List => {
            print::section("exercises", cfg.quiet);
            list::list(&cfg);
            Ok(())
        }
        Commands::Run { exercise, args } => {
            print::section(exercise.name(), cfg.quiet);
            run::run(exercise, &args, &cfg)
        }
        Commands::Tour { exercise } => {
            tour::tour(exercise, &cfg);
            Ok(())
        }
    }
}
