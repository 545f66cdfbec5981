use primer_common::config::Config;
use primer_common::success;
use primer_core::catalog::Exercise;
use primer_core::tour;

use crate::terminal::print;

pub fn tour(exercise: Option<Exercise>, cfg: &Config) {
    let exercises: Vec<Exercise> = match exercise {
        Some(exercise) => vec![exercise],
        None => Exercise::ALL.to_vec(),
    };

    for exercise in &exercises {
        print::section(exercise.name(), cfg.quiet);
        for line in tour::transcript(*exercise) {
            if cfg.quiet > 0 {
                print::line(&line);
            } else {
                print::status(line);
            }
        }
    }

    if cfg.quiet == 0 {
        print::rule();
    }
    success!("replayed {} exercise(s)", exercises.len());
}
