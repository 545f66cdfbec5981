use colored::*;

use crate::terminal::print;

const LOGO: &str = r#"
     ____  ____  ___ __  __ _____ ____
    |  _ \|  _ \|_ _|  \/  | ____|  _ \
    | |_) | |_) || || |\/| |  _| | |_) |
    |  __/|  _ < | || |  | | |___|  _ <
    |_|   |_| \_\___|_|  |_|_____|_| \_\
"#;

const TAGLINE: &str = "validated exercises, one scalar at a time";

pub fn print() {
    for line in LOGO.lines().skip(1) {
        print::line(&line.bright_green().to_string());
    }
    print::centered(&TAGLINE.italic().bright_black().to_string());
    print::rule();
}
