//! SSPS interpreter CLI.

use ssps_eval::stdout_handler;
use sspsc::{init_tracing, parse_args, run_file, USAGE};

fn main() {
    init_tracing();

    let parsed = parse_args(std::env::args().skip(1));
    for warning in &parsed.warnings {
        println!("{warning}");
    }

    if parsed.options.help {
        println!("{USAGE}");
        return;
    }

    let Some(path) = parsed.options.path else {
        eprintln!("error: missing file path");
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if run_file(&path, parsed.options.config, &stdout_handler()).is_err() {
        std::process::exit(1);
    }
}
