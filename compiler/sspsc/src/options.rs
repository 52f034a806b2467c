//! Command-line option parsing.
//!
//! Short flags may be combined (`-sx`). Anything not starting with `-` is
//! the program path; the last one wins. Unknown flags are reported as
//! warnings and skipped, never fatal.

use ssps_eval::{EvalConfig, Scoping};

pub const USAGE: &str = "\
Usage: ssps [options] <file>

Options:
  -s                 Static scoping
  -d                 Dynamic scoping (default)
  -x                 Trace every operator and call
  --max-depth=<n>    Limit procedure call depth
  -h, --help         Show this message

Short flags combine: -sx";

/// Parsed command-line settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: EvalConfig,
    pub path: Option<String>,
    pub help: bool,
}

/// Options plus the warnings produced while parsing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: Options,
    pub warnings: Vec<String>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedArgs::default();
    for arg in args {
        let arg = arg.as_ref();
        if let Some(long) = arg.strip_prefix("--") {
            parse_long(long, &mut parsed);
        } else if let Some(flags) = arg.strip_prefix('-') {
            for flag in flags.chars() {
                parse_short(flag, &mut parsed);
            }
        } else {
            parsed.options.path = Some(arg.to_string());
        }
    }
    parsed
}

fn parse_short(flag: char, parsed: &mut ParsedArgs) {
    let options = &mut parsed.options;
    match flag {
        's' => options.config = options.config.with_scoping(Scoping::Static),
        'd' => options.config = options.config.with_scoping(Scoping::Dynamic),
        'x' => options.config = options.config.with_trace(true),
        'h' => options.help = true,
        other => parsed
            .warnings
            .push(format!("Command line argument '{other}' not recognized. Skipping...")),
    }
}

fn parse_long(long: &str, parsed: &mut ParsedArgs) {
    if long == "help" {
        parsed.options.help = true;
    } else if let Some(value) = long.strip_prefix("max-depth=") {
        match value.parse::<usize>() {
            Ok(depth) => {
                parsed.options.config = parsed.options.config.with_max_depth(Some(depth));
            }
            Err(_) => parsed
                .warnings
                .push(format!("Invalid --max-depth value '{value}'. Skipping...")),
        }
    } else {
        parsed
            .warnings
            .push(format!("Command line argument '--{long}' not recognized. Skipping..."));
    }
}
