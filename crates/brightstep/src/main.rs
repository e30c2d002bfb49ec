//! brightstep — step display backlight brightness along a square-root curve.
//!
//! Tokens are order-independent: `inc`/`increase`, `dec`/`decrease`, `-d`,
//! and a device name when more than one backlight exists.

use std::ffi::OsString;
use std::path::PathBuf;

use brightstep_lib::error::EXIT_USAGE;
use clap::Parser;
use clap::error::ErrorKind;

mod cli;

#[derive(Parser)]
#[command(
    name = "brightstep",
    version,
    about = "Step display backlight brightness along a square-root curve"
)]
struct Args {
    /// Enable verbose diagnostic output
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Increase brightness (same as the `inc` token)
    #[arg(long = "inc", visible_alias = "increase")]
    inc: bool,

    /// Decrease brightness (same as the `dec` token)
    #[arg(long = "dec", visible_alias = "decrease")]
    dec: bool,

    /// List backlight devices and exit
    #[arg(long)]
    list: bool,

    /// Output as JSON (for --list)
    #[arg(long)]
    json: bool,

    /// Use an alternative config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// `inc`, `increase`, `dec`, `decrease`, or a device name
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,
}

/// Single-dash direction spellings that clap would otherwise split into
/// short flags (`-inc` as `-i -n -c`).
const SINGLE_DASH_SPELLINGS: &[(&str, &str)] = &[("-inc", "--inc"), ("-dec", "--dec")];

/// Rewrite single-dash direction spellings to their long forms. Arguments
/// after `--` are left alone.
fn normalize_args(argv: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut after_separator = false;
    argv.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            SINGLE_DASH_SPELLINGS
                .iter()
                .find(|(short, _)| arg == *short)
                .map_or(arg, |(_, long)| OsString::from(*long))
        })
        .collect()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_USAGE);
            }
        },
    };

    let request = cli::Request {
        tokens: args.tokens,
        inc: args.inc,
        dec: args.dec,
        debug: args.debug,
        list: args.list,
        json: args.json,
        config: args.config,
    };

    // `-d` may also arrive as a plain token, so the log level follows the
    // parsed invocation.
    let invocation = request.invocation();
    init_logging(invocation.as_ref().map_or(request.debug, |inv| inv.verbose));

    if let Err(e) = invocation.and_then(|inv| cli::run(&request, &inv)) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
