use std::fs;

use clap::Parser;
use prefix_eval::{evaluate_script, interpreter::operation::OPERATORS};
use tracing::{Level, info};

/// prefix-eval evaluates arithmetic expressions written in prefix (Polish)
/// notation, such as `+ 1 * 2 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prefix-eval to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints only the result of the last expression.
    #[arg(short, long)]
    last: bool,

    /// Prints the supported operators and exits.
    #[arg(long)]
    list_operators: bool,

    /// Raises log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a file path when `--file` is given.
    #[arg(required_unless_present = "list_operators")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_operators {
        for op in OPERATORS {
            println!("{op}");
        }
        return;
    }

    let contents = args.contents.unwrap_or_default();
    let script = if args.file {
        info!(path = %contents, "reading script");
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match evaluate_script(&script) {
        Ok(results) => {
            let shown = if args.last { results.len().saturating_sub(1) } else { 0 };
            for value in &results[shown..] {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Installs a stderr `fmt` subscriber whose level follows `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}
