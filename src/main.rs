use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor},
    path::PathBuf,
};

use clap::Parser;
use reckon::{Options, run, util::num::MAX_PRECISION};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// reckon is a desk calculator: type statements ending in `=` and get one
/// result per statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads statements from this file instead of standard input.
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Number of significant digits printed for each result.
    #[arg(short, long,
          default_value_t = Options::default().precision,
          value_parser = parse_precision)]
    precision: usize,

    /// Does not print the help banner.
    #[arg(short, long)]
    quiet: bool,

    /// Statements to evaluate instead of reading standard input.
    source: Option<String>,
}

const HELP: &str = "
You are allowed to use +, -, *, /, %, sqrt() and pow().

Once you are done entering an expression, enter a '=' to execute it. Quit with 'exit' or 'x'.
Declare variables with 'let <name> = <expression>'; 'pi' and 'e' are predefined.
pow() is used in the following syntax: pow(<number to be raised>,<number to raise it to>)
";

fn parse_precision(text: &str) -> Result<usize, String> {
    let digits: usize = text.parse().map_err(|_| format!("'{text}' is not a number"))?;
    if (1..=MAX_PRECISION).contains(&digits) {
        Ok(digits)
    } else {
        Err(format!("precision must be between 1 and {MAX_PRECISION}"))
    }
}

/// Logs to stderr, and only when `RUST_LOG` asks for it.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let input: Box<dyn BufRead> = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        Box::new(BufReader::new(file))
    } else if let Some(source) = args.source {
        Box::new(Cursor::new(source.into_bytes()))
    } else {
        Box::new(io::stdin().lock())
    };

    if !args.quiet {
        println!("{HELP}");
    }

    let options = Options { precision: args.precision };
    if let Err(e) = run(input, &mut io::stdout().lock(), &mut io::stderr().lock(), options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
