use std::{fs, io, path::PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use evil::{
    Error,
    lookup::{glob_lookup, read_lines, str_lookup},
    preset::{maths, set},
};
use tracing_subscriber::EnvFilter;

/// evil evaluates expressions over numbers, file trees or lists of strings
/// with configurable operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells evil to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// What the pattern tokens of the expression stand for.
    #[arg(short, long, value_enum, default_value_t = Mode::Maths)]
    mode: Mode,

    /// Directory searched in glob mode.
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path of the file holding it. Several words are
    /// joined with spaces.
    #[arg(required = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Numbers and the arithmetic and comparison operators.
    Maths,
    /// Set arithmetic over the relative paths of the files under `--root`.
    Glob,
    /// Set arithmetic over the lines read from standard input.
    Lines,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
                             .with_writer(io::stderr)
                             .init();
}

fn print_set(items: &set::Set) {
    for item in items {
        println!("{item}");
    }
}

fn run(expression: &str, args: &Args) -> Result<(), Error> {
    match args.mode {
        Mode::Maths => println!("{}", maths::evaluate(expression)?),
        Mode::Glob => print_set(&set::evaluate(expression, |pattern| glob_lookup(pattern, &args.root))?),
        Mode::Lines => {
            let space = read_lines(io::stdin().lock())?;
            print_set(&set::evaluate(expression, |pattern| str_lookup(pattern, &space))?);
        },
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let contents = args.expression.join(" ");
    let expression = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    if let Err(e) = run(&expression, &args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
