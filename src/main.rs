use std::{
    fs::File,
    io::{self, BufReader, Write},
};

use bblisp::{run_line, session::Session};
use clap::Parser;

/// bblisp is a tiny calculator that evaluates integer S-expressions such as
/// `(+ 1 (* 2 3))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bblisp to treat `contents` as a file and evaluate it line by
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Skips the banner printed before an interactive session.
    #[arg(short, long)]
    quiet: bool,

    /// An expression to evaluate. Starts an interactive session when omitted.
    contents: Option<String>,
}

/// Installs a stderr subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn repl(quiet: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    if !quiet {
        writeln!(stdout,
                 "bblisp version {}\nPress Ctrl+c or Ctrl+d to exit\n",
                 env!("CARGO_PKG_VERSION"))?;
    }

    Session::interactive("bblisp> ").run(io::stdin().lock(), &mut stdout)
}

fn run_script(path: &str) -> io::Result<()> {
    let file = File::open(path).unwrap_or_else(|e| {
                                   eprintln!("Failed to read the input file '{path}': {e}");
                                   std::process::exit(1);
                               });

    Session::script(path).run(BufReader::new(file), &mut io::stdout().lock())
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let result = match args.contents {
        None => repl(args.quiet),
        Some(path) if args.file => run_script(&path),
        Some(expr) => run_line(&expr, &mut io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
