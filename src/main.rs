use std::{fs, process::ExitCode};

use clap::Parser;
use ks::interpreter::{executor::core::Interpreter, host::StdHost};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// ks runs programs written in KS, a small scripting language with Korean
/// keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ks to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints every variable and its final value after the run, sorted by
    /// name. Also printed when the run fails.
    #[arg(short, long)]
    dump_variables: bool,

    contents: String,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=ks=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut interpreter = Interpreter::new(StdHost::new());
    let result = interpreter.run(&script);

    if args.dump_variables {
        for (name, value) in interpreter.variables().sorted() {
            println!("{name} = {value}");
        }
    }

    if result.is_err() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
