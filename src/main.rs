use catto::runtime::{
    config::InterpreterConfig,
    error,
    interpreter::{CodeManagement, InterpreterStack, catto_interpreter::CattoInterpreter},
};
use std::{
    env::args_os,
    io::{self, Read, Write},
};
use tracing::debug;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

/// Printed instead of the stack when a program nests eval too deeply.
const RECURSION_LIMIT_MESSAGE: &str = "Recursion Limit :(";

/// The source tag for the program read from standard input.
const PROGRAM_SOURCE_PATH: &str = "<stdin>";

/// Read the whole program from standard input.
fn read_program() -> error::Result<String> {
    let mut source = String::new();

    io::stdin().lock().read_to_string(&mut source)?;
    Ok(source)
}

/// Print the stack one value per line, bottom first.
fn print_stack(stack: &[String]) -> error::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for value in stack {
        writeln!(out, "{}", value)?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> error::Result<()> {
    // Logs go to stderr so they never mix with the stack dump.  RUST_LOG overrides the default of
    // warnings only.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = InterpreterConfig::from_env();
    let source = read_program()?;

    // The command line arguments make up the starting stack, the first one at the bottom.  Arguments
    // that aren't valid UTF-8 are converted lossily.
    let arguments = args_os().skip(1).map(|argument| argument.to_string_lossy().into_owned());
    let mut interpreter = CattoInterpreter::with_stack(config, arguments);

    match interpreter.process_source(PROGRAM_SOURCE_PATH, &source) {
        Ok(()) => print_stack(interpreter.stack())?,
        Err(error) if error.is_recursion_limit() => {
            debug!(%error, "Evaluation abandoned.");
            println!("{}", RECURSION_LIMIT_MESSAGE);
        }
        Err(error) => return Err(error),
    }

    debug!(max_depth = interpreter.stack_max_depth(), "Evaluation finished.");

    Ok(())
}
