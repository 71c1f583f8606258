use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use transport_catalogue::io::{HandlerError, process};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Read from the file given as the only argument, otherwise stdin
    let result = match std::env::args_os().nth(1) {
        Some(path) => File::open(&path)
            .map_err(HandlerError::from)
            .and_then(|file| run(BufReader::new(file))),
        None => run(io::stdin().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to process requests");
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl io::Read) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    process(input, &mut output)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
