//! Prints the running maximum of a fixed three-element sequence.

use std::process::ExitCode;

use complexity_examples::{Result, find_max_counted};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

// Scans the whole sequence and renders the running maximum for stdout
fn run(values: &[i32]) -> Result<String> {
    let counted = find_max_counted(values, values.len())?.map(|max| max.to_string());
    tracing::info!(ops = counted.ops, "scan finished");
    Ok(counted.into_value())
}

fn main() -> ExitCode {
    init_tracing();

    match run(&[1, 2, 3]) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("find_max failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;

    use complexity_examples::Error;

    #[test]
    fn test_run_prints_bounded_maximum() {
        assert_eq!(run(&[1, 2, 3]).unwrap(), "2");
        assert_eq!(run(&[5, 3, 9, 1]).unwrap(), "9");
        assert_eq!(run(&[7]).unwrap(), "7");
    }

    #[test]
    fn test_run_output_is_a_single_line() {
        let line = run(&[-4, -2, -9]).unwrap();
        assert_eq!(line, "-2");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_run_empty_sequence_fails() {
        assert_eq!(run(&[]), Err(Error::EmptySequence));
    }
}
