use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use numerus::{Converter, Grammar};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// numerus converts Roman numerals to integers, rejecting malformed numerals
/// with a precise reason.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also reject numerals that are not written in the standard historical
    /// form, such as `IC` or `IIV`.
    #[arg(short, long)]
    strict: bool,

    /// Log every conversion to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Numerals to convert. Without any, an interactive prompt is started.
    numerals: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let converter = Converter::new(if args.strict { Grammar::Strict } else { Grammar::Minimal });

    if args.numerals.is_empty() {
        if let Err(e) = repl(converter, io::stdin().lock(), io::stdout()) {
            eprintln!("Failed to read from the terminal: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match convert_all(converter, &args.numerals, io::stdout(), io::stderr()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to write results: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                  .with(filter)
                                  .init();
}

/// Converts every numeral, writing results to `output` and failures to
/// `errors`. Returns `false` if any numeral failed.
fn convert_all(converter: Converter,
               numerals: &[String],
               mut output: impl Write,
               mut errors: impl Write)
               -> io::Result<bool> {
    let mut all_converted = true;

    for numeral in numerals {
        match converter.convert(numeral.as_str()) {
            Ok(value) => writeln!(output, "{numeral} → {value}")?,
            Err(e) => {
                writeln!(errors, "Error: {e}")?;
                all_converted = false;
            },
        }
    }

    Ok(all_converted)
}

/// Reads numerals line by line until `q`, `quit` or end of input. Conversion
/// failures are printed and never end the loop.
fn repl(converter: Converter, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Roman Numeral → Integer Converter")?;
    writeln!(output, "================================\n")?;
    writeln!(output, "Enter a Roman numeral (e.g. IV, MCMXCIV, MMMCMXCIX)")?;
    writeln!(output, "or 'q' to quit\n")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Roman numeral: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        };
        let numeral = line.trim();

        if numeral.is_empty() {
            writeln!(output, "Please enter something.\n")?;
            continue;
        }

        if numeral.eq_ignore_ascii_case("q") || numeral.eq_ignore_ascii_case("quit") {
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        }

        match converter.convert(numeral) {
            Ok(value) => writeln!(output, "{numeral} → {value}\n")?,
            Err(e) => writeln!(output, "Error: {e}\n")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_repl(converter: Converter, script: &str) -> String {
        let mut output = Vec::new();
        repl(converter, Cursor::new(script), &mut output).expect("in-memory io cannot fail");
        String::from_utf8(output).expect("output is utf-8")
    }

    #[test]
    fn repl_survives_failures_and_stops_at_quit() {
        let output = run_repl(Converter::default(), "IIII\n\nxlii\nQuit\nIV\n");

        assert!(output.contains("Error: Roman numerals cannot repeat more than three times"));
        assert!(output.contains("Please enter something."));
        assert!(output.contains("Error: only I, V, X, L, C, D, M are allowed, found 'x'"));
        assert!(output.trim_end().ends_with("Goodbye!"));
        assert!(!output.contains("IV → 4"));
    }

    #[test]
    fn repl_quit_is_case_insensitive() {
        for command in ["q", "Q", "quit", "QUIT", "  qUiT  "] {
            let output = run_repl(Converter::default(), &format!("X\n{command}\nV\n"));
            assert!(output.contains("X → 10"), "{command}");
            assert!(!output.contains("V → 5"), "{command}");
            assert!(output.contains("Goodbye!"), "{command}");
        }
    }

    #[test]
    fn repl_ends_at_end_of_input() {
        let output = run_repl(Converter::default(), "  XLII  \nMCMXCIV");

        assert!(output.contains("XLII → 42"));
        assert!(output.contains("MCMXCIV → 1994"));
        assert!(output.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn repl_uses_the_configured_grammar() {
        let output = run_repl(Converter::strict(), "IC\n");
        assert!(output.contains("Error: 'IC' is not a standard Roman numeral"));

        let output = run_repl(Converter::default(), "IC\n");
        assert!(output.contains("IC → 99"));
    }

    #[test]
    fn convert_all_reports_failure() {
        let numerals = ["MCMXCIV".to_string(), "IIII".to_string(), "IV".to_string()];
        let (mut output, mut errors) = (Vec::<u8>::new(), Vec::<u8>::new());

        let all_converted =
            convert_all(Converter::default(), &numerals, &mut output, &mut errors).expect("io");

        assert!(!all_converted);
        assert_eq!(String::from_utf8_lossy(&output), "MCMXCIV → 1994\nIV → 4\n");
        assert!(String::from_utf8_lossy(&errors).starts_with("Error: Roman numerals cannot repeat"));
    }

    #[test]
    fn convert_all_succeeds_when_every_numeral_converts() {
        let numerals = ["I".to_string(), "MMMCMXCIX".to_string()];
        let mut errors = Vec::<u8>::new();

        let all_converted =
            convert_all(Converter::default(), &numerals, Vec::<u8>::new(), &mut errors).expect("io");

        assert!(all_converted);
        assert!(errors.is_empty());
    }
}
