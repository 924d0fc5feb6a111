use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};

use crate::core::{tally, MIN_OPERANDS};
use crate::utils::{report_error, AppError, AppResult, OutputStyle};

const EXAMPLES: &str = "\
Examples:
  tally 3 4                Returns: 7
  tally -5 17              Returns: 12
  tally 1 2 3 4 5          Returns: 15";

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Add two or more numbers together.")]
#[command(override_usage = "tally <number1> <number2> [number3] ...")]
#[command(after_help = EXAMPLES)]
#[command(disable_help_flag = true)]
pub struct Cli {
    #[arg(
        value_name = "NUMBER",
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        help = "Numbers to add together (at least 2 required)"
    )]
    pub numbers: Vec<String>,

    #[arg(short, long, action = ArgAction::Help, help = "Show this help message")]
    help: Option<bool>,
}

impl Cli {
    /// Parse every operand token, stopping at the first one that is not a number
    pub fn operands(&self) -> AppResult<Vec<f64>> {
        if self.numbers.len() < MIN_OPERANDS {
            return Err(AppError::InvalidArgumentCount {
                found: self.numbers.len(),
            });
        }

        self.numbers.iter().map(|token| parse_number(token)).collect()
    }

    /// Validate, parse and sum the operands
    pub fn execute(&self) -> AppResult<f64> {
        let numbers = self.operands()?;
        Ok(tally(&numbers)?)
    }
}

/// Parse a single command-line token as `f64`.
///
/// `NaN` is never an operand. Of the spelled-out infinities only
/// `Infinity` (optionally signed) is accepted; `inf` and other casings are not.
pub fn parse_number(token: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidNumberLiteral(token.to_string());

    let trimmed = token.trim();
    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;

    let body = trimmed.trim_start_matches(['+', '-']);
    let spelled_out = body.starts_with(|c: char| c.is_ascii_alphabetic());
    if value.is_nan() || (spelled_out && body != "Infinity") {
        return Err(invalid());
    }

    Ok(value)
}

/// Rendered usage text, without terminal styling
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// First line of a clap error, without clap's own `error: ` prefix
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

fn is_help_flag(arg: &OsString) -> bool {
    arg == "--help" || arg == "-h"
}

/// Run the tool against `args` (program name first) and return the exit code.
///
/// Results and help go to `out`, errors to `err`.
pub fn run<I, T>(
    args: I,
    out: &mut impl Write,
    err: &mut impl Write,
    style: &OutputStyle,
) -> io::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.iter().skip(1).any(is_help_flag) {
        write!(out, "{}", help_text())?;
        return Ok(0);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            write!(out, "{}", help_text())?;
            return Ok(0);
        }
        Err(e) => {
            report_error(&AppError::Usage(usage_message(&e)), err, style)?;
            return Ok(1);
        }
    };

    match cli.execute() {
        Ok(total) => {
            writeln!(out, "{}", total)?;
            Ok(0)
        }
        Err(e) => {
            report_error(&e, err, style)?;
            Ok(1)
        }
    }
}
