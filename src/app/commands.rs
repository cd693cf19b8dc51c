//! One-shot commands: `eval` and `keys`.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

use crate::calculator::calculate;
use crate::clipboard::copy_to_clipboard;
use crate::config::AppConfig;
use crate::error::EvalError;
use crate::keypad::{Showing, parse_key_sequence};

/// JSON body for a failed evaluation.
#[derive(Serialize)]
struct EvalFailure<'a> {
    expression: &'a str,
    message: String,
    error: &'a EvalError,
}

/// Evaluate one expression and write the result to `out`.
///
/// A failed evaluation writes the error marker (or a JSON error) and
/// yields a failure exit code; the details go to the log.
pub fn eval(
    config: &AppConfig,
    expression: &str,
    json: bool,
    copy: bool,
    out: &mut impl Write,
) -> Result<ExitCode> {
    match calculate(&config.evaluator(), &config.result_format(), expression) {
        Ok(result) => {
            if json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else {
                writeln!(out, "{}", result.display)?;
            }

            if copy {
                copy_to_clipboard(result.text_for_clipboard())?;
                info!("Copied {} to clipboard", result.text_for_clipboard());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                let failure = EvalFailure {
                    expression: expression.trim(),
                    message: e.to_string(),
                    error: &e,
                };
                writeln!(out, "{}", serde_json::to_string(&failure)?)?;
            } else {
                writeln!(out, "{}", config.error_marker)?;
            }
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Press a scripted key sequence and write the final display to `out`.
pub fn keys(config: &AppConfig, sequence: &str, out: &mut impl Write) -> Result<ExitCode> {
    let keys = parse_key_sequence(sequence)?;
    let mut keypad = config.keypad();
    keypad.press_all(keys);
    writeln!(out, "{}", keypad.display())?;

    if keypad.showing() == Showing::Error {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
