//! Line-oriented calculator session.
//!
//! Every line is evaluated as if `=` had been pressed. Lines starting with
//! `:` are session commands.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::calculator::{MAX_SIGNIFICANT_DIGITS, calculate, tokenize};
use crate::config::AppConfig;

const HELP: &str = "\
Enter an expression such as 2+3*4 to evaluate it.
Commands:
  :tokens <expr>        show how an expression is scanned
  :digits <1-17>        set significant digits
  :separators on|off    group result digits with commas
  :q, :quit             leave";

/// What the session wants printed after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplOutput {
    Line(String),
    Silent,
    Quit,
}

/// State of a running REPL.
pub struct ReplSession {
    config: AppConfig,
    persist: bool,
}

impl ReplSession {
    /// Create a session. With `persist`, setting changes are written back
    /// to the config file if one exists.
    pub fn new(config: AppConfig, persist: bool) -> Self {
        Self { config, persist }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> ReplOutput {
        let line = line.trim();
        if line.is_empty() {
            return ReplOutput::Silent;
        }
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command);
        }

        match calculate(
            &self.config.evaluator(),
            &self.config.result_format(),
            line,
        ) {
            Ok(result) => ReplOutput::Line(result.display),
            Err(e) => {
                debug!(expression = line, error = %e, "Evaluation failed");
                ReplOutput::Line(self.config.error_marker.clone())
            }
        }
    }

    fn handle_command(&mut self, command: &str) -> ReplOutput {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((command, ""));

        match name {
            "q" | "quit" => ReplOutput::Quit,
            "help" => ReplOutput::Line(HELP.to_string()),
            "tokens" => match tokenize(arg) {
                Ok(tokens) => ReplOutput::Line(
                    tokens
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" "),
                ),
                Err(e) => ReplOutput::Line(e.to_string()),
            },
            "digits" => match arg.parse::<usize>() {
                Ok(digits) if (1..=MAX_SIGNIFICANT_DIGITS).contains(&digits) => {
                    self.config.significant_digits = digits;
                    self.persist(|c| c.significant_digits = digits);
                    ReplOutput::Line(format!("Significant digits: {}", digits))
                }
                _ => ReplOutput::Line("Usage: :digits <1-17>".to_string()),
            },
            "separators" => {
                let enabled = match arg {
                    "on" => true,
                    "off" => false,
                    _ => return ReplOutput::Line("Usage: :separators on|off".to_string()),
                };
                self.config.thousands_separators = enabled;
                self.persist(|c| c.thousands_separators = enabled);
                ReplOutput::Line(format!("Thousands separators: {}", arg))
            }
            other => ReplOutput::Line(format!("Unknown command ':{}' (try :help)", other)),
        }
    }

    fn persist(&self, f: impl FnOnce(&mut AppConfig)) {
        if self.persist {
            crate::config::update_config(f);
        }
    }
}

/// Read lines from `input` until end of input or `:quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut ReplSession,
    input: R,
    output: &mut W,
    prompt: bool,
) -> Result<()> {
    info!("Ready. Type :help for commands, :q to quit");

    write_prompt(output, prompt)?;
    for line in input.lines() {
        match session.handle_line(&line?) {
            ReplOutput::Quit => break,
            ReplOutput::Line(text) => writeln!(output, "{}", text)?,
            ReplOutput::Silent => {}
        }
        write_prompt(output, prompt)?;
    }

    Ok(())
}

fn write_prompt<W: Write>(output: &mut W, prompt: bool) -> std::io::Result<()> {
    if prompt {
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
