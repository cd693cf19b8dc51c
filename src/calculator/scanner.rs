//! Left-to-right scanner over an expression string.
//!
//! Works like stream extraction: whitespace in front of every token is
//! skipped, and the caller decides whether a numeral or an operator comes
//! next.

use super::token::{Operator, Token};
use crate::error::EvalError;

/// Cursor over an expression, handing out numerals and operators on demand.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True when nothing but whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.input[self.pos..].trim_start().is_empty()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Read the next operator.
    ///
    /// Returns `Ok(None)` at end of input and a parse error if the next
    /// character is anything other than `+ - * /`.
    pub fn next_operator(&mut self) -> Result<Option<Operator>, EvalError> {
        self.skip_whitespace();
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        match Operator::from_char(c) {
            Some(op) => {
                self.pos += c.len_utf8();
                Ok(Some(op))
            }
            None => Err(EvalError::parse(
                self.pos,
                format!("'{}' where an operator was expected", c),
            )),
        }
    }

    /// Read the next decimal numeral.
    ///
    /// Accepts `digits[.digits]`, `.digits` and an optional exponent. A
    /// leading `+` or `-` is only part of the numeral when `allow_sign` is set.
    /// Returns `Ok(None)` at end of input.
    pub fn next_number(&mut self, allow_sign: bool) -> Result<Option<f64>, EvalError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(first) = self.peek() else {
            return Ok(None);
        };

        let bytes = self.input.as_bytes();
        let mut end = start;
        if allow_sign && matches!(first, '+' | '-') {
            end += 1;
        }

        let int_digits = count_digits(bytes, end);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(bytes, end + 1);
            end += 1 + frac_digits;
        }

        if int_digits == 0 && frac_digits == 0 {
            return Err(EvalError::parse(
                start,
                format!("'{}' where a number was expected", first),
            ));
        }

        // Exponent only counts when it has digits; "2e" leaves the 'e' unread.
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(bytes, exp_end);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }

        let text = &self.input[start..end];
        let value = text
            .parse::<f64>()
            .map_err(|_| EvalError::parse(start, format!("invalid number '{}'", text)))?;

        self.pos = end;
        Ok(Some(value))
    }

    /// Read an operand that is the text of an earlier result.
    ///
    /// Same as `next_number(true)`, but also accepts the `inf`, `-inf` and
    /// `nan` spellings that the result formatter produces.
    pub fn next_result_operand(&mut self) -> Result<Option<f64>, EvalError> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let unsigned = rest.strip_prefix(|c| c == '+' || c == '-').unwrap_or(rest);

        for (word, value) in [("inf", f64::INFINITY), ("nan", f64::NAN)] {
            if unsigned.starts_with(word) {
                let negative = rest.starts_with('-');
                self.pos += rest.len() - unsigned.len() + word.len();
                return Ok(Some(if negative { -value } else { value }));
            }
        }

        self.next_number(true)
    }
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

/// Split an expression into alternating numeral and operator tokens.
///
/// Stops quietly at end of input, so a trailing operator shows up as the
/// last token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    let mut expect_number = true;

    loop {
        let token = if expect_number {
            scanner
                .next_number(!tokens.is_empty())?
                .map(Token::Number)
        } else {
            scanner.next_operator()?.map(Token::Operator)
        };

        match token {
            Some(token) => tokens.push(token),
            None => break,
        }
        expect_number = !expect_number;
    }

    Ok(tokens)
}
