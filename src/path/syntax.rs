use crate::errors::{Error, Result};
use crate::geometry::Point;

/// Command letters recognised in path markup. `F` is the XAML fill-rule
/// directive and is only valid before any geometry.
const COMMANDS: &str = "MmLlHhVvZzCcSsQqTtAaF";

/// Character cursor over path markup.
pub struct MarkupSyntax {
    data: Vec<char>,
    index: usize,
}

impl MarkupSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }
}

impl PathSyntax for MarkupSyntax {
    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    fn position(&self) -> usize {
        self.index
    }
}

/// Token-level reads over a character source.
///
/// Implementors supply the cursor primitives; all scanning is built on those.
/// Every successful read leaves the cursor past any trailing separator, so
/// callers never need to skip separators between arguments themselves.
pub trait PathSyntax {
    fn current(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;
    fn position(&self) -> usize;

    fn at_command(&self) -> bool {
        matches!(self.current(), Some(c) if COMMANDS.contains(c))
    }

    fn at_number_start(&self) -> bool {
        matches!(self.current(), Some('0'..='9' | '.' | '+' | '-'))
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    /// Error for a missing argument at `pos`: running into the end of the data
    /// or the next command is a structural problem, anything else is a bad token.
    fn missing_argument(&self, pos: usize, what: &str) -> Error {
        match self.current() {
            None => Error::Parse(pos, format!("expected {what}, ran out of data")),
            Some(c) if self.at_command() => {
                Error::Parse(pos, format!("expected {what}, found command '{c}'"))
            }
            Some(c) => Error::Lex(self.position(), format!("expected {what}, found '{c}'")),
        }
    }

    fn read_flag(&mut self) -> Result<bool> {
        // a flag is exactly one character, so "01" is two flags; only the
        // separator run before the flag has already been consumed.
        let res = match self.current() {
            Some('0') => false,
            Some('1') => true,
            Some(c) if !self.at_command() => {
                return Err(Error::Lex(
                    self.position(),
                    format!("invalid flag '{c}', expected '0' or '1'"),
                ))
            }
            _ => return Err(self.missing_argument(self.position(), "flag")),
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    fn read_number(&mut self) -> Result<f64> {
        let start = self.position();
        let negative = match self.current() {
            Some('-') => {
                self.advance();
                true
            }
            Some('+') => {
                self.advance();
                false
            }
            _ => false,
        };
        let value = self.scan_unsigned(start)?;
        Ok(if negative { -value } else { value })
    }

    /// Digits, at most one '.', and an optional exponent. A second '.' ends
    /// the number, so "5.5.5" scans as 5.5 followed by .5
    fn scan_unsigned(&mut self, start: usize) -> Result<f64> {
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        let mut digits_seen = false;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                    digits_seen = true;
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                // mantissa needs a digit, but may end in '.' as in "1.e2"
                'e' | 'E' if exp_valid && digits_seen => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    if !matches!(self.current(), Some('0'..='9')) {
                        return Err(Error::Lex(start, format!("malformed exponent in '{s}'")));
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        if s.is_empty() {
            return Err(self.missing_argument(start, "number"));
        }
        let value: f64 = s
            .parse()
            .map_err(|e| Error::Lex(start, format!("invalid number '{s}': {e}")))?;
        if !value.is_finite() {
            return Err(Error::Lex(start, format!("number out of range '{s}'")));
        }
        self.skip_wsp_comma();
        Ok(value)
    }

    fn read_coord(&mut self) -> Result<Point> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(Point::new(x, y))
    }

    fn read_command(&mut self) -> Result<char> {
        match self.current() {
            Some(command) if self.at_command() => {
                self.advance();
                self.skip_whitespace();
                Ok(command)
            }
            Some(c) if self.at_number_start() => Err(Error::Parse(
                self.position(),
                format!("expected path command, found number starting '{c}'"),
            )),
            Some(c) => Err(Error::Parse(
                self.position(),
                format!("invalid path command '{c}'"),
            )),
            None => Err(Error::Parse(
                self.position(),
                "expected path command, ran out of data".to_string(),
            )),
        }
    }
}
